//! Core state for the Okey 51 score tracker.
//! The whole game lives in one [`GameState`] value mutated through a reducer;
//! rendering is a read-only projection of it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;
use yew::Reducible;

/// Roster the tracker starts with (and returns to on "New Game").
pub const DEFAULT_PLAYER_NAMES: [&str; 3] = ["Ozge", "John", "Kerim"];

/// Roster floor: the remove control is only offered above this count.
pub const MIN_PLAYERS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique, assigned as max(existing)+1; display order is roster order.
    pub id: u32,
    pub name: String,
    /// One list of score deltas per round; index 0..=current_round.
    pub rounds: Vec<Vec<i64>>,
    /// Name field currently shown as an input box.
    pub is_editing: bool,
}

impl Player {
    fn with_empty_rounds(id: u32, name: String, round_count: usize, is_editing: bool) -> Self {
        Self {
            id,
            name,
            rounds: vec![Vec::new(); round_count],
            is_editing,
        }
    }

    /// Sum over every round; lower is better in Okey 51.
    pub fn grand_total(&self) -> i64 {
        self.rounds.iter().map(|r| round_total(r)).sum()
    }
}

/// Sum of one round's score list. Empty list totals 0.
pub fn round_total(scores: &[i64]) -> i64 {
    scores.iter().sum()
}

/// Whole-game phase derived from the state, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// No score entered anywhere; roster still editable.
    NotStarted,
    InProgress,
    Ended,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_round: usize,
    /// Advisory display state keyed "{playerId}-{roundIndex}"; absent keys
    /// default to expanded for the current round, collapsed otherwise.
    #[serde(default)]
    pub expanded_rounds: HashMap<String, bool>,
    /// Saves from the pre-end-game version of the widget lack this field.
    #[serde(default)]
    pub is_game_ended: bool,
}

impl Default for GameState {
    fn default() -> Self {
        let players = DEFAULT_PLAYER_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Player::with_empty_rounds(i as u32 + 1, (*name).to_string(), 1, false))
            .collect();
        Self {
            players,
            current_round: 0,
            expanded_rounds: HashMap::new(),
            is_game_ended: false,
        }
    }
}

impl GameState {
    pub fn expansion_key(player_id: u32, round: usize) -> String {
        format!("{player_id}-{round}")
    }

    pub fn is_round_expanded(&self, player_id: u32, round: usize) -> bool {
        self.expanded_rounds
            .get(&Self::expansion_key(player_id, round))
            .copied()
            .unwrap_or(round == self.current_round)
    }

    pub fn has_any_scores(&self) -> bool {
        self.players
            .iter()
            .any(|p| p.rounds.iter().any(|r| !r.is_empty()))
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_ended {
            GamePhase::Ended
        } else if self.has_any_scores() {
            GamePhase::InProgress
        } else {
            GamePhase::NotStarted
        }
    }

    /// Player with the minimum grand total; roster order breaks ties.
    /// `None` until the first score exists.
    pub fn current_leader(&self) -> Option<&Player> {
        if !self.has_any_scores() {
            return None;
        }
        self.players.iter().min_by_key(|p| p.grand_total())
    }

    /// All players, ascending by grand total, ties keeping roster order.
    pub fn ranking(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by_key(|p| p.grand_total());
        ranked
    }

    /// Roster is frozen once any score exists or the game has ended.
    pub fn can_add_player(&self) -> bool {
        !self.is_game_ended && !self.has_any_scores()
    }

    /// The remove control is hidden once the roster is at the floor.
    pub fn can_remove_players(&self) -> bool {
        !self.is_game_ended && self.players.len() > MIN_PLAYERS
    }

    pub fn can_end_game(&self) -> bool {
        self.phase() == GamePhase::InProgress
    }

    fn next_player_id(&self) -> u32 {
        self.players.iter().map(|p| p.id).max().map_or(1, |m| m + 1)
    }

    fn player_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }
}

#[derive(Clone, Debug)]
pub enum GameAction {
    /// Raw text from the score input; non-integer input is ignored.
    AddScore { player_id: u32, raw: String },
    RemoveLastScore { player_id: u32 },
    StartNewRound,
    AddPlayer,
    RemovePlayer { player_id: u32 },
    RenamePlayer { player_id: u32, name: String },
    ToggleNameEdit { player_id: u32 },
    ToggleRoundExpansion { player_id: u32, round: usize },
    EndGame,
    ResetGame,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            AddScore { player_id, raw } => {
                if new.is_game_ended {
                    return self;
                }
                let Ok(value) = raw.trim().parse::<i64>() else {
                    return self;
                };
                let round = new.current_round;
                match new.player_mut(player_id) {
                    Some(p) if round < p.rounds.len() => p.rounds[round].push(value),
                    _ => return self,
                }
            }
            RemoveLastScore { player_id } => {
                if new.is_game_ended {
                    return self;
                }
                let round = new.current_round;
                match new.player_mut(player_id) {
                    Some(p) if round < p.rounds.len() => {
                        if p.rounds[round].pop().is_none() {
                            return self;
                        }
                    }
                    _ => return self,
                }
            }
            StartNewRound => {
                if new.is_game_ended {
                    return self;
                }
                // Collapse every existing round, expand only the new one.
                let next_round = new.current_round + 1;
                let mut expanded = HashMap::new();
                for p in &new.players {
                    for idx in 0..p.rounds.len() {
                        expanded.insert(Self::expansion_key(p.id, idx), false);
                    }
                    expanded.insert(Self::expansion_key(p.id, next_round), true);
                }
                for p in &mut new.players {
                    p.rounds.push(Vec::new());
                }
                new.current_round = next_round;
                new.expanded_rounds = expanded;
            }
            AddPlayer => {
                if !new.can_add_player() {
                    return self;
                }
                let id = new.next_player_id();
                new.players.push(Player::with_empty_rounds(
                    id,
                    format!("Player {id}"),
                    new.current_round + 1,
                    true,
                ));
            }
            RemovePlayer { player_id } => {
                if new.is_game_ended {
                    return self;
                }
                let before = new.players.len();
                new.players.retain(|p| p.id != player_id);
                if new.players.len() == before {
                    return self;
                }
                let prefix = format!("{player_id}-");
                new.expanded_rounds.retain(|k, _| !k.starts_with(&prefix));
            }
            RenamePlayer { player_id, name } => match new.player_mut(player_id) {
                // Empty and whitespace names are accepted as-is.
                Some(p) => {
                    p.name = name;
                    p.is_editing = false;
                }
                None => return self,
            },
            ToggleNameEdit { player_id } => match new.player_mut(player_id) {
                Some(p) => p.is_editing = !p.is_editing,
                None => return self,
            },
            ToggleRoundExpansion { player_id, round } => {
                let expanded = new.is_round_expanded(player_id, round);
                new.expanded_rounds
                    .insert(Self::expansion_key(player_id, round), !expanded);
            }
            EndGame => {
                if !new.can_end_game() {
                    return self;
                }
                new.is_game_ended = true;
            }
            ResetGame => {
                new = GameState::default();
            }
        }
        Rc::new(new)
    }
}
