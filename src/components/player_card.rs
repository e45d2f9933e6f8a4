use crate::model::{round_total, GameAction, GameState, Player};
use crate::util::format_score;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayerCardProps {
    pub game: UseReducerHandle<GameState>,
    pub player: Player,
}

/// One player's panel: name (editable), score entry for the current round,
/// and the collapsible per-round score history.
#[function_component(PlayerCard)]
pub fn player_card(props: &PlayerCardProps) -> Html {
    let player = &props.player;
    let player_id = player.id;

    // Pending score input is view-local and never persisted; it is dropped
    // with the card when the player is removed.
    let input = use_state(String::new);

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_score_key = {
        let game = props.game.clone();
        let input = input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            let raw = e.target_unchecked_into::<HtmlInputElement>().value();
            if raw.is_empty() {
                return;
            }
            // The buffer only clears when the entry actually parses; a typo
            // stays in the box for correction.
            if raw.trim().parse::<i64>().is_ok() {
                input.set(String::new());
            }
            game.dispatch(GameAction::AddScore { player_id, raw });
        })
    };
    let remove_last = {
        let game = props.game.clone();
        Callback::from(move |_| game.dispatch(GameAction::RemoveLastScore { player_id }))
    };
    let toggle_edit = {
        let game = props.game.clone();
        Callback::from(move |_| game.dispatch(GameAction::ToggleNameEdit { player_id }))
    };
    let remove_player = {
        let game = props.game.clone();
        Callback::from(move |_| game.dispatch(GameAction::RemovePlayer { player_id }))
    };
    let on_name_key = {
        let game = props.game.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                let name = e.target_unchecked_into::<HtmlInputElement>().value();
                game.dispatch(GameAction::RenamePlayer { player_id, name });
            }
        })
    };

    let name_html = if player.is_editing {
        html! {
            <input
                style="width:140px; font-size:15px;"
                value={player.name.clone()}
                onkeydown={on_name_key}
            />
        }
    } else {
        html! { <span style="color:#58a6ff; font-weight:600; font-size:16px;">{ &player.name }</span> }
    };

    let current_round_empty = player
        .rounds
        .get(props.game.current_round)
        .map_or(true, |r| r.is_empty());

    let rounds_html: Html = player
        .rounds
        .iter()
        .enumerate()
        .map(|(round_index, scores)| {
            let expanded = props.game.is_round_expanded(player_id, round_index);
            let toggle = {
                let game = props.game.clone();
                Callback::from(move |_| {
                    game.dispatch(GameAction::ToggleRoundExpansion {
                        player_id,
                        round: round_index,
                    })
                })
            };
            let entries: Html = scores
                .iter()
                .map(|score| {
                    let color = if *score < 0 { "#f85149" } else { "#58a6ff" };
                    html! {
                        <div style={format!("font-size:16px; padding-left:10px; color:{color};")}>
                            { format_score(*score) }
                        </div>
                    }
                })
                .collect();
            html! {
                <div key={round_index} style="border:1px solid #30363d; border-radius:6px; padding:6px; margin-top:6px;">
                    <button onclick={toggle} style="width:100%; display:flex; justify-content:space-between; background:none; border:none; color:#8b949e; cursor:pointer; font-size:13px;">
                        <span>{ format!("Round {}", round_index + 1) }</span>
                        <span>
                            { format!("Total: {}", round_total(scores)) }
                            { if expanded { " ▾" } else { " ▸" } }
                        </span>
                    </button>
                    { if expanded { entries } else { html! {} } }
                </div>
            }
        })
        .collect();

    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:12px;">
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:10px;">
                { name_html }
                <div style="display:flex; gap:4px;">
                    <button onclick={toggle_edit} title="Edit name">{"✎"}</button>
                    {
                        if props.game.can_remove_players() {
                            html! { <button onclick={remove_player} title="Remove player" style="color:#f85149;">{"✕"}</button> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
            <div style="display:flex; gap:6px;">
                <input
                    style="flex:1; font-size:16px;"
                    placeholder="Enter score (+ or -)"
                    value={(*input).clone()}
                    {oninput}
                    onkeydown={on_score_key}
                />
                <button onclick={remove_last} disabled={current_round_empty} title="Remove last score">{"−"}</button>
            </div>
            <div style="margin-top:8px;">
                { rounds_html }
            </div>
        </div>
    }
}
