use super::{player_card::PlayerCard, summary_panel::SummaryPanel, winner_view::WinnerView};
use crate::model::GameAction;
use crate::storage;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let game = use_reducer_eq(|| storage::load().unwrap_or_default());

    // Flush the full state to localStorage after every accepted mutation.
    {
        let snapshot = (*game).clone();
        use_effect_with(snapshot, move |state| {
            storage::save(state);
            || ()
        });
    }

    let add_player = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::AddPlayer))
    };
    let new_round = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::StartNewRound))
    };
    let end_game = {
        let game = game.clone();
        Callback::from(move |_| game.dispatch(GameAction::EndGame))
    };
    // New Game deletes the save slot before the state is reinitialized.
    let new_game = {
        let game = game.clone();
        Callback::from(move |_| {
            storage::clear();
            game.dispatch(GameAction::ResetGame);
        })
    };

    if game.is_game_ended {
        return html! { <WinnerView game={game.clone()} on_new_game={new_game} /> };
    }

    let cards: Html = game
        .players
        .iter()
        .map(|player| {
            html! { <PlayerCard key={player.id} game={game.clone()} player={player.clone()} /> }
        })
        .collect();

    html! {
        <div id="root" style="max-width:1100px; margin:0 auto; padding:16px; color:#e6edf3;">
            <div style="display:flex; justify-content:space-between; align-items:center; flex-wrap:wrap; gap:12px; margin-bottom:16px;">
                <div style="display:flex; align-items:baseline; gap:14px;">
                    <h1 style="margin:0; font-size:26px;">{"Okey 51 Score Tracker"}</h1>
                    <span style="font-size:15px; opacity:0.8;">{ format!("Round {}", game.current_round + 1) }</span>
                </div>
                <div style="display:flex; gap:8px;">
                    <button onclick={add_player} disabled={!game.can_add_player()}>{"Add Player"}</button>
                    <button onclick={new_round}>{"New Round"}</button>
                    <button onclick={end_game} disabled={!game.can_end_game()}>{"End Game"}</button>
                    <button onclick={new_game} style="background:#f85149; border:1px solid #b62324; color:#fff;">{"New Game"}</button>
                </div>
            </div>
            <SummaryPanel game={game.clone()} />
            <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(240px, 1fr)); gap:12px;">
                { cards }
            </div>
        </div>
    }
}
