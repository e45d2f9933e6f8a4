use crate::model::GameState;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SummaryPanelProps {
    pub game: UseReducerHandle<GameState>,
}

/// Grand totals for every player at a glance; the current leader (lowest
/// total) is highlighted once any score exists.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let game = &props.game;
    let leader_id = game.current_leader().map(|p| p.id);

    let cells: Html = game
        .players
        .iter()
        .map(|player| {
            let is_leader = leader_id == Some(player.id);
            let name_color = if is_leader { "#d4af37" } else { "#58a6ff" };
            html! {
                <div key={player.id} style="text-align:center; min-width:120px;">
                    <div style={format!("font-size:15px; font-weight:600; color:{name_color};")}>
                        { &player.name }
                        { if is_leader { html! { <span style="margin-left:4px;">{"♛"}</span> } } else { html! {} } }
                    </div>
                    <div style="font-size:28px; font-weight:700; font-variant-numeric:tabular-nums;">
                        { player.grand_total() }
                    </div>
                </div>
            }
        })
        .collect();

    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:14px; margin-bottom:16px; display:flex; justify-content:space-around; flex-wrap:wrap; gap:12px;">
            { cells }
        </div>
    }
}
