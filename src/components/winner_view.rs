use crate::model::GameState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// How long the confetti stays on screen. Purely decorative; no state
/// mutation waits on it.
const CELEBRATION_MS: i32 = 5_000;
const CONFETTI_PIECES: usize = 40;

#[derive(Properties, PartialEq, Clone)]
pub struct WinnerViewProps {
    pub game: UseReducerHandle<GameState>,
    pub on_new_game: Callback<MouseEvent>,
}

/// End-of-game screen: winner banner, final ranking (ascending, lowest total
/// wins), and the way back to a fresh game.
#[function_component(WinnerView)]
pub fn winner_view(props: &WinnerViewProps) -> Html {
    let show_confetti = use_state(|| true);

    {
        let show_confetti = show_confetti.clone();
        use_effect_with((), move |_| {
            let cb = Closure::<dyn FnMut()>::new(move || show_confetti.set(false));
            let handle = web_sys::window().and_then(|win| {
                win.set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    CELEBRATION_MS,
                )
                .ok()
            });
            move || {
                if let (Some(win), Some(id)) = (web_sys::window(), handle) {
                    win.clear_timeout_with_handle(id);
                }
                drop(cb);
            }
        });
    }

    let game = &props.game;
    let winner = game.current_leader();

    let rankings: Html = game
        .ranking()
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let style = if i == 0 {
                "font-size:18px; font-weight:700; color:#d4af37;"
            } else {
                "font-size:15px; color:#e6edf3;"
            };
            html! {
                <div key={player.id} style={format!("display:flex; justify-content:space-between; gap:24px; padding:4px 0; {style}")}>
                    <span>{ format!("{}. {}", i + 1, player.name) }</span>
                    <span style="font-variant-numeric:tabular-nums;">{ player.grand_total() }</span>
                </div>
            }
        })
        .collect();

    let confetti: Html = if *show_confetti {
        (0..CONFETTI_PIECES)
            .map(|i| {
                let left = js_sys::Math::random() * 100.0;
                let delay = js_sys::Math::random() * 1.5;
                let glyph = ["🎉", "✨", "🎊"][i % 3];
                html! {
                    <span style={format!("position:absolute; top:-30px; left:{left:.1}%; font-size:22px; animation:confetti-fall 3s linear {delay:.2}s infinite;")}>
                        { glyph }
                    </span>
                }
            })
            .collect()
    } else {
        html! {}
    };

    html! {
        <div style="position:relative; min-height:100vh; overflow:hidden; color:#e6edf3; display:flex; align-items:center; justify-content:center;">
            <style>{"@keyframes confetti-fall { to { transform: translateY(110vh) rotate(360deg); } }"}</style>
            { confetti }
            <div style="background:rgba(22,27,34,0.95); border:2px solid #d4af37; border-radius:12px; padding:28px 36px; text-align:center; min-width:320px;">
                {
                    match winner {
                        Some(player) => html! {
                            <>
                                <h2 style="margin:0 0 8px 0; color:#d4af37;">{ format!("{} wins!", player.name) }</h2>
                                <p style="margin:0 0 16px 0; font-size:17px;">{ format!("Final Score: {}", player.grand_total()) }</p>
                            </>
                        },
                        None => html! { <h2 style="margin:0 0 16px 0;">{"Game Over"}</h2> },
                    }
                }
                <div style="border-top:1px solid #30363d; padding-top:12px; margin-bottom:16px;">
                    { rankings }
                </div>
                <button onclick={props.on_new_game.clone()} style="padding:8px 20px; font-size:15px;">{"New Game"}</button>
            </div>
        </div>
    }
}
