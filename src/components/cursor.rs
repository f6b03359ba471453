use chrono::Utc;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;

use crate::dom::{self, DomError, Listener};
use crate::state::cursor::{CursorAction, CursorTracker};

/// Elements that grow the cursor while hovered. Bound once, when the cursor attaches.
const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"]";

fn attach(dispatcher: UseReducerDispatcher<CursorTracker>) -> Result<Vec<Listener>, DomError> {
    let window = dom::window()?;
    let mut listeners = Vec::new();

    {
        let dispatcher = dispatcher.clone();
        listeners.push(Listener::new(&window, "mousemove", move |event: Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                dispatcher.dispatch(CursorAction::Move {
                    x: event.client_x() as f64,
                    y: event.client_y() as f64,
                    stamp_ms: Utc::now().timestamp_millis(),
                });
            }
        })?);
    }

    // Hover growth is optional; the pointer keeps tracking even if none of it binds.
    let interactive = match dom::query_all(INTERACTIVE_SELECTOR) {
        Ok(elements) => elements,
        Err(e) => {
            log::warn!("Cursor hover disabled: {}", e);
            return Ok(listeners);
        }
    };
    let hover = interactive.iter().flat_map(|element| {
        let enter = dispatcher.clone();
        let leave = dispatcher.clone();
        [
            Listener::new(element, "mouseenter", move |_| {
                enter.dispatch(CursorAction::Hover(true))
            }),
            Listener::new(element, "mouseleave", move |_| {
                leave.dispatch(CursorAction::Hover(false))
            }),
        ]
    });
    let bound = dom::keep_registered("hover", hover);
    log::debug!(
        "Cursor bound {} hover listeners over {} interactive elements",
        bound.len(),
        interactive.len()
    );
    listeners.extend(bound);

    Ok(listeners)
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let cursor = use_reducer(CursorTracker::new);

    {
        let dispatcher = cursor.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listeners = attach(dispatcher).unwrap_or_else(|e| {
                    log::warn!("Custom cursor disabled: {}", e);
                    Vec::new()
                });
                move || drop(listeners)
            },
            (),
        );
    }

    let (x, y) = cursor.position();
    let hovering = cursor.hovering();
    let orbit_radius = if hovering { 26 } else { 18 };

    html! {
        <div class="cursor-layer">
            <style>
                {r#"
                    .cursor-layer {
                        position: fixed;
                        inset: 0;
                        pointer-events: none;
                        z-index: 9999;
                    }
                    @media (max-width: 767px) {
                        .cursor-layer { display: none; }
                    }
                    .cursor-trail {
                        position: absolute;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #a78bfa;
                        animation: trailFade 0.6s ease-out forwards;
                    }
                    @keyframes trailFade {
                        from { opacity: 0.6; transform: scale(1); }
                        to { opacity: 0; transform: scale(0); }
                    }
                    .cursor-main {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 40px;
                        height: 40px;
                        transition: transform 0.08s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                    .cursor-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        background: linear-gradient(90deg, #8b5cf6, #f472b6);
                        filter: blur(16px);
                        opacity: 0.4;
                    }
                    .cursor-ring {
                        position: relative;
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(45deg, #c084fc, #f472b6, #c084fc);
                        background-size: 200% 200%;
                        animation: ringShift 2s linear infinite;
                        transition: transform 0.6s ease;
                    }
                    .cursor-ring.spin {
                        transform: rotate(360deg);
                    }
                    .cursor-ring::before {
                        content: '';
                        position: absolute;
                        inset: 2px;
                        border-radius: 50%;
                        background: rgba(0, 0, 0, 0.9);
                    }
                    .cursor-ring span {
                        position: relative;
                        font-size: 8px;
                        font-weight: 700;
                        background: linear-gradient(90deg, #a78bfa, #f9a8d4);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .cursor-orbit {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 4px;
                        height: 4px;
                        margin-left: -2px;
                        margin-top: -2px;
                        border-radius: 50%;
                        background: #a78bfa;
                        animation: orbit 3s linear infinite;
                    }
                    @keyframes ringShift {
                        0%, 100% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                    }
                    @keyframes orbit {
                        from { transform: rotate(0deg) translateY(var(--orbit)); }
                        to { transform: rotate(360deg) translateY(var(--orbit)); }
                    }
                "#}
            </style>
            { for cursor.trail().map(|point| html! {
                <div
                    key={point.id.to_string()}
                    class="cursor-trail"
                    style={format!("left: {}px; top: {}px;", point.x - 4.0, point.y - 4.0)}
                />
            }) }
            <div
                class="cursor-main"
                style={format!(
                    "transform: translate({}px, {}px) scale({});",
                    x - 20.0,
                    y - 20.0,
                    if hovering { 1.3 } else { 1.0 }
                )}
            >
                <div class="cursor-glow"></div>
                <div class={classes!("cursor-ring", hovering.then(|| "spin"))}>
                    <span>{"WINX"}</span>
                </div>
                { for (0..3).map(|i| html! {
                    <div
                        key={i}
                        class="cursor-orbit"
                        style={format!("--orbit: -{}px; animation-delay: {:.1}s;", orbit_radius, i as f64 * 0.3)}
                    />
                }) }
            </div>
        </div>
    }
}
