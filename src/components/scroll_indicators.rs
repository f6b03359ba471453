use yew::prelude::*;

use crate::hooks::use_scroll_state;
use crate::state::timeline::TIMELINE_ANCHORS;

#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let scroll = use_scroll_state();

    html! {
        <div class="scroll-progress" style={format!("transform: scaleX({});", scroll.fraction)}>
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        z-index: 100;
                        transform-origin: left;
                        background: linear-gradient(90deg, #8b5cf6, #f472b6, #a855f7);
                        box-shadow: 0 4px 12px rgba(139, 92, 246, 0.5);
                    }
                "#}
            </style>
        </div>
    }
}

/// Vertical timeline on the left edge with one marker per page section.
#[function_component(StoryTimeline)]
pub fn story_timeline() -> Html {
    let scroll = use_scroll_state();

    html! {
        <div class="story-timeline">
            <style>
                {r#"
                    .story-timeline {
                        position: fixed;
                        left: 32px;
                        top: 50%;
                        transform: translateY(-50%);
                        z-index: 50;
                    }
                    @media (max-width: 767px) {
                        .story-timeline { display: none; }
                    }
                    .timeline-track {
                        position: relative;
                        height: 384px;
                        width: 4px;
                        border-radius: 9999px;
                        overflow: hidden;
                        background: rgba(31, 41, 55, 0.5);
                    }
                    .timeline-fill {
                        position: absolute;
                        inset: 0;
                        transform-origin: top;
                        border-radius: 9999px;
                        background: linear-gradient(180deg, #8b5cf6, #f472b6, #a855f7);
                        overflow: hidden;
                    }
                    .timeline-fill::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, transparent, rgba(255, 255, 255, 0.3), transparent);
                        animation: shimmerY 2s linear infinite;
                    }
                    @keyframes shimmerY {
                        from { transform: translateY(-100%); }
                        to { transform: translateY(200%); }
                    }
                    .timeline-marker {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 10;
                        animation: markerIn 0.6s ease both;
                    }
                    @keyframes markerIn {
                        from { opacity: 0; transform: translateX(-50%) scale(0); }
                        to { opacity: 1; transform: translateX(-50%) scale(1); }
                    }
                    .timeline-dot {
                        position: relative;
                        width: 16px;
                        height: 16px;
                        border-radius: 50%;
                        border: 2px solid #6b7280;
                        background: radial-gradient(circle, #1f2937 0%, #111827 100%);
                        cursor: pointer;
                        transition: all 0.5s ease;
                    }
                    .timeline-dot:hover {
                        transform: scale(1.8);
                    }
                    .timeline-marker.passed .timeline-dot {
                        border-color: #c084fc;
                        background: radial-gradient(circle, #ec4899 0%, #c084fc 100%);
                        box-shadow: 0 0 20px rgba(196, 132, 252, 0.8), inset 0 0 10px rgba(255, 255, 255, 0.5);
                    }
                    .timeline-marker.passed .timeline-dot::before {
                        content: '';
                        position: absolute;
                        inset: 2px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.8);
                        animation: innerPulse 2s infinite;
                    }
                    .timeline-marker.active .timeline-dot::after {
                        content: '';
                        position: absolute;
                        inset: -2px;
                        border-radius: 50%;
                        border: 3px solid #f472b6;
                        animation: ringPulse 1.5s infinite;
                    }
                    @keyframes innerPulse {
                        0%, 100% { opacity: 0.8; }
                        50% { opacity: 0.3; }
                    }
                    @keyframes ringPulse {
                        0%, 100% { transform: scale(1); opacity: 1; }
                        50% { transform: scale(3); opacity: 0; }
                    }
                    .timeline-label {
                        position: absolute;
                        left: 32px;
                        top: 50%;
                        transform: translate(-20px, -50%);
                        white-space: nowrap;
                        opacity: 0;
                        pointer-events: none;
                        padding: 8px 16px;
                        border-radius: 12px;
                        border: 1px solid rgba(139, 92, 246, 0.5);
                        background: linear-gradient(90deg, #111827, #1f2937, #000);
                        font-size: 14px;
                        font-weight: 700;
                        color: #c4b5fd;
                        transition: all 0.3s ease;
                    }
                    .timeline-marker:hover .timeline-label {
                        opacity: 1;
                        transform: translate(0, -50%);
                    }
                "#}
            </style>
            <div class="timeline-track">
                <div class="timeline-fill" style={format!("transform: scaleY({});", scroll.fraction)}></div>
            </div>
            { for TIMELINE_ANCHORS.iter().map(|anchor| {
                let state = anchor.state(scroll.fraction);
                html! {
                    <div
                        key={anchor.label}
                        class={classes!(
                            "timeline-marker",
                            state.passed.then(|| "passed"),
                            state.active.then(|| "active"),
                        )}
                        style={format!("top: {}%; animation-delay: {}s;", anchor.position_pct, anchor.progress)}
                    >
                        <div class="timeline-dot"></div>
                        <div class="timeline-label">{anchor.label}</div>
                    </div>
                }
            }) }
        </div>
    }
}

/// Floating link back to the top of the page, shown once the reader is past the hero.
#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let scroll = use_scroll_state();

    html! {
        <a
            href="#top"
            role="button"
            aria-label="Back to top"
            class={classes!("back-to-top", scroll.shows_back_to_top().then(|| "shown"))}
        >
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        bottom: 32px;
                        right: 32px;
                        z-index: 50;
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(90deg, #8b5cf6, #f472b6);
                        box-shadow: 0 10px 30px rgba(139, 92, 246, 0.5);
                        opacity: 0;
                        transform: scale(0);
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .back-to-top.shown {
                        opacity: 1;
                        transform: scale(1);
                    }
                    .back-to-top.shown:hover {
                        transform: scale(1.1) rotate(360deg);
                    }
                "#}
            </style>
            <svg width="24" height="24" fill="none" stroke="white" viewBox="0 0 24 24">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18" />
            </svg>
        </a>
    }
}
