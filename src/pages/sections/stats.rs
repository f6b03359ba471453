use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::COUNT_UP_STEP_MS;
use crate::content::{Stat, STATS};
use crate::hooks::{use_in_view, use_section_progress};
use crate::motion::{stats_motion, ScrollOffset};
use crate::state::count_up::{CountAction, CountStage, CountUp};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
    pub index: usize,
    pub in_view: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let count = use_reducer(|| CountUp::new(props.stat.value));
    let hovered = use_state(|| false);

    // Start once the section is visible; repeat triggers are ignored by the counter itself.
    {
        let dispatcher = count.dispatcher();
        use_effect_with_deps(
            move |in_view| {
                if *in_view {
                    dispatcher.dispatch(CountAction::Trigger);
                }
                || ()
            },
            props.in_view,
        );
    }

    {
        let dispatcher = count.dispatcher();
        use_effect_with_deps(
            move |running| {
                let interval = running.then(|| {
                    Interval::new(COUNT_UP_STEP_MS, move || dispatcher.dispatch(CountAction::Step))
                });
                move || drop(interval)
            },
            count.is_running(),
        );
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <div
            class={classes!(
                "stat-card",
                props.in_view.then(|| "revealed"),
                (*hovered).then(|| "hovered"),
                (count.stage() == CountStage::Finished).then(|| "counted"),
            )}
            style={format!("transition-delay: {:.1}s;", props.index as f64 * 0.2)}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="stat-glow"></div>
            <div class="stat-body">
                <div class="stat-icon">{props.stat.icon.glyph()}</div>
                <div class="stat-value gradient-text">
                    <span>{count.displayed()}</span>
                    {props.stat.suffix}
                </div>
                <div class="stat-label">{props.stat.label}</div>
                <div class="stat-corner"></div>
            </div>
        </div>
    }
}

#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.3, "stats");
    let progress = use_section_progress(node.clone(), ScrollOffset::StartEndToEndStart);
    let motion = stats_motion(progress);

    html! {
        <section id="about" ref={node} class="stats">
            <style>
                {r#"
                    .stats {
                        position: relative;
                        padding: 80px 0;
                    }
                    .stats-grid {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 32px;
                    }
                    .stat-card {
                        position: relative;
                        cursor: pointer;
                        opacity: 0;
                        transform: scale(0.5) rotateY(-30deg);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .stat-card.revealed {
                        opacity: 1;
                        transform: scale(1) rotateY(0);
                    }
                    .stat-card.revealed.hovered {
                        transform: translateY(-15px) scale(1.05);
                        transition-delay: 0s !important;
                    }
                    .stat-glow {
                        position: absolute;
                        inset: -8px;
                        border-radius: 24px;
                        background: linear-gradient(90deg, transparent, rgba(139, 92, 246, 0.5), transparent);
                        filter: blur(40px);
                        opacity: 0;
                        transition: opacity 0.5s ease;
                    }
                    .stat-card.hovered .stat-glow {
                        opacity: 1;
                    }
                    .stat-card.counted .stat-value {
                        animation: popIn 0.4s ease;
                    }
                    .stat-body {
                        position: relative;
                        padding: 32px;
                        border-radius: 24px;
                        border: 1px solid rgba(139, 92, 246, 0.3);
                        background: linear-gradient(135deg, rgba(76, 29, 149, 0.4), rgba(131, 24, 67, 0.2));
                        backdrop-filter: blur(40px);
                        overflow: hidden;
                        transition: border-color 0.5s ease;
                    }
                    .stat-card.hovered .stat-body {
                        border-color: rgba(167, 139, 250, 0.6);
                    }
                    .stat-icon {
                        display: inline-block;
                        font-size: 48px;
                        margin-bottom: 24px;
                        transition: transform 0.8s ease;
                    }
                    .stat-card.hovered .stat-icon {
                        transform: rotate(360deg) scale(1.1);
                    }
                    .stat-value {
                        font-size: 48px;
                        font-weight: 700;
                        margin-bottom: 8px;
                    }
                    .stat-card.hovered .stat-value span {
                        text-shadow: 0 0 40px rgba(196, 132, 252, 0.8);
                    }
                    .stat-label {
                        font-size: 18px;
                        font-weight: 500;
                        color: #d1d5db;
                    }
                    .stat-corner {
                        position: absolute;
                        top: 16px;
                        right: 16px;
                        width: 32px;
                        height: 32px;
                        border-top: 2px solid rgba(167, 139, 250, 0.5);
                        border-right: 2px solid rgba(167, 139, 250, 0.5);
                        border-top-right-radius: 8px;
                        opacity: 0.3;
                        transition: opacity 0.3s ease;
                    }
                    .stat-card.hovered .stat-corner {
                        opacity: 1;
                    }
                "#}
            </style>
            <div
                class="stats-grid"
                style={format!("opacity: {}; transform: scale({});", motion.opacity, motion.scale)}
            >
                { for STATS.iter().enumerate().map(|(index, stat)| html! {
                    <StatCard key={stat.label} stat={stat.clone()} {index} {in_view} />
                }) }
            </div>
        </section>
    }
}
