use yew::prelude::*;

use crate::content::{Icon, ALL_WORK_URL, WORKS};
use crate::hooks::{use_in_view, use_section_progress};
use crate::motion::{work_backdrop, ScrollOffset};

/// Curves from the hub node down to each card, with stroke colour and dot delay.
const CONNECTORS: [(&str, &str, &str); 3] = [
    ("M 600 40 Q 350 100, 200 290", "#c084fc", "0s"),
    ("M 600 40 L 600 290", "#ec4899", "0.3s"),
    ("M 600 40 Q 850 100, 1000 290", "#22d3ee", "0.6s"),
];

#[function_component(WorkSection)]
pub fn work_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2, "work");
    let progress = use_section_progress(node.clone(), ScrollOffset::StartEndToEndStart);
    let backdrop = work_backdrop(progress);

    html! {
        <section id="work" ref={node} class={classes!("work", in_view.then(|| "revealed"))}>
            <style>
                {r#"
                    .work {
                        position: relative;
                        padding: 80px 0;
                        overflow: hidden;
                    }
                    .work-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(180deg, rgba(236, 72, 153, 0.05), transparent, rgba(139, 92, 246, 0.05));
                    }
                    .work-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 32px;
                    }
                    .work-card {
                        position: relative;
                        border-radius: 24px;
                        overflow: hidden;
                        border: 1px solid #1f2937;
                        background: linear-gradient(135deg, #111827, #000);
                        opacity: 0;
                        transform: translateY(100px) scale(0.8);
                        transition: opacity 0.8s ease, transform 0.8s ease, border-color 0.5s ease;
                    }
                    .work.revealed .work-card {
                        opacity: 1;
                        transform: translateY(0) scale(1);
                    }
                    .work.revealed .work-card:hover {
                        transform: translateY(-20px);
                        border-color: rgba(139, 92, 246, 0.5);
                        transition-delay: 0s !important;
                    }
                    .work-image {
                        height: 256px;
                        overflow: hidden;
                    }
                    .work-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.6s ease;
                    }
                    .work-card:hover .work-image img {
                        transform: scale(1.1);
                    }
                    .work-body {
                        padding: 24px;
                    }
                    .work-body h3 {
                        font-size: 24px;
                        font-weight: 700;
                        margin-bottom: 8px;
                    }
                    .work-subtitle {
                        font-weight: 600;
                        margin-bottom: 12px;
                    }
                    .work-body p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .work-links {
                        display: flex;
                        gap: 12px;
                        margin-top: 24px;
                    }
                    .work-link {
                        padding: 8px 20px;
                        border-radius: 9999px;
                        color: #fff;
                        font-size: 14px;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .work-social {
                        width: 40px;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        text-decoration: none;
                    }
                    .work-corner {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 80px;
                        height: 80px;
                        opacity: 0.2;
                        clip-path: polygon(100% 0, 0 0, 100% 100%);
                    }
                    .work-all {
                        text-align: center;
                        margin-top: 64px;
                    }
                "#}
            </style>
            <div
                class="work-backdrop"
                style={format!("opacity: {}; transform: translateY({}px);", backdrop.opacity, backdrop.y)}
            ></div>
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"Our Portfolio"}</span>
                    <h2><span class="gradient-text">{"Less Talking, More Showing"}</span></h2>
                    <p>{"The proof is in the scroll. Here's how we helped brands become impossible to ignore."}</p>
                </div>

                <div class="connector">
                    <div class="hub"></div>
                    <svg viewBox="0 0 1200 300" preserveAspectRatio="xMidYMid meet" style="height: 300px;">
                        { for CONNECTORS.iter().map(|(path, color, delay)| html! {
                            <>
                                <path d={*path} fill="none" stroke={*color} stroke-opacity="0.6" stroke-width="1.5" />
                                <circle r="3" fill={*color} opacity="0">
                                    <animate attributeName="opacity" values="0;1;1;0" keyTimes="0;0.1;0.9;1" dur="3s" repeatCount="indefinite" begin={*delay} />
                                    <@{"animateMotion"} dur="3s" repeatCount="indefinite" begin={*delay} path={*path} />
                                </circle>
                            </>
                        }) }
                    </svg>
                </div>

                <div class="work-grid">
                    { for WORKS.iter().enumerate().map(|(index, work)| {
                        let (accent, _) = work.gradient.stops();
                        html! {
                            <div
                                key={work.title}
                                class="work-card"
                                style={format!("transition-delay: {:.1}s;", index as f64 * 0.2)}
                            >
                                <div class="work-image">
                                    <img src={work.image} alt={work.title} loading="lazy" />
                                </div>
                                <div class="work-body">
                                    <h3>{work.title}</h3>
                                    <p class="work-subtitle" style={format!("color: {};", accent)}>{work.subtitle}</p>
                                    <p>{work.description}</p>
                                    <div class="work-links">
                                        <a
                                            href={work.link}
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="work-link"
                                            style={format!("background: {};", work.gradient.css())}
                                        >
                                            {"View Site"}
                                        </a>
                                        {
                                            if let Some(instagram) = work.instagram {
                                                html! {
                                                    <a
                                                        href={instagram}
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                        class="work-social"
                                                        aria-label="Instagram"
                                                    >
                                                        {Icon::Instagram.glyph()}
                                                    </a>
                                                }
                                            } else {
                                                html! {}
                                            }
                                        }
                                    </div>
                                </div>
                                <div class="work-corner" style={format!("background: {};", work.gradient.css())}></div>
                            </div>
                        }
                    }) }
                </div>

                <div class="work-all">
                    <a href={ALL_WORK_URL} target="_blank" rel="noopener noreferrer" class="pill-button large">
                        {"View All Work "}<span class="nudge">{"→"}</span>
                    </a>
                </div>
            </div>
        </section>
    }
}
