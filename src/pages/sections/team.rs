use yew::prelude::*;

use crate::content::TEAM;
use crate::hooks::{use_in_view, use_section_progress};
use crate::motion::{team_header_motion, ScrollOffset};

const CONNECTORS: [(&str, &str, &str); 2] = [
    ("M 500 40 Q 380 120, 250 270", "#c084fc", "0s"),
    ("M 500 40 Q 620 120, 750 270", "#f9a8d4", "0.4s"),
];

#[function_component(TeamSection)]
pub fn team_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2, "team");
    let progress = use_section_progress(node.clone(), ScrollOffset::StartEndToEndStart);
    let header = team_header_motion(progress);

    html! {
        <section id="team" ref={node} class={classes!("team", in_view.then(|| "revealed"))}>
            <style>
                {r#"
                    .team {
                        position: relative;
                        padding: 80px 0;
                        overflow: hidden;
                    }
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 48px;
                        max-width: 1024px;
                        margin: 0 auto;
                    }
                    .member-card {
                        position: relative;
                        padding: 32px;
                        border-radius: 24px;
                        border: 1px solid #1f2937;
                        background: linear-gradient(135deg, #111827, #000);
                        text-align: center;
                        opacity: 0;
                        transform: translateY(80px);
                        transition: opacity 0.8s ease, transform 0.8s ease, border-color 0.5s ease;
                    }
                    .team.revealed .member-card {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .team.revealed .member-card:hover {
                        transform: translateY(-15px);
                        border-color: rgba(139, 92, 246, 0.5);
                        transition-delay: 0s !important;
                    }
                    .member-photo {
                        width: 192px;
                        height: 192px;
                        margin: 0 auto 24px;
                        padding: 4px;
                        border-radius: 50%;
                    }
                    .member-photo img {
                        width: 100%;
                        height: 100%;
                        border-radius: 50%;
                        object-fit: cover;
                        background: #000;
                    }
                    .member-card h3 {
                        font-size: 24px;
                        font-weight: 700;
                        margin-bottom: 8px;
                    }
                    .member-role {
                        font-weight: 600;
                        margin-bottom: 16px;
                    }
                    .member-card p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .member-line {
                        height: 4px;
                        width: 0;
                        margin-top: 24px;
                        border-radius: 9999px;
                        opacity: 0;
                        transition: width 0.8s 0.3s ease, opacity 0.3s ease;
                    }
                    .team.revealed .member-line {
                        width: 100%;
                    }
                    .member-card:hover .member-line {
                        opacity: 1;
                    }
                    .team-quote {
                        text-align: center;
                        margin-top: 64px;
                        font-size: 18px;
                        font-style: italic;
                        color: #6b7280;
                    }
                "#}
            </style>
            <div class="section-inner">
                <div
                    class="section-header"
                    style={format!("transform: translateY({}px) rotate({}deg);", header.y, header.rotate_deg)}
                >
                    <h2><span class="gradient-text">{"Meet The Dream Team"}</span></h2>
                    <p>{"The creative minds behind your brand's transformation"}</p>
                </div>

                <div class="connector">
                    <div class="hub"></div>
                    <svg viewBox="0 0 1000 280" preserveAspectRatio="xMidYMid meet" style="height: 280px;">
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

                <div class="team-grid">
                    { for TEAM.iter().enumerate().map(|(index, member)| {
                        let (accent, _) = member.gradient.stops();
                        html! {
                            <div
                                key={member.name}
                                class="member-card"
                                style={format!("transition-delay: {:.1}s;", index as f64 * 0.2)}
                            >
                                <div class="member-photo" style={format!("background: {};", member.gradient.css())}>
                                    <img src={member.image} alt={member.name} loading="lazy" />
                                </div>
                                <h3>{member.name}</h3>
                                <p class="member-role" style={format!("color: {};", accent)}>{member.role}</p>
                                <p>{member.description}</p>
                                <div class="member-line" style={format!("background: {};", member.gradient.css())}></div>
                            </div>
                        }
                    }) }
                </div>

                <p class="team-quote">{"\"Individually talented, collectively unstoppable\""}</p>
            </div>
        </section>
    }
}
