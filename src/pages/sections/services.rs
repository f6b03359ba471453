use yew::prelude::*;

use crate::content::SERVICES;
use crate::hooks::{use_in_view, use_section_progress};
use crate::motion::{services_backdrop, ScrollOffset};

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2, "services");
    let progress = use_section_progress(node.clone(), ScrollOffset::StartEndToEndStart);
    let backdrop = services_backdrop(progress);

    html! {
        <section id="services" ref={node} class={classes!("services", in_view.then(|| "revealed"))}>
            <style>
                {r#"
                    .services {
                        position: relative;
                        padding: 80px 0;
                    }
                    .services-backdrop {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(139, 92, 246, 0.05), transparent, rgba(236, 72, 153, 0.05));
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(420px, 1fr));
                        gap: 32px;
                    }
                    @media (max-width: 767px) {
                        .services-grid { grid-template-columns: 1fr; }
                    }
                    .service-card {
                        position: relative;
                        cursor: pointer;
                        opacity: 0;
                        transform: translateY(100px) rotateX(-15deg);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .services.revealed .service-card {
                        opacity: 1;
                        transform: translateY(0) rotateX(0);
                    }
                    .services.revealed .service-card:hover {
                        transform: translateY(-10px) scale(1.02);
                        transition-delay: 0s !important;
                    }
                    .service-body {
                        position: relative;
                        padding: 32px;
                        border-radius: 24px;
                        border: 1px solid #1f2937;
                        background: linear-gradient(135deg, #111827, #000);
                        overflow: hidden;
                        transition: border-color 0.5s ease;
                    }
                    .service-card:hover .service-body {
                        border-color: rgba(139, 92, 246, 0.4);
                    }
                    .service-icon {
                        display: inline-block;
                        padding: 16px;
                        border-radius: 16px;
                        margin-bottom: 24px;
                        font-size: 32px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                    }
                    .service-card h3 {
                        font-size: 24px;
                        font-weight: 700;
                        margin-bottom: 16px;
                    }
                    .service-card p {
                        color: #9ca3af;
                        line-height: 1.7;
                        transition: color 0.3s ease;
                    }
                    .service-card:hover p {
                        color: #d1d5db;
                    }
                    .service-more {
                        margin-top: 24px;
                        color: #a78bfa;
                        font-weight: 600;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .service-card:hover .service-more {
                        opacity: 1;
                    }
                "#}
            </style>
            <div
                class="services-backdrop"
                style={format!("opacity: {}; transform: translateY({}px);", backdrop.opacity, backdrop.y)}
            ></div>
            <div class="section-inner">
                <div class="section-header">
                    <h2><span class="gradient-text">{"What We Do Best"}</span></h2>
                    <p>{"We don't just deliver services - we partner with you to create brand experiences"}</p>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div
                            key={service.title}
                            class="service-card"
                            style={format!("transition-delay: {:.2}s;", index as f64 * 0.15)}
                        >
                            <div class="service-body">
                                <div class="service-icon" style={format!("background: {};", service.gradient.css())}>
                                    {service.icon.glyph()}
                                </div>
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                                <div class="service-more">{"Learn More "}<span class="nudge">{"→"}</span></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
