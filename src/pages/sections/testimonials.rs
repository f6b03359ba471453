use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::TESTIMONIAL_INTERVAL_MS;
use crate::content::TESTIMONIALS;
use crate::hooks::use_in_view;
use crate::state::rotator::{Rotator, RotatorAction};

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.2, "testimonials");
    let rotator = use_reducer(|| Rotator::new(TESTIMONIALS.len()));

    // Runs for as long as the section is mounted; a manual pick does not restart it.
    {
        let dispatcher = rotator.dispatcher();
        use_interval(
            move || dispatcher.dispatch(RotatorAction::Advance),
            TESTIMONIAL_INTERVAL_MS,
        );
    }

    let current = rotator.index();

    html! {
        <section ref={node} class={classes!("testimonials", in_view.then(|| "revealed"))}>
            <style>
                {r#"
                    .testimonials {
                        position: relative;
                        padding: 80px 0;
                        overflow: hidden;
                        background: linear-gradient(180deg, rgba(88, 28, 135, 0.1), transparent);
                    }
                    .testimonials .section-inner {
                        max-width: 1024px;
                    }
                    .testimonial-stage {
                        position: relative;
                        min-height: 320px;
                    }
                    .testimonial {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transform: translateX(100px) scale(0.9);
                        pointer-events: none;
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .testimonial.current {
                        opacity: 1;
                        transform: translateX(0) scale(1);
                        pointer-events: auto;
                    }
                    .testimonial-card {
                        padding: 48px;
                        border-radius: 24px;
                        border: 1px solid rgba(139, 92, 246, 0.3);
                        background: linear-gradient(135deg, rgba(76, 29, 149, 0.3), rgba(131, 24, 67, 0.2));
                        backdrop-filter: blur(24px);
                        text-align: center;
                    }
                    .stars {
                        display: flex;
                        justify-content: center;
                        gap: 4px;
                        margin-bottom: 24px;
                        font-size: 24px;
                        color: #facc15;
                    }
                    .testimonial-card blockquote {
                        font-size: 20px;
                        line-height: 1.7;
                        color: #e5e7eb;
                        font-style: italic;
                        margin: 0 0 32px;
                    }
                    .testimonial-card h4 {
                        font-size: 20px;
                        font-weight: 700;
                    }
                    .testimonial-card .byline {
                        color: #9ca3af;
                    }
                    .testimonial-dots {
                        display: flex;
                        justify-content: center;
                        gap: 12px;
                        margin-top: 32px;
                    }
                    .testimonial-dot {
                        width: 12px;
                        height: 12px;
                        padding: 0;
                        border: none;
                        border-radius: 9999px;
                        background: #4b5563;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .testimonial-dot.current {
                        width: 40px;
                        background: linear-gradient(90deg, #8b5cf6, #f472b6);
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2><span class="gradient-text">{"What Our Clients Say"}</span></h2>
                </div>
                <div class="testimonial-stage">
                    { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                        <div
                            key={testimonial.name}
                            class={classes!("testimonial", (index == current).then(|| "current"))}
                            aria-hidden={(index != current).to_string()}
                        >
                            <div class="testimonial-card">
                                <div class="stars">
                                    { for (0..testimonial.rating).map(|_| html! { <span>{"★"}</span> }) }
                                </div>
                                <blockquote>{format!("\"{}\"", testimonial.text)}</blockquote>
                                <h4>{testimonial.name}</h4>
                                <p class="byline">{format!("{} - {}", testimonial.role, testimonial.company)}</p>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="testimonial-dots">
                    { for (0..rotator.len()).map(|index| {
                        let onclick = {
                            let dispatcher = rotator.dispatcher();
                            Callback::from(move |_: MouseEvent| {
                                log::debug!("Testimonial {} selected", index);
                                dispatcher.dispatch(RotatorAction::Select(index));
                            })
                        };
                        html! {
                            <button
                                key={index}
                                class={classes!("testimonial-dot", (index == current).then(|| "current"))}
                                aria-label={format!("Show testimonial {}", index + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
