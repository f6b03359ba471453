use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{CONTACT_CARDS, SOCIAL_LINKS};
use crate::hooks::use_in_view;
use crate::state::contact::{ContactAction, ContactForm, Field};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 0.3, "contact");
    let form = use_reducer(ContactForm::default);

    let on_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            dispatcher.dispatch(ContactAction::Input(field, value));
        })
    };
    let on_focus = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(ContactAction::Focus(field)))
    };
    let on_blur = {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(ContactAction::Blur))
    };

    // Nothing is sent anywhere; the default navigation is suppressed and the attempt logged.
    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let [name, email, message] = form.char_counts();
            log::info!(
                "Contact form submitted (name: {} chars, email: {} chars, message: {} chars)",
                name,
                email,
                message
            );
        })
    };

    let field_class = |field: Field| classes!("field", form.is_focused(field).then(|| "focused"));

    html! {
        <section id="contact" ref={node} class={classes!("contact", in_view.then(|| "revealed"))}>
            <style>
                {r#"
                    .contact {
                        position: relative;
                        padding: 80px 0;
                        overflow: hidden;
                    }
                    .contact-orb {
                        position: absolute;
                        width: 384px;
                        height: 384px;
                        border-radius: 50%;
                        filter: blur(64px);
                        animation: orbFloat 20s ease-in-out infinite alternate;
                    }
                    .contact-orb.violet {
                        top: 10%;
                        left: 10%;
                        background: rgba(139, 92, 246, 0.1);
                    }
                    .contact-orb.pink {
                        bottom: 10%;
                        right: 10%;
                        background: rgba(236, 72, 153, 0.1);
                        animation-duration: 25s;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 32px;
                    }
                    @media (max-width: 1023px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                        opacity: 0;
                        transform: translateX(-50px);
                        transition: opacity 0.8s ease, transform 0.8s ease;
                    }
                    .contact-form-wrap {
                        opacity: 0;
                        transform: translateX(50px);
                        transition: opacity 0.8s 0.2s ease, transform 0.8s 0.2s ease;
                    }
                    .contact.revealed .contact-info,
                    .contact.revealed .contact-form-wrap {
                        opacity: 1;
                        transform: translateX(0);
                    }
                    .info-card {
                        display: flex;
                        align-items: center;
                        gap: 16px;
                        padding: 24px;
                        border-radius: 16px;
                        border: 1px solid #1f2937;
                        background: linear-gradient(135deg, #111827, #000);
                        transition: transform 0.3s ease, border-color 0.3s ease;
                    }
                    .info-card:hover {
                        transform: translateX(10px) scale(1.02);
                        border-color: rgba(139, 92, 246, 0.4);
                    }
                    .info-icon {
                        width: 48px;
                        height: 48px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        background: linear-gradient(135deg, #8b5cf6, #f472b6);
                        font-size: 20px;
                    }
                    .info-card h3 {
                        font-size: 14px;
                        font-weight: 500;
                        color: #9ca3af;
                        margin: 0 0 4px;
                    }
                    .info-card p {
                        font-size: 18px;
                        font-weight: 700;
                        margin: 0;
                    }
                    .contact-socials {
                        display: flex;
                        gap: 16px;
                        margin-top: 8px;
                    }
                    .social-link {
                        width: 48px;
                        height: 48px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        text-decoration: none;
                        font-size: 20px;
                        transition: transform 0.3s ease;
                    }
                    .social-link:hover {
                        transform: translateY(-5px) rotate(5deg);
                    }
                    .contact-form {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        gap: 24px;
                        padding: 40px;
                        border-radius: 24px;
                        border: 1px solid rgba(139, 92, 246, 0.3);
                        background: linear-gradient(135deg, rgba(17, 24, 39, 0.9), #000);
                    }
                    .field input,
                    .field textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 16px 20px;
                        border-radius: 12px;
                        border: 2px solid #1f2937;
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        font-size: 16px;
                        font-family: inherit;
                        resize: none;
                        outline: none;
                        transition: border-color 0.3s ease, box-shadow 0.3s ease;
                    }
                    .field.focused input,
                    .field.focused textarea {
                        border-color: #a78bfa;
                        box-shadow: 0 0 30px rgba(167, 139, 250, 0.3);
                    }
                    .contact-form .pill-button {
                        width: 100%;
                        padding: 16px;
                        font-size: 18px;
                    }
                "#}
            </style>
            <div class="contact-orb violet"></div>
            <div class="contact-orb pink"></div>
            <div class="section-inner">
                <div class="section-header">
                    <span class="eyebrow">{"Get In Touch"}</span>
                    <h2><span class="gradient-text">{"Let's Create Magic Together"}</span></h2>
                    <p>{"Ready to turn your brand into everyone's obsession? Let's make it happen."}</p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        { for CONTACT_CARDS.iter().map(|card| html! {
                            <div key={card.heading} class="info-card">
                                <div class="info-icon">{card.icon.glyph()}</div>
                                <div>
                                    <h3>{card.heading}</h3>
                                    <p>{card.value}</p>
                                </div>
                            </div>
                        }) }
                        <div class="contact-socials">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    href={social.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={social.label}
                                    class="social-link"
                                    style={format!("background: {};", social.gradient.css())}
                                >
                                    {social.icon.glyph()}
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="contact-form-wrap">
                        <form class="contact-form" onsubmit={on_submit}>
                            <div class={field_class(Field::Name)}>
                                <input
                                    type="text"
                                    name={Field::Name.name()}
                                    placeholder="Your Name"
                                    value={form.value(Field::Name).to_string()}
                                    oninput={on_input(Field::Name)}
                                    onfocus={on_focus(Field::Name)}
                                    onblur={on_blur.clone()}
                                />
                            </div>
                            <div class={field_class(Field::Email)}>
                                <input
                                    type="email"
                                    name={Field::Email.name()}
                                    placeholder="Your Email"
                                    value={form.value(Field::Email).to_string()}
                                    oninput={on_input(Field::Email)}
                                    onfocus={on_focus(Field::Email)}
                                    onblur={on_blur.clone()}
                                />
                            </div>
                            <div class={field_class(Field::Message)}>
                                <textarea
                                    name={Field::Message.name()}
                                    placeholder="Tell us about your project..."
                                    rows="6"
                                    value={form.value(Field::Message).to_string()}
                                    oninput={on_input(Field::Message)}
                                    onfocus={on_focus(Field::Message)}
                                    onblur={on_blur}
                                />
                            </div>
                            <button type="submit" class="pill-button">
                                {"Send Message "}<span class="nudge">{"→"}</span>
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
