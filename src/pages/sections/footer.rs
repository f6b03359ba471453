use yew::prelude::*;

use crate::config::LOGO_URL;
use crate::content::{
    anchor_href, FOOTER_CONTACT, FOOTER_QUICK_LINKS, LEGAL_LINKS, SERVICES, SOCIAL_LINKS,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        padding: 80px 0 40px;
                        border-top: 1px solid #1f2937;
                        background: linear-gradient(180deg, #000, rgba(46, 16, 101, 0.2));
                    }
                    .footer-top {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 48px;
                        margin-bottom: 48px;
                    }
                    .footer-brand img {
                        height: 64px;
                        width: auto;
                        margin-bottom: 24px;
                    }
                    .footer-brand p {
                        color: #9ca3af;
                        line-height: 1.6;
                    }
                    .site-footer h4 {
                        font-size: 18px;
                        font-weight: 700;
                        margin-bottom: 24px;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .site-footer li a,
                    .site-footer li span {
                        color: #9ca3af;
                        text-decoration: none;
                        transition: color 0.2s ease, padding-left 0.2s ease;
                    }
                    .site-footer li a:hover {
                        color: #c084fc;
                        padding-left: 5px;
                    }
                    .footer-divider {
                        height: 1px;
                        margin-bottom: 32px;
                        background: linear-gradient(90deg, transparent, rgba(139, 92, 246, 0.5), transparent);
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 24px;
                        color: #6b7280;
                        font-size: 14px;
                    }
                    .footer-socials,
                    .footer-legal {
                        display: flex;
                        gap: 16px;
                    }
                    .footer-socials a {
                        width: 40px;
                        height: 40px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        border: 1px solid #1f2937;
                        text-decoration: none;
                    }
                    .footer-legal a {
                        color: #6b7280;
                        text-decoration: none;
                    }
                    .footer-legal a:hover {
                        color: #c084fc;
                    }
                    .footer-badge {
                        text-align: center;
                        margin-top: 32px;
                        color: #6b7280;
                        font-size: 14px;
                    }
                    .footer-badge .beat {
                        display: inline-block;
                        margin: 0 6px;
                        animation: beat 1s infinite;
                    }
                    @keyframes beat {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.2); }
                    }
                "#}
            </style>
            <div class="section-inner">
                <div class="footer-top">
                    <div class="footer-brand">
                        <img src={LOGO_URL} alt="WinX Logo" />
                        <p>{"Turning brands into everyone's obsession through creative storytelling and strategic marketing."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for FOOTER_QUICK_LINKS.iter().map(|item| html! {
                                <li key={*item}><a href={anchor_href(item)}>{format!("→ {}", item)}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { for SERVICES.iter().map(|service| html! {
                                <li key={service.title}><a href="#services">{format!("→ {}", service.title)}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <ul>
                            { for FOOTER_CONTACT.iter().map(|item| html! {
                                <li key={item.heading}>
                                    <span aria-label={item.heading}>{format!("{} {}", item.icon.glyph(), item.value)}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <p>{"© 2026 Winx Marketing Media. All rights reserved."}</p>
                    <div class="footer-socials">
                        { for SOCIAL_LINKS.iter().map(|social| html! {
                            <a
                                key={social.label}
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label={social.label}
                            >
                                {social.icon.glyph()}
                            </a>
                        }) }
                    </div>
                    <div class="footer-legal">
                        { for LEGAL_LINKS.iter().map(|item| html! {
                            <a key={*item} href="#">{*item}</a>
                        }) }
                    </div>
                </div>

                <div class="footer-badge">
                    {"Crafted with"}<span class="beat">{"❤️"}</span>{"by Winx Media Team"}
                </div>
            </div>
        </footer>
    }
}
