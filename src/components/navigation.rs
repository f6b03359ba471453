use yew::prelude::*;

use crate::config::LOGO_URL;
use crate::content::{anchor_href, NAV_ANCHORS};
use crate::hooks::use_scroll_state;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let is_scrolled = use_scroll_state().nav_scrolled();

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 24px 0;
                        background: transparent;
                        transition: all 0.3s ease;
                        animation: navDrop 0.6s ease-out both;
                    }
                    .top-nav.scrolled {
                        padding: 16px 0;
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(16px);
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    .nav-content {
                        max-width: 1280px;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo img {
                        height: 48px;
                        width: auto;
                        transition: transform 0.2s ease;
                    }
                    .nav-logo img:hover {
                        transform: scale(1.05);
                    }
                    .nav-links {
                        display: flex;
                        gap: 32px;
                    }
                    @media (max-width: 767px) {
                        .nav-links { display: none; }
                    }
                    .nav-link {
                        color: #fff;
                        font-size: 14px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: color 0.2s ease, transform 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #c084fc;
                        transform: scale(1.1);
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src={LOGO_URL} alt="WinX Logo" />
                </div>
                <div class="nav-links">
                    { for NAV_ANCHORS.iter().map(|item| html! {
                        <a key={*item} href={anchor_href(item)} class="nav-link">{*item}</a>
                    }) }
                </div>
                <button class="pill-button">{"Get Started"}</button>
            </div>
        </nav>
    }
}
