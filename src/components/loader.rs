use yew::prelude::*;

use crate::config::LOGO_URL;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    /// 0.0 to 100.0
    pub progress: f64,
    /// Whole percent shown as the counter.
    pub percent: u32,
    /// Set once progress hits 100; the screen fades while the hide delay runs.
    pub finishing: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class={classes!("loader", props.finishing.then(|| "loader-finishing"))}>
            <style>
                {r#"
                    .loader {
                        position: fixed;
                        inset: 0;
                        z-index: 10000;
                        background: #000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        transition: opacity 0.8s ease;
                    }
                    .loader-finishing {
                        opacity: 0;
                    }
                    .loader-center {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .loader-logo {
                        position: relative;
                        margin-bottom: 48px;
                        animation: loaderPop 0.8s cubic-bezier(0.34, 1.56, 0.64, 1) both;
                    }
                    .loader-logo img {
                        width: 320px;
                        height: auto;
                        animation: loaderGlow 2s infinite;
                    }
                    .loader-percent {
                        font-size: 60px;
                        font-weight: 900;
                        margin-bottom: 40px;
                        background: linear-gradient(90deg, #a78bfa, #f9a8d4, #c084fc, #a78bfa);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: gradientSlide 3s linear infinite;
                    }
                    .loader-track {
                        position: relative;
                        width: 384px;
                        max-width: 80vw;
                        height: 8px;
                        border-radius: 9999px;
                        overflow: hidden;
                        background: rgba(17, 24, 39, 0.5);
                        border: 1px solid rgba(139, 92, 246, 0.2);
                    }
                    .loader-fill {
                        position: relative;
                        height: 100%;
                        background: linear-gradient(90deg, #8b5cf6, #f472b6, #a855f7);
                        transition: width 0.3s ease-out;
                        overflow: hidden;
                    }
                    .loader-fill::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.5), transparent);
                        animation: shimmerX 1.5s ease-in-out infinite;
                    }
                    @keyframes loaderPop {
                        from { transform: scale(0); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    @keyframes loaderGlow {
                        0%, 100% { filter: drop-shadow(0 0 20px rgba(196, 132, 252, 0.3)); }
                        50% { filter: drop-shadow(0 0 40px rgba(236, 72, 153, 0.5)); }
                    }
                    @keyframes shimmerX {
                        from { transform: translateX(-100%); }
                        to { transform: translateX(200%); }
                    }
                "#}
            </style>
            <div class="loader-center">
                <div class="loader-logo">
                    <img src={LOGO_URL} alt="WinX Logo" />
                </div>
                <div class="loader-percent">{format!("{}%", props.percent)}</div>
                <div class="loader-track">
                    <div class="loader-fill" style={format!("width: {}%;", props.progress)}></div>
                </div>
            </div>
        </div>
    }
}
