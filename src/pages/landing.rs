use gloo_timers::callback::{Interval, Timeout};
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::components::{
    cursor::CustomCursor,
    loader::LoadingScreen,
    navigation::Navigation,
    scroll_indicators::{BackToTop, ScrollProgressBar, StoryTimeline},
};
use crate::config::{LOADER_HIDE_DELAY_MS, LOADER_MAX_INCREMENT, LOADER_TICK_MS};
use crate::dom::{self, DomError, Listener};
use crate::hooks::ScrollSignal;
use crate::pages::sections::{
    contact::ContactSection, footer::Footer, hero::HeroSection, services::ServicesSection,
    stats::StatsSection, team::TeamSection, testimonials::TestimonialsSection, work::WorkSection,
};
use crate::smooth_scroll::SmoothScroll;
use crate::state::loader::{LoaderAction, LoaderPhase, LoadingSequencer};
use crate::state::scroll::ScrollState;

fn publish_scroll(signal: &ScrollSignal) {
    match dom::scroll_metrics() {
        Ok((y, document_height, viewport_height)) => {
            signal.set(ScrollState::measure(y, document_height, viewport_height))
        }
        Err(e) => log::debug!("Skipping scroll update: {}", e),
    }
}

/// The one window-level scroll (and resize) listener feeding the shared signal.
fn attach_scroll(signal: ScrollSignal) -> Result<Vec<Listener>, DomError> {
    let window = dom::window()?;
    let on_scroll = {
        let signal = signal.clone();
        Listener::new(&window, "scroll", move |_| publish_scroll(&signal))?
    };
    let on_resize = {
        let signal = signal.clone();
        Listener::new(&window, "resize", move |_| publish_scroll(&signal))?
    };
    publish_scroll(&signal);
    Ok(vec![on_scroll, on_resize])
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let scroll = use_state(|| ScrollSignal::new(ScrollState::default()));
    let loader = use_reducer(LoadingSequencer::new);

    {
        let signal = (*scroll).clone();
        use_effect_with_deps(
            move |_| {
                let listeners = attach_scroll(signal).unwrap_or_else(|e| {
                    log::warn!("Scroll tracking disabled: {}", e);
                    Vec::new()
                });
                move || drop(listeners)
            },
            (),
        );
    }

    use_effect_with_deps(
        move |_| {
            let smooth = SmoothScroll::attach()
                .map_err(|e| log::warn!("Smooth scrolling disabled: {}", e))
                .ok();
            move || drop(smooth)
        },
        (),
    );

    // Each phase owns its timer; moving to the next phase tears the previous one down.
    {
        let dispatcher = loader.dispatcher();
        use_effect_with_deps(
            move |phase| {
                let mut ticker = None;
                let mut hide = None;
                match phase {
                    LoaderPhase::Loading => {
                        ticker = Some(Interval::new(LOADER_TICK_MS, move || {
                            let increment = Math::random() * LOADER_MAX_INCREMENT;
                            dispatcher.dispatch(LoaderAction::Tick(increment));
                        }));
                    }
                    LoaderPhase::Finishing => {
                        log::info!("Loading finished");
                        hide = Some(Timeout::new(LOADER_HIDE_DELAY_MS, move || {
                            dispatcher.dispatch(LoaderAction::Hide);
                        }));
                    }
                    LoaderPhase::Hidden => log::debug!("Loader hidden"),
                }
                move || {
                    drop(ticker);
                    drop(hide);
                }
            },
            loader.phase(),
        );
    }

    html! {
        <ContextProvider<ScrollSignal> context={(*scroll).clone()}>
            <div id="top" class="page">
                <style>
                    {r#"
                        html, body {
                            margin: 0;
                            background: #000;
                        }
                        .page {
                            position: relative;
                            min-height: 100vh;
                            overflow-x: hidden;
                            background: #000;
                            color: #fff;
                            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        }
                        @media (min-width: 768px) {
                            .page, .page a, .page button {
                                cursor: none;
                            }
                        }
                        .grain {
                            position: fixed;
                            inset: 0;
                            pointer-events: none;
                            z-index: 60;
                            opacity: 0.03;
                            background-image: url("data:image/svg+xml,%3Csvg viewBox='0 0 400 400' xmlns='http://www.w3.org/2000/svg'%3E%3Cfilter id='noiseFilter'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.9' numOctaves='4' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23noiseFilter)'/%3E%3C/svg%3E");
                        }
                        .section-inner {
                            position: relative;
                            z-index: 10;
                            max-width: 1280px;
                            margin: 0 auto;
                            padding: 0 24px;
                        }
                        .section-header {
                            text-align: center;
                            margin-bottom: 64px;
                        }
                        .section-header h2 {
                            font-size: clamp(36px, 5vw, 48px);
                            font-weight: 700;
                            margin: 0 0 16px;
                        }
                        .section-header p {
                            max-width: 672px;
                            margin: 0 auto;
                            font-size: 18px;
                            color: #9ca3af;
                        }
                        .eyebrow {
                            display: inline-block;
                            margin-bottom: 16px;
                            padding: 8px 24px;
                            border-radius: 9999px;
                            border: 1px solid rgba(167, 139, 250, 0.3);
                            background: rgba(139, 92, 246, 0.1);
                            color: #c4b5fd;
                            font-size: 14px;
                            font-weight: 600;
                        }
                        .gradient-text {
                            background: linear-gradient(90deg, #a78bfa, #f9a8d4);
                            -webkit-background-clip: text;
                            background-clip: text;
                            color: transparent;
                        }
                        .pill-button {
                            display: inline-block;
                            padding: 8px 24px;
                            border: none;
                            border-radius: 9999px;
                            background: linear-gradient(90deg, #8b5cf6, #f472b6);
                            color: #fff;
                            font-size: 14px;
                            font-weight: 600;
                            text-decoration: none;
                            cursor: pointer;
                            box-shadow: 0 25px 50px rgba(139, 92, 246, 0.3);
                            transition: transform 0.2s ease, box-shadow 0.2s ease;
                        }
                        .pill-button.large {
                            padding: 12px 32px;
                            font-size: 16px;
                        }
                        .pill-button:hover {
                            transform: translateY(-5px) scale(1.05);
                            box-shadow: 0 0 50px rgba(196, 132, 252, 0.6);
                        }
                        .pill-button:active {
                            transform: scale(0.95);
                        }
                        .nudge {
                            display: inline-block;
                            animation: nudge 1.5s infinite;
                        }
                        @keyframes nudge {
                            0%, 100% { transform: translateX(0); }
                            50% { transform: translateX(5px); }
                        }
                        @keyframes gradientSlide {
                            from { background-position: 0% center; }
                            to { background-position: 200% center; }
                        }
                        @keyframes riseIn {
                            from { opacity: 0; transform: translateY(30px); }
                            to { opacity: 1; transform: translateY(0); }
                        }
                        @keyframes popIn {
                            from { opacity: 0; transform: scale(0.5); }
                            to { opacity: 1; transform: scale(1); }
                        }
                        @keyframes orbFloat {
                            0% { transform: translate(0, 0) scale(1); }
                            50% { transform: translate(100px, -100px) scale(1.2); }
                            100% { transform: translate(0, 0) scale(1); }
                        }
                        .connector {
                            position: relative;
                            display: none;
                        }
                        @media (min-width: 768px) {
                            .connector { display: block; }
                        }
                        .connector svg {
                            width: 100%;
                        }
                        .connector path {
                            stroke-dasharray: 1200;
                            stroke-dashoffset: 1200;
                            transition: stroke-dashoffset 1.5s ease;
                        }
                        .revealed .connector path {
                            stroke-dashoffset: 0;
                        }
                        .hub {
                            position: absolute;
                            left: 50%;
                            top: 40px;
                            width: 16px;
                            height: 16px;
                            margin: -8px 0 0 -8px;
                            border-radius: 50%;
                            background: linear-gradient(135deg, #c084fc, #ec4899);
                            animation: hubPulse 2s infinite;
                        }
                        @keyframes hubPulse {
                            0%, 100% { box-shadow: 0 0 20px 5px rgba(196, 132, 252, 0.6); }
                            50% { box-shadow: 0 0 40px 10px rgba(236, 72, 153, 0.8); }
                        }
                    "#}
                </style>
                {
                    if loader.is_visible() {
                        html! {
                            <LoadingScreen
                                progress={loader.progress()}
                                percent={loader.percent()}
                                finishing={loader.phase() == LoaderPhase::Finishing}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="grain"></div>
                <ScrollProgressBar />
                <StoryTimeline />
                <CustomCursor />
                <BackToTop />
                <Navigation />
                <HeroSection />
                <StatsSection />
                <ServicesSection />
                <WorkSection />
                <TeamSection />
                <TestimonialsSection />
                <ContactSection />
                <Footer />
            </div>
        </ContextProvider<ScrollSignal>>
    }
}
