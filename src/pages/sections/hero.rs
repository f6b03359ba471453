use yew::prelude::*;

use crate::hooks::use_section_progress;
use crate::motion::{hero_motion, ScrollOffset};

const ORB_COUNT: usize = 5;
const PARTICLE_COUNT: usize = 100;
const PARTICLE_COLORS: [&str; 3] = ["#c084fc", "#f9a8d4", "#67e8f9"];

/// Static background particle. Placement is a pure function of its index so the field looks
/// scattered but renders identically every time.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Particle {
    left_pct: f64,
    top_pct: f64,
    size_px: usize,
    color: &'static str,
}

fn particle(i: usize) -> Particle {
    Particle {
        left_pct: (i as f64 * 7.3) % 100.0,
        top_pct: (i as f64 * 11.7) % 100.0,
        size_px: (i % 3) + 1,
        color: PARTICLE_COLORS[i % 3],
    }
}

fn orb_style(i: usize) -> String {
    let size = 200 + i * 50;
    let fill = if i % 2 == 0 {
        "radial-gradient(circle, rgba(139, 92, 246, 0.3) 0%, transparent 70%)"
    } else {
        "radial-gradient(circle, rgba(244, 114, 182, 0.2) 0%, transparent 70%)"
    };
    format!(
        "width: {size}px; height: {size}px; left: {}%; top: {}%; background: {fill}; animation-duration: {}s;",
        20 * i,
        15 * i,
        15 + i * 2,
    )
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let node = use_node_ref();
    let progress = use_section_progress(node.clone(), ScrollOffset::StartStartToEndStart);
    let motion = hero_motion(progress);

    html! {
        <section ref={node} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        transform-origin: center top;
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(135deg, rgba(76, 29, 149, 0.3), #000, rgba(131, 24, 67, 0.3));
                        background-size: 200% 200%;
                        animation: drift 20s ease-in-out infinite alternate;
                    }
                    @keyframes drift {
                        from { background-position: 0% 0%; }
                        to { background-position: 100% 100%; }
                    }
                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(64px);
                        animation-name: orbFloat;
                        animation-iteration-count: infinite;
                        animation-direction: alternate;
                        animation-timing-function: ease-in-out;
                    }
                    .hero-particle {
                        position: absolute;
                        border-radius: 50%;
                        opacity: 0.3;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 1152px;
                        margin: 0 auto;
                        padding: 0 24px;
                        text-align: center;
                        animation: riseIn 1s ease both;
                    }
                    .hero-badge {
                        display: inline-block;
                        margin-bottom: 32px;
                        padding: 8px 24px;
                        border-radius: 9999px;
                        border: 1px solid rgba(167, 139, 250, 0.3);
                        background: linear-gradient(90deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
                        font-size: 14px;
                        font-weight: 500;
                        animation: popIn 0.5s 0.1s ease both;
                    }
                    .hero h1 {
                        font-size: clamp(48px, 7vw, 72px);
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 24px;
                        animation: popIn 0.8s 0.2s ease both;
                    }
                    .hero h1 .word {
                        display: inline-block;
                        transition: transform 0.3s ease;
                    }
                    .hero h1 .word:hover {
                        transform: scale(1.05) rotate(-2deg);
                    }
                    .hero-obsession {
                        display: inline-block;
                        background: linear-gradient(90deg, #f9a8d4, #c084fc, #67e8f9);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: gradientSlide 5s ease infinite;
                    }
                    .hero-lede {
                        max-width: 768px;
                        margin: 0 auto 40px;
                        font-size: 20px;
                        line-height: 1.6;
                        color: #d1d5db;
                        animation: riseIn 1s 0.4s ease both;
                    }
                    .hero-lede .late {
                        font-weight: 700;
                        animation: lateHue 3s infinite;
                    }
                    @keyframes lateHue {
                        0%, 100% { color: #f9a8d4; }
                        50% { color: #c084fc; }
                    }
                    .hero-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 24px;
                        justify-content: center;
                        animation: riseIn 1s 0.6s ease both;
                    }
                    .ghost-button {
                        padding: 12px 32px;
                        border-radius: 9999px;
                        border: 2px solid rgba(255, 255, 255, 0.3);
                        background: transparent;
                        color: #fff;
                        font-size: 16px;
                        font-weight: 600;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }
                    .ghost-button:hover {
                        border-color: #c084fc;
                        box-shadow: 0 0 30px rgba(196, 132, 252, 0.3);
                        transform: translateY(-5px) scale(1.05);
                    }
                    .hero-sparkle {
                        margin-top: 64px;
                        font-size: 40px;
                        display: inline-block;
                        animation: bob 2s infinite;
                    }
                    @keyframes bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(15px); }
                    }
                    .hero-float {
                        position: absolute;
                        backdrop-filter: blur(16px);
                    }
                    .hero-float.square {
                        bottom: 80px;
                        left: 40px;
                        width: 80px;
                        height: 80px;
                        border-radius: 16px;
                        border: 1px solid rgba(167, 139, 250, 0.3);
                        background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
                        animation: floatA 4s infinite;
                    }
                    .hero-float.circle {
                        top: 160px;
                        right: 40px;
                        width: 128px;
                        height: 128px;
                        border-radius: 50%;
                        border: 1px solid rgba(244, 114, 182, 0.3);
                        background: linear-gradient(135deg, rgba(236, 72, 153, 0.2), rgba(139, 92, 246, 0.2));
                        animation: floatB 5s infinite;
                    }
                    @keyframes floatA {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-20px) rotate(10deg); }
                    }
                    @keyframes floatB {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(30px) rotate(-15deg); }
                    }
                "#}
            </style>
            <div class="hero-backdrop" style={format!("transform: scale({});", motion.background_scale)}>
                <div class="hero-gradient"></div>
                { for (0..ORB_COUNT).map(|i| html! {
                    <div key={format!("orb-{}", i)} class="hero-orb" style={orb_style(i)}></div>
                }) }
                { for (0..PARTICLE_COUNT).map(|i| {
                    let p = particle(i);
                    html! {
                        <div
                            key={i}
                            class="hero-particle"
                            style={format!(
                                "width: {size}px; height: {size}px; left: {}%; top: {}%; background: {};",
                                p.left_pct,
                                p.top_pct,
                                p.color,
                                size = p.size_px,
                            )}
                        ></div>
                    }
                }) }
            </div>

            <div
                class="hero-content"
                style={format!("opacity: {}; transform: translateY({}px);", motion.opacity, motion.content_y)}
            >
                <div class="hero-badge">
                    <span class="gradient-text">{"✨ Award Winning Digital Agency"}</span>
                </div>
                <h1>
                    <span class="word gradient-text">{"Turning"}</span>
                    {" "}
                    <span class="word gradient-text">{"Brands"}</span>
                    <br />
                    <span class="hero-obsession">{"Into Obsessions"}</span>
                </h1>
                <p class="hero-lede">
                    {"It's "}<span class="late">{"2 AM"}</span>
                    {", and someone's still scrolling through your content because they literally can't stop. "}
                    <span class="gradient-text">{"That's not luck, that's WinX magic."}</span>
                </p>
                <div class="hero-actions">
                    <button class="pill-button large">
                        {"Start Your Journey "}<span class="nudge">{"→"}</span>
                    </button>
                    <button class="ghost-button">{"View Our Magic ✨"}</button>
                </div>
                <div class="hero-sparkle">{"✨"}</div>
            </div>

            <div class="hero-float square"></div>
            <div class="hero-float circle"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_placement() {
        let first = particle(0);
        assert_eq!(first.left_pct, 0.0);
        assert_eq!(first.size_px, 1);
        assert_eq!(first.color, "#c084fc");

        let p = particle(14);
        assert!((p.left_pct - 2.2).abs() < 1e-9);
        assert_eq!(p.size_px, 3);
        assert_eq!(p.color, "#67e8f9");
    }

    #[test]
    fn test_particles_stay_inside_hero() {
        for i in 0..PARTICLE_COUNT {
            let p = particle(i);
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((1..=3).contains(&p.size_px));
        }
    }

    #[test]
    fn test_orbs_grow_with_index() {
        assert!(orb_style(0).starts_with("width: 200px; height: 200px;"));
        assert!(orb_style(4).contains("width: 400px"));
        assert!(orb_style(4).contains("animation-duration: 23s"));
    }
}
