use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod dom;
mod hooks;
mod motion;
mod signal;
mod smooth_scroll;
mod state {
    pub mod loader;
    pub mod timeline;
    pub mod cursor;
    pub mod count_up;
    pub mod rotator;
    pub mod contact;
    pub mod scroll;
    pub mod tween;
}
mod components {
    pub mod loader;
    pub mod cursor;
    pub mod scroll_indicators;
    pub mod navigation;
}
mod pages {
    pub mod landing;
    pub mod sections {
        pub mod hero;
        pub mod stats;
        pub mod services;
        pub mod work;
        pub mod team;
        pub mod testimonials;
        pub mod contact;
        pub mod footer;
    }
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        // Single page site: unknown paths land on the home page.
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
