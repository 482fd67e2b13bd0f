use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod i18n;
mod nav;
mod utils {
    pub mod api;
    pub mod format;
    pub mod reveal;
    pub mod selection;
}
mod components {
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod project_nav;
    pub mod rewards;
    pub mod story;
    pub mod stretch_goals;
    pub mod team;
}
mod pages {
    pub mod landing;
}

use i18n::Locale;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/:locale")]
    Localized { locale: String },
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing locale={Locale::default()} /> },
        Route::Localized { locale } => html! { <Landing locale={Locale::from_route(&locale)} /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting UmamiBox frontend");
    yew::Renderer::<App>::new().render();
}
