use dioxus::prelude::*;

use api::client::DEFAULT_API_BASE_URL;
use ui::{PostsQuery, QueryClientProvider};
use views::{Home, Posts, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/users")]
    Users {},
    #[route("/posts?:..query")]
    Posts { query: PostsQuery },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Base URL of the REST API, fixed at build time.
fn api_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Script { src: TAILWIND_CDN }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        QueryClientProvider {
            base_url: api_base_url(),
            Router::<Route> {}
        }
    }
}
