use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;
use tracing::debug;

use crate::ui::components::*;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageContainer)]
    #[route("/?:page&:search")]
    AttendeeList { page: String, search: String },
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}

#[component]
fn PageContainer() -> Element {
    rsx! {
        div { class: "max-w-[1216px] mx-auto py-5 px-4 flex flex-col gap-5",
            Outlet::<Route> {}
        }
    }
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default().with_window(make_window())
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("pass.in")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1280, 800))
}
