use dioxus::prelude::*;

/// Small square button wrapping a glyph
#[component]
pub fn IconButton(
    #[props(default)] transparent: bool,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let background = if transparent {
        "bg-black/20"
    } else {
        "bg-white/10"
    };

    rsx! {
        button {
            class: "{background} border border-white/10 rounded-md p-1.5 leading-none w-8 h-8 flex items-center justify-center disabled:opacity-50",
            title: "{title}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
