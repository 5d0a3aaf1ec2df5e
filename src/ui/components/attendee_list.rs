use crate::attendees::{Attendee, AttendeeClient, AttendeeListState, PageNav};
use crate::relative_time::time_ago;
use crate::ui::components::{IconButton, Table, TableCell, TableHeader, TableRow};
use crate::ui::query_sync::RouterQueryStore;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

pub const NOT_CHECKED_IN: &str = "Não fez check-in";

const CHECKBOX_CLASS: &str = "size-4 bg-black/20 rounded border border-white/10";

/// Hook to access the attendee API client provided at launch
pub fn use_attendee_client() -> AttendeeClient {
    use_context::<AttendeeClient>()
}

/// Paginated, searchable attendee table.
///
/// `page` and `search` come from the route and are only read on mount.
#[component]
pub fn AttendeeList(page: String, search: String) -> Element {
    debug!("Component rendering");
    let client = use_attendee_client();
    let navigator = use_navigator();

    let store = use_hook(|| Rc::new(RouterQueryStore::from_route(navigator, &page, &search)));
    let mut state = use_signal({
        let store = store.clone();
        move || AttendeeListState::from_query_store(store.as_ref())
    });

    // Only page/search feed the request, so applying results never refetches
    let query = use_memo(move || state.read().query());

    use_effect(move || {
        let query = query();
        let client = client.clone();
        debug!("Starting attendee fetch for {:?}", query);
        spawn(async move {
            let result = client.fetch_page(&query).await;
            state.write().apply_result(result);
        });
    });

    let on_search_input = {
        let store = store.clone();
        move |event: FormEvent| {
            state.write().on_search_input(store.as_ref(), event.value());
        }
    };

    let on_navigate = use_callback({
        let store = store.clone();
        move |nav: PageNav| {
            if !state.write().navigate(store.as_ref(), nav) {
                debug!("Ignoring disabled {:?} control", nav);
            }
        }
    });

    let view = state();
    let now = Utc::now();

    rsx! {
        div { class: "flex flex-col gap-4",
            div { class: "flex gap-3 items-center",
                h1 { class: "text-2xl font-bold", "Participantes" }
                div { class: "px-3 w-72 py-1.5 border border-white/10 rounded-lg text-sm flex items-center gap-3",
                    span { class: "text-zinc-400", "🔍" }
                    input {
                        class: "bg-transparent flex-1 outline-none border-0 p-0 text-sm focus:ring-0",
                        placeholder: "Buscar participante...",
                        value: "{view.search()}",
                        oninput: on_search_input,
                    }
                }
            }

            Table {
                thead {
                    TableRow {
                        TableHeader { style: "width: 48px;",
                            // Selection is not wired up
                            input { class: CHECKBOX_CLASS, r#type: "checkbox" }
                        }
                        TableHeader { "Código" }
                        TableHeader { "Participante" }
                        TableHeader { "Data da inscrição" }
                        TableHeader { "Data do check-in" }
                        TableHeader { style: "width: 64px;" }
                    }
                }
                tbody {
                    for attendee in view.attendees().iter().cloned() {
                        AttendeeRow { key: "{attendee.id}", attendee, now }
                    }
                }
                tfoot {
                    TableRow {
                        TableCell { colspan: 3, "{view.showing_label()}" }
                        TableCell { class: "text-right", colspan: 3,
                            div { class: "inline-flex items-center gap-8",
                                span { "{view.page_label()}" }
                                div { class: "flex gap-1.5",
                                    for nav in PageNav::ALL {
                                        IconButton {
                                            key: "{nav:?}",
                                            title: "{nav.label()}",
                                            disabled: view.is_disabled(nav),
                                            onclick: move |_| on_navigate.call(nav),
                                            "{nav.glyph()}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendeeRow(attendee: Attendee, now: DateTime<Utc>) -> Element {
    let check_in = check_in_text(&attendee, now);

    rsx! {
        TableRow {
            TableCell {
                input { class: CHECKBOX_CLASS, r#type: "checkbox" }
            }
            TableCell { "{attendee.id}" }
            TableCell {
                div { class: "flex flex-col gap-1",
                    span { class: "font-semibold text-white", "{attendee.name}" }
                    span { "{attendee.email}" }
                }
            }
            TableCell { {time_ago(attendee.created_at, now)} }
            TableCell {
                if attendee.checked_in_at.is_some() {
                    "{check_in}"
                } else {
                    span { class: "text-zinc-400", "{check_in}" }
                }
            }
            TableCell {
                // Row actions are not implemented
                IconButton { transparent: true, title: "Mais opções", "⋯" }
            }
        }
    }
}

/// Check-in column text: relative time, or the not-checked-in label
pub fn check_in_text(attendee: &Attendee, now: DateTime<Utc>) -> String {
    match attendee.checked_in_at {
        Some(checked_in_at) => time_ago(checked_in_at, now),
        None => NOT_CHECKED_IN.to_string(),
    }
}
