//! About Admin Page
//!
//! The editor form plus the list of saved records. Selecting a record loads
//! it into the form (keyed remount); deleting and saving both re-run the
//! list resource.

use dioxus::prelude::*;
use pagewright_core::AboutRecord;

use crate::components::AboutForm;
use crate::context::{use_engine, use_engine_ready};

#[component]
pub fn AboutAdmin() -> Element {
    let engine = use_engine();
    let engine_ready = use_engine_ready();
    let mut selected = use_signal(|| Option::<AboutRecord>::None);
    let mut refresh = use_signal(|| 0u32);

    let records = use_resource(move || async move {
        let _ = refresh(); // re-run after saves and deletes
        if !engine_ready() {
            return Vec::new();
        }
        let shared = engine();
        let guard = shared.read().await;
        match *guard {
            Some(ref eng) => match eng.list_about() {
                Ok(list) => list,
                Err(e) => {
                    tracing::error!("failed to list About records: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    });

    let handle_delete = move |id: String| {
        spawn(async move {
            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                if let Err(e) = eng.delete_about(&id) {
                    tracing::error!("failed to delete About record {id}: {e}");
                }
            }
            drop(guard);
            if selected().map(|r| r.id) == Some(id) {
                selected.set(None);
            }
            refresh.set(refresh() + 1);
        });
    };

    let form_key = selected()
        .map(|r| r.id)
        .unwrap_or_else(|| "new".to_string());

    rsx! {
        div { class: "page about-admin",
            header { class: "about-admin__header",
                h1 { "Pagewright" }
                p { class: "about-admin__tagline", "About page content" }
            }

            if !engine_ready() {
                div { class: "about-admin__loading",
                    div { class: "loading-spinner" }
                    "Opening library..."
                }
            } else {
                AboutForm {
                    key: "{form_key}",
                    record: selected(),
                    on_saved: move |_| {
                        selected.set(None);
                        refresh.set(refresh() + 1);
                    },
                }

                section { class: "about-admin__list",
                    div { class: "about-admin__list-header",
                        h2 { "Saved Pages" }
                        if selected().is_some() {
                            button {
                                class: "about-admin__new",
                                onclick: move |_| selected.set(None),
                                "+ New"
                            }
                        }
                    }

                    {match records() {
                        Some(list) if !list.is_empty() => rsx! {
                            for record in list {
                                AboutRow {
                                    key: "{record.id}",
                                    record: record.clone(),
                                    on_edit: move |r: AboutRecord| selected.set(Some(r)),
                                    on_delete: handle_delete,
                                }
                            }
                        },
                        Some(_) => rsx! {
                            p { class: "about-admin__empty", "Nothing saved yet." }
                        },
                        None => rsx! {
                            div { class: "about-admin__loading",
                                div { class: "loading-spinner" }
                            }
                        },
                    }}
                }
            }
        }
    }
}

/// One saved record in the list, with edit/delete controls
#[component]
fn AboutRow(
    record: AboutRecord,
    on_edit: EventHandler<AboutRecord>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_record = record.clone();
    let delete_id = record.id.clone();

    rsx! {
        div { class: "about-row",
            div { class: "about-row__main",
                span {
                    class: if record.is_active {
                        "about-row__status about-row__status--active"
                    } else {
                        "about-row__status"
                    },
                    if record.is_active { "●" } else { "○" }
                }
                div {
                    h3 { class: "about-row__title", "{record.title}" }
                    p { class: "about-row__meta",
                        "Updated {format_timestamp(record.updated_at)}"
                    }
                }
            }
            div { class: "about-row__actions",
                button {
                    class: "about-row__edit",
                    onclick: move |_| on_edit.call(edit_record.clone()),
                    "Edit"
                }
                button {
                    class: "about-row__delete",
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    "Delete"
                }
            }
        }
    }
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}
