//! About Editor Form
//!
//! Controlled inputs for one About record, with the image field driven by
//! the upload widget's callback. Saves through the engine; validation
//! failures come back from the store and are shown inline.

use dioxus::prelude::*;
use pagewright_core::{AboutDraft, AboutRecord};

use crate::components::images::ImageUpload;
use crate::context::use_engine;

/// Create/edit form for an About record
///
/// With `record: None` the form creates a new record on save; otherwise it
/// updates the given one. Parents should key this component by record id so
/// switching selection remounts it with fresh state.
#[component]
pub fn AboutForm(
    /// Record being edited, or None to create
    #[props(default = None)]
    record: Option<AboutRecord>,
    /// Called with the stored record after a successful save
    on_saved: EventHandler<AboutRecord>,
) -> Element {
    let engine = use_engine();

    let editing_id = record.as_ref().map(|r| r.id.clone());
    let mut title = use_signal(|| record.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let mut content =
        use_signal(|| record.as_ref().map(|r| r.content.clone()).unwrap_or_default());
    let mut image =
        use_signal(|| record.as_ref().and_then(|r| r.image.clone()).unwrap_or_default());
    let mut is_active = use_signal(|| record.as_ref().map(|r| r.is_active).unwrap_or(true));
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);
        error.set(None);

        let editing_id = editing_id.clone();
        spawn(async move {
            let draft = AboutDraft {
                title: title(),
                content: content(),
                image: Some(image()).filter(|url| !url.is_empty()),
                is_active: is_active(),
            };

            let shared = engine();
            let guard = shared.read().await;
            let result = match *guard {
                Some(ref eng) => match editing_id {
                    Some(ref id) => eng.update_about(id, &draft),
                    None => eng.create_about(&draft),
                },
                None => {
                    saving.set(false);
                    error.set(Some("engine not initialized".to_string()));
                    return;
                }
            };
            drop(guard);

            saving.set(false);
            match result {
                Ok(saved) => on_saved.call(saved),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let is_editing = record.is_some();

    rsx! {
        div { class: "about-form",
            h2 { class: "about-form__heading",
                if is_editing { "Edit About Page" } else { "New About Page" }
            }

            label { class: "about-form__label", "Title" }
            input {
                class: "about-form__input",
                r#type: "text",
                placeholder: "Page title",
                value: "{title}",
                oninput: move |e| title.set(e.value()),
            }

            label { class: "about-form__label", "Content" }
            textarea {
                class: "about-form__textarea",
                placeholder: "Tell the story...",
                value: "{content}",
                rows: 8,
                oninput: move |e| content.set(e.value()),
            }

            label { class: "about-form__label", "Image" }
            ImageUpload {
                current_image: Some(image()).filter(|url| !url.is_empty()),
                on_upload: move |url: String| image.set(url),
            }

            label { class: "about-form__checkbox-row",
                input {
                    r#type: "checkbox",
                    checked: is_active(),
                    onchange: move |e| is_active.set(e.checked()),
                }
                "Active"
            }

            if let Some(err) = error() {
                div { class: "about-form__error", "⚠️ {err}" }
            }

            button {
                class: "about-form__save",
                r#type: "button",
                onclick: handle_save,
                disabled: saving(),
                if saving() {
                    "Saving..."
                } else {
                    "Save"
                }
            }
        }
    }
}
