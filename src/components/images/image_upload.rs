//! Image Upload Component
//!
//! File picker that pushes the selected image to the site's upload endpoint
//! and reports the stored URL to the parent.

use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;

use super::ticker::UploadTicker;
use crate::context::{use_engine, SharedEngine};

/// Image picker with preview and remove control
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ImageUpload {
///         current_image: record.image.clone(),
///         on_upload: move |url: String| {
///             // "" means the image was removed
///             image.set(url);
///         },
///     }
/// }
/// ```
#[component]
pub fn ImageUpload(
    /// URL to preload as the preview (e.g. the record's stored image)
    #[props(default = None)]
    current_image: Option<String>,
    /// Callback with the stored URL on success, or "" on removal
    on_upload: EventHandler<String>,
) -> Element {
    let engine = use_engine();
    let mut uploading = use_signal(|| false);
    let mut preview = use_signal(|| current_image.clone().unwrap_or_default());
    let ticker = use_hook(UploadTicker::new);

    // Completions that land after the widget is gone must not touch state
    let drop_ticker = ticker.clone();
    use_drop(move || drop_ticker.cancel());

    let handle_pick = move |_| {
        let ticker = ticker.clone();

        spawn(async move {
            // Open file picker (blocking, but in spawn_blocking so the UI
            // stays responsive)
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Image")
                    .pick_file()
            })
            .await;

            let path = match picked {
                Ok(Some(path)) => path,
                Ok(None) => return, // user cancelled the dialog
                Err(e) => {
                    tracing::error!("file picker task failed: {e}");
                    return;
                }
            };

            // If a newer pick starts while this one is in flight, this
            // attempt's completion is discarded below.
            let seq = ticker.begin();
            uploading.set(true);

            let outcome = read_and_upload(engine, path).await;

            if !ticker.may_apply(seq) {
                tracing::debug!(seq, "discarding stale upload completion");
                return;
            }

            uploading.set(false);
            match outcome {
                Ok(url) => {
                    preview.set(url.clone());
                    on_upload.call(url);
                }
                // Failed attempts leave the preview exactly as it was;
                // the user retries by picking a file again.
                Err(e) => tracing::warn!("image upload failed: {e}"),
            }
        });
    };

    let handle_remove = move |_| {
        preview.set(String::new());
        on_upload.call(String::new());
    };

    rsx! {
        div { class: "image-upload",
            if !preview().is_empty() {
                div { class: "image-upload__preview",
                    img {
                        class: "image-upload__img",
                        src: "{preview}",
                        alt: "Preview",
                    }
                    // Remove stays clickable even mid-upload
                    button {
                        class: "image-upload__remove",
                        r#type: "button",
                        onclick: handle_remove,
                        "✕"
                    }
                }
            } else {
                div { class: "image-upload__placeholder",
                    p { class: "image-upload__hint", "No image yet. Pick a file to upload." }
                }
            }

            button {
                class: "image-upload__pick",
                r#type: "button",
                onclick: handle_pick,
                disabled: uploading(),
                if uploading() {
                    "Uploading..."
                } else {
                    "Choose Image"
                }
            }

            if uploading() {
                div { class: "image-upload__busy",
                    div { class: "loading-spinner" }
                    "Uploading..."
                }
            }
        }
    }
}

/// Read the picked file and push it through the engine's upload client.
///
/// Collapses every failure into a log-ready string; the widget never
/// surfaces upload errors beyond its diagnostics.
async fn read_and_upload(engine: Signal<SharedEngine>, path: PathBuf) -> Result<String, String> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("could not read {}: {e}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    let shared = engine();
    let guard = shared.read().await;
    match *guard {
        Some(ref eng) => eng
            .upload_image(&file_name, bytes)
            .await
            .map_err(|e| e.to_string()),
        None => Err("engine not initialized".to_string()),
    }
}
