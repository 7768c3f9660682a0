use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_data_dir, get_upload_url, SharedEngine};
use crate::pages::AboutAdmin;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - About page editor and record list
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    AboutAdmin {},
}

/// Root application component.
///
/// Provides global styles, engine context, and routing.
#[component]
pub fn App() -> Element {
    // Initialize shared engine state
    let engine: Signal<SharedEngine> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut engine_ready: Signal<bool> = use_signal(|| false);

    // Provide engine context to all child components
    use_context_provider(|| engine);
    use_context_provider(|| engine_ready);

    // Initialize engine on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            let upload_url = get_upload_url();
            match pagewright_core::ContentEngine::new(&data_dir, &upload_url) {
                Ok(eng) => {
                    let shared = engine();
                    let mut guard = shared.write().await;
                    *guard = Some(eng);
                    drop(guard);
                    engine_ready.set(true);
                    tracing::info!("ContentEngine initialized");
                }
                Err(e) => {
                    tracing::error!("Failed to initialize ContentEngine: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
