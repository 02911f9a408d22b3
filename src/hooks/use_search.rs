// ============================================================================
// USE SEARCH HOOK - Búsqueda de destinos con debounce
// ============================================================================
// Cada pulsación descarta el timer anterior (al soltar el Timeout se
// cancela) y arma uno nuevo; solo el último dispara la request.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::SearchResult;
use crate::services::ApiClient;

#[derive(Clone)]
pub struct UseSearchHandle {
    pub results: UseStateHandle<Vec<SearchResult>>,
    pub on_input: Callback<String>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_search() -> UseSearchHandle {
    let results = use_state(Vec::<SearchResult>::new);
    let debounce = use_mut_ref(|| None::<Timeout>);

    let on_input = {
        let results = results.clone();
        let debounce = debounce.clone();

        Callback::from(move |value: String| {
            let results = results.clone();
            let timeout = Timeout::new(CONFIG.search_config.debounce_ms, move || {
                let query = value.trim().to_string();
                if query.is_empty() {
                    results.set(Vec::new());
                    return;
                }
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiClient::new().search_places(&query).await {
                        Ok(found) => results.set(found),
                        Err(e) => {
                            log::error!("❌ Error buscando destinos: {}", e);
                            results.set(Vec::new());
                        }
                    }
                });
            });
            // Reemplazar el timer pendiente lo cancela
            *debounce.borrow_mut() = Some(timeout);
        })
    };

    let clear = {
        let results = results.clone();
        let debounce = debounce.clone();

        Callback::from(move |_| {
            *debounce.borrow_mut() = None;
            results.set(Vec::new());
        })
    };

    // Clic fuera de la zona de resultados: ocultar la lista
    {
        let results = results.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|w| w.document());

            let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                let inside = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .map(|el| el.closest(".search-results").ok().flatten().is_some())
                    .unwrap_or(false);
                if !inside {
                    results.set(Vec::new());
                }
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Some(doc) = document.as_ref() {
                let _ = doc
                    .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(doc) = document {
                    let _ = doc.remove_event_listener_with_callback(
                        "mousedown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    UseSearchHandle {
        results,
        on_input,
        clear,
    }
}
