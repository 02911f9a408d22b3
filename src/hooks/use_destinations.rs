// ============================================================================
// USE DESTINATIONS HOOK - Operaciones sobre la lista de destinos
// ============================================================================
// Envuelve la lógica pura de models::DestinationList y publica el
// resultado en el store. Los errores de validación se muestran como
// alertas bloqueantes y no tocan el estado.
// ============================================================================

use yew::prelude::*;

use crate::models::{Destination, DestinationList};

#[derive(Clone)]
pub struct UseDestinationsHandle {
    pub add: Callback<String>,
    pub add_from_search: Callback<String>,
    pub delete: Callback<usize>,
    pub reorder: Callback<(usize, usize)>,
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[hook]
pub fn use_destinations(
    destinations: Vec<Destination>,
    set_destinations: Callback<Vec<Destination>>,
    on_added: Callback<()>,
) -> UseDestinationsHandle {
    let add = {
        let destinations = destinations.clone();
        let set_destinations = set_destinations.clone();
        let on_added = on_added.clone();

        Callback::from(move |name: String| {
            let mut list = DestinationList::from_items(destinations.clone());
            match list.add(&name) {
                Ok(()) => {
                    log::info!("➕ Destino añadido: {} ({} en total)", name.trim(), list.len());
                    set_destinations.emit(list.into_items());
                    on_added.emit(());
                }
                Err(e) => {
                    log::warn!("⚠️ Destino rechazado \"{}\": {:?}", name, e);
                    show_alert(&e.to_string());
                }
            }
        })
    };

    let add_from_search = {
        let destinations = destinations.clone();
        let set_destinations = set_destinations.clone();

        Callback::from(move |name: String| {
            // El nombre viene verificado por el backend de búsqueda
            let mut list = DestinationList::from_items(destinations.clone());
            list.add_from_search(&name);
            log::info!("➕ Destino añadido desde búsqueda: {}", name);
            set_destinations.emit(list.into_items());
            on_added.emit(());
        })
    };

    let delete = {
        let destinations = destinations.clone();
        let set_destinations = set_destinations.clone();

        Callback::from(move |index: usize| {
            let mut list = DestinationList::from_items(destinations.clone());
            list.delete(index);
            log::info!("🗑️ Destino {} eliminado, quedan {}", index, list.len());
            set_destinations.emit(list.into_items());
        })
    };

    let reorder = {
        let destinations = destinations.clone();
        let set_destinations = set_destinations.clone();

        Callback::from(move |(from, to): (usize, usize)| {
            let mut list = DestinationList::from_items(destinations.clone());
            list.reorder(from, to);
            log::info!("🔄 Destino movido de {} a {}", from, to);
            set_destinations.emit(list.into_items());
        })
    };

    UseDestinationsHandle {
        add,
        add_from_search,
        delete,
        reorder,
    }
}
