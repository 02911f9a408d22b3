// ============================================================================
// USE GEOLOCATION HOOK - Posición del navegador (una vez por montaje)
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Position, PositionError};
use yew::prelude::*;

use crate::models::Coordinates;

/// Pide la posición actual una única vez al montar el componente.
/// Sin seguimiento continuo. Si el navegador no soporta geolocalización
/// o el usuario la deniega, se emite `on_unavailable` y la página sigue.
#[hook]
pub fn use_geolocation(on_position: Callback<Coordinates>, on_unavailable: Callback<()>) {
    use_effect_with((), move |_| {
        let geolocation = web_sys::window().and_then(|w| w.navigator().geolocation().ok());

        match geolocation {
            Some(geolocation) => {
                let success = Closure::wrap(Box::new(move |position: Position| {
                    let coords = position.coords();
                    let coordinates = Coordinates {
                        latitude: coords.latitude(),
                        longitude: coords.longitude(),
                    };
                    log::info!(
                        "📍 Posición obtenida: ({}, {})",
                        coordinates.latitude,
                        coordinates.longitude
                    );
                    on_position.emit(coordinates);
                }) as Box<dyn FnMut(Position)>);

                let on_unavailable_error = on_unavailable.clone();
                let error = Closure::wrap(Box::new(move |err: PositionError| {
                    log::warn!("⚠️ No se pudo obtener la posición: {}", err.message());
                    on_unavailable_error.emit(());
                }) as Box<dyn FnMut(PositionError)>);

                if geolocation
                    .get_current_position_with_error_callback(
                        success.as_ref().unchecked_ref(),
                        Some(error.as_ref().unchecked_ref()),
                    )
                    .is_err()
                {
                    log::warn!("⚠️ Llamada a geolocation rechazada");
                    on_unavailable.emit(());
                }

                // Los closures viven hasta que el navegador responda
                success.forget();
                error.forget();
            }
            None => {
                log::warn!("⚠️ Geolocalización no soportada por este navegador");
                on_unavailable.emit(());
            }
        }

        || ()
    });
}
