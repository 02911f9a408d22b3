// ============================================================================
// USE TRIP STORE HOOK - Estado compartido del viaje
// ============================================================================
// El App es el único dueño del TripStore; el resto de componentes
// lo leen por props y lo mutan a través de estos callbacks.
// ============================================================================

use yew::prelude::*;

use crate::models::{Coordinates, Destination, Transportation};
use crate::stores::TripStore;

#[derive(Clone)]
pub struct UseTripStoreHandle {
    pub store: UseStateHandle<TripStore>,
    pub set_last_location: Callback<Coordinates>,
    pub set_destinations: Callback<Vec<Destination>>,
    pub set_transportation: Callback<Transportation>,
}

#[hook]
pub fn use_trip_store() -> UseTripStoreHandle {
    let store = use_state(TripStore::default);

    let set_last_location = {
        let store = store.clone();
        Callback::from(move |coordinates: Coordinates| {
            let mut next = (*store).clone();
            next.set_last_location(coordinates);
            store.set(next);
        })
    };

    let set_destinations = {
        let store = store.clone();
        Callback::from(move |destinations: Vec<Destination>| {
            let mut next = (*store).clone();
            next.set_destinations(destinations);
            store.set(next);
        })
    };

    let set_transportation = {
        let store = store.clone();
        Callback::from(move |transportation: Transportation| {
            log::info!("🚗 Transporte elegido: {:?}", transportation);
            let mut next = (*store).clone();
            next.set_transportation(transportation);
            store.set(next);
        })
    };

    UseTripStoreHandle {
        store,
        set_last_location,
        set_destinations,
        set_transportation,
    }
}
