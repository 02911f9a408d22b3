// ============================================================================
// TRIP STORE - Estado de la sesión de viaje
// ============================================================================
// Estado propiedad del componente App, sin singleton global.
// Se muta SOLO a través de los setters (ver hooks::use_trip_store).
// ============================================================================

use crate::models::{Coordinates, Destination, Transportation};

/// Contexto del viaje acumulado durante la sesión.
/// No se persiste entre recargas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripStore {
    pub last_location: Option<Coordinates>,
    pub destinations: Vec<Destination>,
    pub transportation: Option<Transportation>,
}

impl TripStore {
    pub fn set_last_location(&mut self, coordinates: Coordinates) {
        self.last_location = Some(coordinates);
    }

    /// Reemplaza la lista de destinos. Las etiquetas ya vienen
    /// recalculadas por `DestinationList`.
    pub fn set_destinations(&mut self, destinations: Vec<Destination>) {
        self.destinations = destinations;
    }

    pub fn set_transportation(&mut self, transportation: Transportation) {
        self.transportation = Some(transportation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DestinationList;

    #[test]
    fn starts_empty() {
        let store = TripStore::default();
        assert!(store.last_location.is_none());
        assert!(store.destinations.is_empty());
        assert!(store.transportation.is_none());
    }

    #[test]
    fn setters_update_each_field_independently() {
        let mut store = TripStore::default();

        store.set_last_location(Coordinates {
            latitude: 37.5576879,
            longitude: 126.9254523,
        });
        assert!(store.last_location.is_some());
        assert!(store.transportation.is_none());

        store.set_transportation(Transportation::Car);
        assert_eq!(store.transportation, Some(Transportation::Car));

        let mut list = DestinationList::from_items(store.destinations.clone());
        list.add("Seúl").unwrap();
        store.set_destinations(list.into_items());
        assert_eq!(store.destinations.len(), 1);
        assert_eq!(store.destinations[0].label, "A");
    }
}
