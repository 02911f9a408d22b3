pub mod use_destinations;
pub mod use_geolocation;
pub mod use_search;
pub mod use_trip_store;

pub use use_destinations::{use_destinations, UseDestinationsHandle};
pub use use_geolocation::use_geolocation;
pub use use_search::{use_search, UseSearchHandle};
pub use use_trip_store::{use_trip_store, UseTripStoreHandle};
