pub mod destination;
pub mod location;
pub mod recommendation;
pub mod search;
pub mod trip;

pub use destination::{ordinal_label, Destination, DestinationError, DestinationList};
pub use location::{Address, Coordinates};
pub use recommendation::Recommendation;
pub use search::SearchResult;
pub use trip::{Transportation, TRANSPORTATION_OPTIONS};
