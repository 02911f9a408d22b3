pub mod app;
pub mod draggable_destination_list;
pub mod landing_page;
pub mod recommendation_page;
pub mod result_page;
pub mod transportation_modal;

pub use app::App;
pub use draggable_destination_list::DraggableDestinationList;
pub use landing_page::LandingPage;
pub use recommendation_page::RecommendationPage;
pub use result_page::ResultPage;
pub use transportation_modal::TransportationModal;
