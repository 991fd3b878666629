//! Reference data loading for the booking front-end.
//!
//! [`HttpReferenceApi`] talks to the reference data API over HTTP;
//! [`BookingSession`] owns the front-end's view state and applies fetch
//! results so that the most recently issued request for a list wins.

pub mod http_api;
pub mod session;

pub use http_api::HttpReferenceApi;
pub use session::BookingSession;
