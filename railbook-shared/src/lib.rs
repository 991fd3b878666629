pub mod models;
pub mod pii;

pub use models::{Station, Train};
pub use pii::Masked;
