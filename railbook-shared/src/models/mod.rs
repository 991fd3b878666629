pub mod station;
pub mod train;

pub use station::Station;
pub use train::Train;
