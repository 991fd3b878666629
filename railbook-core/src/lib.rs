pub mod forms;
pub mod pnr;
pub mod repository;
pub mod stations;
pub mod view;
pub mod wizard;

pub use forms::{Gender, PassengerField, PassengerInfo, PaymentField, PaymentInfo};
pub use pnr::{
    is_reference_code, FixedPnrGenerator, GeneratorKind, PnrGenerator, RandomPnrGenerator,
    SecurePnrGenerator, SeededPnrGenerator,
};
pub use repository::{FetchError, ReferenceDataSource};
pub use stations::station_name;
pub use view::{
    BookingView, ListKind, Notice, ReferenceRequest, RequestTicket, Surface, Tab, TicketOutcome,
};
pub use wizard::{BookingAttempt, BookingStep, BookingWizard, WizardError};

pub use railbook_shared::{Station, Train};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("Train not found: {0}")]
    UnknownTrain(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
