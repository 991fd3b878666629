use railbook_shared::Train;
use std::fmt;
use uuid::Uuid;

use crate::forms::{PassengerField, PassengerInfo, PaymentField, PaymentInfo};
use crate::pnr::PnrGenerator;

/// Where the booking overlay currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStep {
    Closed,
    Passenger,
    Payment,
    Confirmed,
}

impl BookingStep {
    /// Progress indicator position (1-3); `None` while closed.
    pub fn number(&self) -> Option<u8> {
        match self {
            BookingStep::Closed => None,
            BookingStep::Passenger => Some(1),
            BookingStep::Payment => Some(2),
            BookingStep::Confirmed => Some(3),
        }
    }
}

impl fmt::Display for BookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStep::Closed => "CLOSED",
            BookingStep::Passenger => "PASSENGER",
            BookingStep::Payment => "PAYMENT",
            BookingStep::Confirmed => "CONFIRMED",
        };
        f.write_str(label)
    }
}

/// Everything collected for the single in-progress booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingAttempt {
    /// Log correlation only; never shown or sent anywhere.
    pub id: Uuid,
    pub train: Train,
    pub passenger: PassengerInfo,
    pub payment: PaymentInfo,
}

impl BookingAttempt {
    fn new(train: Train) -> Self {
        Self {
            id: Uuid::new_v4(),
            train,
            passenger: PassengerInfo::default(),
            payment: PaymentInfo::default(),
        }
    }
}

/// The three-step booking flow. Closed carries no data, so closing drops the
/// selected train, both forms and the reference code in one move.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BookingWizard {
    #[default]
    Closed,
    Passenger(BookingAttempt),
    Payment(BookingAttempt),
    Confirmed {
        attempt: BookingAttempt,
        reference: String,
    },
}

impl BookingWizard {
    pub fn step(&self) -> BookingStep {
        match self {
            BookingWizard::Closed => BookingStep::Closed,
            BookingWizard::Passenger(_) => BookingStep::Passenger,
            BookingWizard::Payment(_) => BookingStep::Payment,
            BookingWizard::Confirmed { .. } => BookingStep::Confirmed,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, BookingWizard::Closed)
    }

    pub fn attempt(&self) -> Option<&BookingAttempt> {
        match self {
            BookingWizard::Closed => None,
            BookingWizard::Passenger(attempt) | BookingWizard::Payment(attempt) => Some(attempt),
            BookingWizard::Confirmed { attempt, .. } => Some(attempt),
        }
    }

    pub fn train(&self) -> Option<&Train> {
        self.attempt().map(|a| &a.train)
    }

    pub fn passenger(&self) -> Option<&PassengerInfo> {
        self.attempt().map(|a| &a.passenger)
    }

    pub fn payment(&self) -> Option<&PaymentInfo> {
        self.attempt().map(|a| &a.payment)
    }

    pub fn reference(&self) -> Option<&str> {
        match self {
            BookingWizard::Confirmed { reference, .. } => Some(reference),
            _ => None,
        }
    }

    /// Transition: Closed → Passenger, with empty forms
    pub fn open(&mut self, train: Train) -> Result<(), WizardError> {
        if self.is_open() {
            return Err(WizardError::invalid(self.step(), BookingStep::Passenger));
        }

        let attempt = BookingAttempt::new(train);
        tracing::info!(
            attempt_id = %attempt.id,
            train = %attempt.train.number,
            "Booking started"
        );
        *self = BookingWizard::Passenger(attempt);
        Ok(())
    }

    pub fn edit_passenger(&mut self, field: PassengerField, value: &str) -> Result<(), WizardError> {
        match self {
            BookingWizard::Passenger(attempt) => attempt.passenger.set(field, value),
            _ => Err(WizardError::FormNotActive {
                form: "passenger",
                step: self.step(),
            }),
        }
    }

    pub fn edit_payment(&mut self, field: PaymentField, value: &str) -> Result<(), WizardError> {
        match self {
            BookingWizard::Payment(attempt) => {
                attempt.payment.set(field, value);
                Ok(())
            }
            _ => Err(WizardError::FormNotActive {
                form: "payment",
                step: self.step(),
            }),
        }
    }

    /// Transition: Passenger → Payment (passenger record kept)
    pub fn submit_passenger(&mut self) -> Result<(), WizardError> {
        match self {
            BookingWizard::Passenger(attempt) => attempt.passenger.validate()?,
            _ => return Err(WizardError::invalid(self.step(), BookingStep::Payment)),
        }

        if let BookingWizard::Passenger(attempt) = std::mem::take(self) {
            tracing::debug!(attempt_id = %attempt.id, "Passenger details accepted");
            *self = BookingWizard::Payment(attempt);
        }
        Ok(())
    }

    /// Transition: Payment → Passenger (payment record kept)
    pub fn back(&mut self) -> Result<(), WizardError> {
        if !matches!(self, BookingWizard::Payment(_)) {
            return Err(WizardError::invalid(self.step(), BookingStep::Passenger));
        }

        if let BookingWizard::Payment(attempt) = std::mem::take(self) {
            *self = BookingWizard::Passenger(attempt);
        }
        Ok(())
    }

    /// Transition: Payment → Confirmed, issuing a display-only reference code.
    /// Nothing is charged or persisted.
    pub fn submit_payment(&mut self, generator: &dyn PnrGenerator) -> Result<(), WizardError> {
        match self {
            BookingWizard::Payment(attempt) => attempt.payment.validate()?,
            _ => return Err(WizardError::invalid(self.step(), BookingStep::Confirmed)),
        }

        if let BookingWizard::Payment(attempt) = std::mem::take(self) {
            let reference = generator.generate();
            tracing::info!(
                attempt_id = %attempt.id,
                train = %attempt.train.number,
                pnr = %reference,
                "Booking confirmed"
            );
            *self = BookingWizard::Confirmed { attempt, reference };
        }
        Ok(())
    }

    /// Transition: any → Closed. Closing twice is a no-op.
    pub fn close(&mut self) {
        if let Some(attempt) = self.attempt() {
            tracing::debug!(attempt_id = %attempt.id, step = %self.step(), "Booking closed");
        }
        *self = BookingWizard::Closed;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Invalid booking transition from {from} to {to}")]
    InvalidTransition { from: BookingStep, to: BookingStep },

    #[error("The {form} form is not shown at step {step}")]
    FormNotActive { form: &'static str, step: BookingStep },

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl WizardError {
    fn invalid(from: BookingStep, to: BookingStep) -> Self {
        WizardError::InvalidTransition { from, to }
    }
}
