use railbook_shared::Masked;
use std::fmt;
use std::str::FromStr;

use crate::wizard::WizardError;

pub const CARD_NUMBER_MAX_LEN: usize = 16;
/// "MM/YY"
pub const EXPIRY_MAX_LEN: usize = 5;
pub const CVV_MAX_LEN: usize = 3;
pub const MIN_AGE: u8 = 1;
pub const MAX_AGE: u8 = 120;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

impl FromStr for Gender {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "other" | "o" => Ok(Gender::Other),
            _ => Err(WizardError::InvalidField {
                field: "gender",
                reason: format!("expected Male, Female or Other, got '{}'", s.trim()),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerField {
    Name,
    Email,
    Phone,
    Age,
    Gender,
}

impl PassengerField {
    pub const ALL: [PassengerField; 5] = [
        PassengerField::Name,
        PassengerField::Email,
        PassengerField::Phone,
        PassengerField::Age,
        PassengerField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PassengerField::Name => "name",
            PassengerField::Email => "email",
            PassengerField::Phone => "phone",
            PassengerField::Age => "age",
            PassengerField::Gender => "gender",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    Expiry,
    Cvv,
}

impl PaymentField {
    pub const ALL: [PaymentField; 3] = [PaymentField::CardNumber, PaymentField::Expiry, PaymentField::Cvv];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "card number",
            PaymentField::Expiry => "expiry",
            PaymentField::Cvv => "cvv",
        }
    }

    pub fn max_len(&self) -> usize {
        match self {
            PaymentField::CardNumber => CARD_NUMBER_MAX_LEN,
            PaymentField::Expiry => EXPIRY_MAX_LEN,
            PaymentField::Cvv => CVV_MAX_LEN,
        }
    }
}

/// Passenger details for one booking attempt. Age is kept as the raw numeric input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassengerInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub gender: Gender,
}

impl PassengerInfo {
    /// Apply one field edit. Age accepts digits only, like a number input.
    pub fn set(&mut self, field: PassengerField, value: &str) -> Result<(), WizardError> {
        match field {
            PassengerField::Name => self.name = value.to_string(),
            PassengerField::Email => self.email = value.to_string(),
            PassengerField::Phone => self.phone = value.to_string(),
            PassengerField::Age => {
                let value = value.trim();
                if !value.chars().all(|c| c.is_ascii_digit()) {
                    return Err(WizardError::InvalidField {
                        field: "age",
                        reason: format!("'{}' is not a number", value),
                    });
                }
                self.age = value.to_string();
            }
            PassengerField::Gender => self.gender = value.parse()?,
        }
        Ok(())
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(PassengerField::Name.label());
        }
        if self.email.trim().is_empty() {
            missing.push(PassengerField::Email.label());
        }
        if self.phone.trim().is_empty() {
            missing.push(PassengerField::Phone.label());
        }
        if self.age.trim().is_empty() {
            missing.push(PassengerField::Age.label());
        }
        missing
    }

    pub fn age_years(&self) -> Option<u8> {
        self.age.trim().parse().ok()
    }

    /// Required-field presence plus the age range. No format checks on email or phone.
    pub fn validate(&self) -> Result<(), WizardError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(WizardError::MissingFields(missing));
        }

        match self.age_years() {
            Some(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
            _ => Err(WizardError::InvalidField {
                field: "age",
                reason: format!("must be between {} and {}", MIN_AGE, MAX_AGE),
            }),
        }
    }
}

/// Card details for one booking attempt. Never transmitted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentInfo {
    pub card_number: Masked<String>,
    pub expiry: String,
    pub cvv: Masked<String>,
}

impl PaymentInfo {
    /// Apply one field edit, truncating to the field's maximum length.
    pub fn set(&mut self, field: PaymentField, value: &str) {
        let value: String = value.chars().take(field.max_len()).collect();
        match field {
            PaymentField::CardNumber => self.card_number = Masked(value),
            PaymentField::Expiry => self.expiry = value,
            PaymentField::Cvv => self.cvv = Masked(value),
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.card_number.expose().trim().is_empty() {
            missing.push(PaymentField::CardNumber.label());
        }
        if self.expiry.trim().is_empty() {
            missing.push(PaymentField::Expiry.label());
        }
        if self.cvv.expose().trim().is_empty() {
            missing.push(PaymentField::Cvv.label());
        }
        missing
    }

    pub fn validate(&self) -> Result<(), WizardError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(WizardError::MissingFields(missing))
        }
    }
}
