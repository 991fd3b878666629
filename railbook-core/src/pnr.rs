use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::Deserialize;
use std::sync::Mutex;

pub const REFERENCE_PREFIX: &str = "PNR";
pub const REFERENCE_BODY_LEN: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produces booking reference codes shown on the confirmation step.
///
/// Codes are display-only. Uniqueness is not checked because no booking is
/// ever stored or looked up.
pub trait PnrGenerator: Send + Sync {
    fn generate(&self) -> String;
}

fn reference_from<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let body: String = (0..REFERENCE_BODY_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}{}", REFERENCE_PREFIX, body)
}

/// `PNR` followed by exactly eight characters from `A-Z0-9`.
pub fn is_reference_code(code: &str) -> bool {
    match code.strip_prefix(REFERENCE_PREFIX) {
        Some(body) => {
            body.len() == REFERENCE_BODY_LEN
                && body.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        }
        None => false,
    }
}

/// Non-cryptographic thread-local RNG. The demo default.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPnrGenerator;

impl PnrGenerator for RandomPnrGenerator {
    fn generate(&self) -> String {
        reference_from(&mut rand::thread_rng())
    }
}

/// Draws from the operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct SecurePnrGenerator;

impl PnrGenerator for SecurePnrGenerator {
    fn generate(&self) -> String {
        reference_from(&mut OsRng)
    }
}

/// Always returns the same code
#[derive(Debug, Clone)]
pub struct FixedPnrGenerator {
    code: String,
}

impl FixedPnrGenerator {
    pub fn new(code: &str) -> Self {
        Self { code: code.to_string() }
    }
}

impl PnrGenerator for FixedPnrGenerator {
    fn generate(&self) -> String {
        self.code.clone()
    }
}

/// Reproducible sequence of codes from a fixed seed.
pub struct SeededPnrGenerator {
    rng: Mutex<StdRng>,
}

impl SeededPnrGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl PnrGenerator for SeededPnrGenerator {
    fn generate(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        reference_from(&mut *rng)
    }
}

/// Which generator a deployment uses, as named in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    #[default]
    Random,
    Secure,
}

impl GeneratorKind {
    pub fn build(self) -> Box<dyn PnrGenerator> {
        match self {
            GeneratorKind::Random => Box::new(RandomPnrGenerator),
            GeneratorKind::Secure => Box::new(SecurePnrGenerator),
        }
    }
}
