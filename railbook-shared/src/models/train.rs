use serde::{Deserialize, Serialize};

/// A scheduled train. Read-only: seat counts are never decremented by a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Train {
    pub number: String,
    pub name: String,
    /// Category such as "Rajdhani" or "Express". Kept as the raw string the API sends.
    #[serde(rename = "type")]
    pub train_type: String,
    /// Station code of origin
    pub source: String,
    /// Station code of destination
    pub destination: String,
    /// HH:MM
    pub departure_time: String,
    /// HH:MM
    pub arrival_time: String,
    pub seats_available: u32,
    pub fare: f64,
    #[serde(default)]
    pub running_days: Vec<String>,
}

impl Train {
    /// Whether this train runs from `from` to `to`, comparing codes case-insensitively.
    pub fn serves(&self, from: &str, to: &str) -> bool {
        self.source.eq_ignore_ascii_case(from) && self.destination.eq_ignore_ascii_case(to)
    }

    /// Lowercased category, used as the badge style key.
    pub fn badge(&self) -> String {
        self.train_type.to_lowercase()
    }

    pub fn running_days_label(&self) -> String {
        self.running_days.join(", ")
    }
}
