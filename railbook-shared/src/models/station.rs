use serde::{Deserialize, Serialize};

/// A railway station as served by the reference data API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub code: String,
    pub name: String,
    pub city: String,
    pub state: String,
}

impl Station {
    pub fn new(code: &str, name: &str, city: &str, state: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    /// Case-insensitive code comparison, matching how the API resolves codes.
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}
