use railbook_shared::{Station, Train};
use std::fs;
use std::path::Path;
use tracing::info;

/// Read-only station and train lists served by the reference data API.
#[derive(Debug, Clone, Default)]
pub struct TrainCatalog {
    stations: Vec<Station>,
    trains: Vec<Train>,
}

impl TrainCatalog {
    pub fn new(stations: Vec<Station>, trains: Vec<Train>) -> Self {
        Self { stations, trains }
    }

    pub fn from_json(stations_json: &str, trains_json: &str) -> Result<Self, CatalogError> {
        let stations: Vec<Station> =
            serde_json::from_str(stations_json).map_err(|e| CatalogError::Parse("stations", e))?;
        let trains: Vec<Train> =
            serde_json::from_str(trains_json).map_err(|e| CatalogError::Parse("trains", e))?;
        Ok(Self::new(stations, trains))
    }

    pub fn from_files(
        stations_path: impl AsRef<Path>,
        trains_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let stations_path = stations_path.as_ref();
        let trains_path = trains_path.as_ref();

        let stations_json = fs::read_to_string(stations_path)
            .map_err(|e| CatalogError::Io(stations_path.display().to_string(), e))?;
        let trains_json = fs::read_to_string(trains_path)
            .map_err(|e| CatalogError::Io(trains_path.display().to_string(), e))?;

        let catalog = Self::from_json(&stations_json, &trains_json)?;
        info!("Loaded {} stations", catalog.stations.len());
        info!("Loaded {} trains", catalog.trains.len());
        Ok(catalog)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Trains from `from` to `to`; codes compare case-insensitively.
    pub fn search(&self, from: &str, to: &str) -> Vec<Train> {
        self.trains
            .iter()
            .filter(|t| t.serves(from, to))
            .cloned()
            .collect()
    }

    pub fn station(&self, code: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.has_code(code))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("Failed to parse {0}: {1}")]
    Parse(&'static str, #[source] serde_json::Error),
}
