use railbook_shared::Station;

/// Display name for a station code, or the code itself when it is not in the list.
pub fn station_name<'a>(code: &'a str, stations: &'a [Station]) -> &'a str {
    stations
        .iter()
        .find(|s| s.code == code)
        .map(|s| s.name.as_str())
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<Station> {
        vec![
            Station::new("NDLS", "New Delhi", "Delhi", "Delhi"),
            Station::new("HWH", "Howrah Junction", "Kolkata", "West Bengal"),
        ]
    }

    #[test]
    fn test_known_code_returns_name() {
        let stations = stations();
        assert_eq!(station_name("NDLS", &stations), "New Delhi");
        assert_eq!(station_name("HWH", &stations), "Howrah Junction");
    }

    #[test]
    fn test_unknown_code_falls_back_to_code() {
        let stations = stations();
        assert_eq!(station_name("MAS", &stations), "MAS");
        assert_eq!(station_name("", &stations), "");
        assert_eq!(station_name("NDLS", &[]), "NDLS");
    }
}
