use crate::utils::error::{Result, VmrError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct AirlineEntry {
    #[serde(rename = "AsoboAirline")]
    asobo_airline: String,
    #[serde(rename = "IcaoAirline")]
    icao_airline: String,
}

#[derive(Debug, Deserialize)]
struct TypeCodeEntry {
    #[serde(rename = "AsoboTypeCode")]
    asobo_type_code: String,
    #[serde(rename = "IcaoTypeCode")]
    icao_type_code: String,
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let text = fs::read_to_string(path).map_err(|e| VmrError::LookupTable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&text).map_err(|e| VmrError::LookupTable {
        path: path.display().to_string(),
        reason: format!("Invalid JSON: {}", e),
    })
}

/// Maps Asobo airline names to ICAO airline codes.
#[derive(Debug)]
pub struct AirlineMapper {
    map: HashMap<String, String>,
}

impl AirlineMapper {
    pub fn from_path(path: &Path) -> Result<Self> {
        let entries: Vec<AirlineEntry> = read_table(path)?;
        tracing::debug!(
            "Loaded {} airline entries from {}",
            entries.len(),
            path.display()
        );

        Ok(Self {
            map: entries
                .into_iter()
                .map(|e| (e.asobo_airline, e.icao_airline))
                .collect(),
        })
    }

    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// ICAO code for an Asobo airline name, or `None` when unknown or empty.
    pub fn airline(&self, asobo_airline: &str) -> Option<&str> {
        if asobo_airline.is_empty() {
            return None;
        }
        self.map.get(asobo_airline).map(String::as_str)
    }
}

/// Maps Asobo type codes to ICAO type designators.
#[derive(Debug)]
pub struct TypeCodeMapper {
    map: HashMap<String, String>,
}

impl TypeCodeMapper {
    pub fn from_path(path: &Path) -> Result<Self> {
        let entries: Vec<TypeCodeEntry> = read_table(path)?;
        tracing::debug!(
            "Loaded {} type code entries from {}",
            entries.len(),
            path.display()
        );

        Ok(Self {
            map: entries
                .into_iter()
                .map(|e| (e.asobo_type_code, e.icao_type_code))
                .collect(),
        })
    }

    pub fn from_entries(entries: Vec<(String, String)>) -> Self {
        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// ICAO type designator for an Asobo type code, or `None` when unknown
    /// or empty.
    pub fn type_code(&self, asobo_type_code: &str) -> Option<&str> {
        if asobo_type_code.is_empty() {
            return None;
        }
        self.map.get(asobo_type_code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_airline_table_from_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"AsoboAirline": "DELTA", "IcaoAirline": "DAL"}},
                {{"AsoboAirline": "UNITED", "IcaoAirline": "UAL"}}]"#
        )
        .unwrap();

        let mapper = AirlineMapper::from_path(file.path()).unwrap();

        assert_eq!(mapper.airline("DELTA"), Some("DAL"));
        assert_eq!(mapper.airline("UNITED"), Some("UAL"));
        assert_eq!(mapper.airline("NOSUCH"), None);
        assert_eq!(mapper.airline(""), None);
    }

    #[test]
    fn loads_type_code_table_from_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"[{{"AsoboTypeCode": "B777_300ER", "IcaoTypeCode": "B77W"}}]"#
        )
        .unwrap();

        let mapper = TypeCodeMapper::from_path(file.path()).unwrap();

        assert_eq!(mapper.type_code("B777_300ER"), Some("B77W"));
        assert_eq!(mapper.type_code("A320"), None);
    }

    #[test]
    fn missing_table_file_is_a_lookup_error() {
        let err = AirlineMapper::from_path(Path::new("no/such/airlines.json")).unwrap_err();

        assert!(matches!(err, VmrError::LookupTable { .. }));
    }

    #[test]
    fn malformed_table_file_is_a_lookup_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{not json").unwrap();

        let err = TypeCodeMapper::from_path(file.path()).unwrap_err();

        assert!(matches!(err, VmrError::LookupTable { .. }));
    }
}
