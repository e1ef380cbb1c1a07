// Normalization of raw simulator enumeration data into exportable records:
// livery-name parsing plus JSON-backed lookup tables for airline and type
// codes.

pub mod livery_name;
pub mod tables;

pub use livery_name::split_livery_name;
pub use tables::{AirlineMapper, TypeCodeMapper};

use crate::domain::model::Livery;
use crate::utils::error::Result;
use std::path::Path;

/// Both lookup tables, loaded once at startup. A missing or malformed table
/// file is fatal.
#[derive(Debug)]
pub struct Mappers {
    pub airlines: AirlineMapper,
    pub typecodes: TypeCodeMapper,
}

impl Mappers {
    pub fn load(airlines_path: &Path, typecodes_path: &Path) -> Result<Self> {
        Ok(Self {
            airlines: AirlineMapper::from_path(airlines_path)?,
            typecodes: TypeCodeMapper::from_path(typecodes_path)?,
        })
    }

    /// Builds a livery record from one simulator enumeration item.
    ///
    /// The livery name is split into its Asobo type code and airline parts,
    /// which are then mapped to ICAO codes. Unparsable names and unmapped
    /// values leave the corresponding field empty; the record is still
    /// exported and groups with other empty values.
    pub fn livery_from_enumeration(&self, aircraft_title: &str, livery_name: &str) -> Livery {
        let mut livery = Livery {
            model_name: aircraft_title.to_string(),
            livery_name: livery_name.to_string(),
            ..Livery::default()
        };

        if let Some(parts) = split_livery_name(livery_name) {
            livery.callsign_prefix = self
                .airlines
                .airline(&parts.asobo_airline)
                .unwrap_or_default()
                .to_string();
            livery.type_code = self
                .typecodes
                .type_code(&parts.asobo_type_code)
                .unwrap_or_default()
                .to_string();
            livery.asobo_airline = parts.asobo_airline;
            livery.asobo_type_code = parts.asobo_type_code;
        }

        livery
    }
}
