/// A single aircraft livery, either enumerated from the simulator or loaded
/// from a dump file.
///
/// Empty `callsign_prefix` means the rule applies to any operator; empty
/// `flight_number_range` means it applies to all flight numbers. `type_code`
/// and `model_name` are expected to be non-empty for a record to be useful,
/// but nothing here enforces that: empty values flow through unchanged and
/// group as equals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Livery {
    /// ICAO airline code, e.g. "DAL".
    pub callsign_prefix: String,

    /// Textual flight number range, e.g. "4439-4858".
    pub flight_number_range: String,

    /// ICAO aircraft type designator, e.g. "B739".
    pub type_code: String,

    /// Visual model title, e.g. "FSLTL_FAIB_B739_DAL-Delta_WL".
    pub model_name: String,

    /// Raw livery name from the simulator enumeration, e.g.
    /// "B777_300ER_UNITEDAIRLINES". Never exported.
    pub livery_name: String,

    /// Airline portion extracted from the livery name, before mapping.
    pub asobo_airline: String,

    /// Type code portion extracted from the livery name, before mapping.
    pub asobo_type_code: String,
}

impl Livery {
    /// Builds a bare rule record. Used by the flattening transform and by
    /// sample data; provenance fields are left empty.
    pub fn rule(
        callsign_prefix: impl Into<String>,
        type_code: impl Into<String>,
        flight_number_range: impl Into<String>,
        model_name: impl Into<String>,
    ) -> Self {
        Self {
            callsign_prefix: callsign_prefix.into(),
            type_code: type_code.into(),
            flight_number_range: flight_number_range.into(),
            model_name: model_name.into(),
            ..Self::default()
        }
    }

    /// The matching key this record contributes to.
    pub fn key(&self) -> RuleKey {
        RuleKey {
            callsign_prefix: self.callsign_prefix.clone(),
            type_code: self.type_code.clone(),
            flight_number_range: self.flight_number_range.clone(),
        }
    }
}

/// Grouping key for the flattening transform: exact value equality on all
/// three fields, with empty strings equal to each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleKey {
    pub callsign_prefix: String,
    pub type_code: String,
    pub flight_number_range: String,
}

/// Output of the transform stage, ready for the load stage.
#[derive(Debug, Clone)]
pub struct ExportResult {
    /// One rule per distinct matching key, in first-appearance order.
    pub rules: Vec<Livery>,
    /// The rendered ModelMatchRuleSet document.
    pub xml: String,
}
