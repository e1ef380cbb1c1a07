/// The two halves of a raw livery name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveryNameParts {
    pub asobo_type_code: String,
    pub asobo_airline: String,
}

/// Splits a livery name like "B777_300ER_UNITEDAIRLINES" into its Asobo type
/// code and airline.
///
/// An "_AIRLINES" token is dropped first, then the airline is everything
/// after the last underscore and the type code everything before it. Livery
/// names also spell the suffix without a separator ("UNITEDAIRLINES"), so a
/// trailing "AIRLINES" is trimmed from the airline half as well. Names
/// without an underscore carry no extractable information.
pub fn split_livery_name(livery_name: &str) -> Option<LiveryNameParts> {
    let cleaned = livery_name.replace("_AIRLINES", "");
    let last_underscore = cleaned.rfind('_')?;

    Some(LiveryNameParts {
        asobo_type_code: cleaned[..last_underscore].to_string(),
        asobo_airline: cleaned[last_underscore + 1..]
            .trim_end_matches("AIRLINES")
            .to_string(),
    })
}
