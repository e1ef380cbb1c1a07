use crate::domain::model::{Livery, RuleKey};
use std::collections::HashMap;

/// Separator used when several model names share one matching key.
pub const MODEL_NAME_SEPARATOR: &str = "//";

/// Flattens a working list of liveries into the minimal rule set for export.
///
/// Records sharing a `(callsign_prefix, type_code, flight_number_range)` key
/// are combined into one record whose `model_name` is the `//`-join of the
/// members' model names, keeping their relative input order. Output records
/// appear in first-occurrence order of their key. Duplicate input records
/// contribute duplicate segments. The input is not modified.
pub fn flatten(liveries: &[Livery]) -> Vec<Livery> {
    let mut groups: Vec<(RuleKey, Vec<&str>)> = Vec::new();
    let mut index: HashMap<RuleKey, usize> = HashMap::new();

    for livery in liveries {
        let key = livery.key();
        match index.get(&key) {
            Some(&at) => groups[at].1.push(&livery.model_name),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![&livery.model_name]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, models)| {
            Livery::rule(
                key.callsign_prefix,
                key.type_code,
                key.flight_number_range,
                models.join(MODEL_NAME_SEPARATOR),
            )
        })
        .collect()
}
