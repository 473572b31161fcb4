//! Conversions between string maps and [`KeyValuePair`] sequences.
//!
//! Maps have no wire representation of their own, so they travel as a
//! repeated `KeyValuePair` field. Entry order is whatever the map yields and
//! carries no meaning.

use std::collections::HashMap;

use crate::types::KeyValuePair;

/// One record per map entry, keys and values copied verbatim.
///
/// `None` and an empty map both produce an empty sequence.
pub fn to_key_value_pairs(map: Option<&HashMap<String, String>>) -> Vec<KeyValuePair> {
    map.map(|m| {
        m.iter()
            .map(|(k, v)| KeyValuePair::new(k.as_str(), v.as_str()))
            .collect()
    })
    .unwrap_or_default()
}

/// Inverse of [`to_key_value_pairs`]. If a key repeats, the last record wins.
pub fn from_key_value_pairs(pairs: &[KeyValuePair]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|p| (p.key.clone(), p.value.clone()))
        .collect()
}
