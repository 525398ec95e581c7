// Set difference between the static and registered method sets

use super::HandlerRecord;
use std::collections::HashSet;

/// Return every element of `static_set` whose `(class, method)` key does not
/// appear anywhere in `registered_set`.
///
/// A true set difference: duplicate keys in either input collapse, and the
/// result preserves the relative order of `static_set`.
pub fn diff(static_set: &[HandlerRecord], registered_set: &[HandlerRecord]) -> Vec<HandlerRecord> {
    let registered_keys: HashSet<(&str, &str)> =
        registered_set.iter().map(|r| r.key()).collect();

    let mut seen: HashSet<(String, String)> = HashSet::new();
    static_set
        .iter()
        .filter(|record| {
            !registered_keys.contains(&record.key())
                && seen.insert((record.class.clone(), record.method.clone()))
        })
        .cloned()
        .collect()
}
