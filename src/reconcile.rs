// Reconciliation — diff expanded remote variants against local sidecar records.

use std::collections::HashMap;

use crate::variant::CardVariant;

/// Return the remote variants missing from or stale in local storage.
///
/// A variant is included when its `(id, evolved, censored)` key is absent from
/// the local records, or when the stored record differs in any field (stat
/// errata, renamed craft, edited flavor text). Output preserves remote order.
pub fn diff(remote: &[CardVariant], local: Vec<CardVariant>) -> Vec<CardVariant> {
    let lookup: HashMap<(u32, bool, bool), CardVariant> =
        local.into_iter().map(|record| (record.key(), record)).collect();

    remote
        .iter()
        .filter(|variant| lookup.get(&variant.key()) != Some(*variant))
        .cloned()
        .collect()
}
