use std::collections::HashSet;

use crate::record::Intimation;

/// Keep the first record of every `(recipient, case number, issuance date)`.
pub fn dedup_intimations(intimations: Vec<Intimation>) -> Vec<Intimation> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::new();
        intimations.iter().map(|i| seen.insert(i.key())).collect()
    };
    intimations
        .into_iter()
        .zip(keep)
        .filter_map(|(intimation, first)| first.then_some(intimation))
        .collect()
}
