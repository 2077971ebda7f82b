use crate::types::VersionHistory;

/// Combines the target and central histories.
///
/// Target entries keep their order; central-only versions are appended in
/// central order. A version present in both keeps the earlier timestamp.
pub fn merge_histories(target: VersionHistory, central: VersionHistory) -> VersionHistory {
    let mut merged = target;

    for (version, central_timestamp) in central {
        merged
            .entry(version)
            .and_modify(|timestamp| *timestamp = (*timestamp).min(central_timestamp))
            .or_insert(central_timestamp);
    }

    merged
}
