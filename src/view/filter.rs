//! Free-text search over credential records.

use crate::record::CredentialRecord;

/// Keeps records whose resource name or username contains `search`,
/// ignoring case. An empty search keeps everything.
///
/// Source order is preserved and the input is never modified.
pub fn filter_records<'a, I>(records: I, search: &str) -> Vec<&'a CredentialRecord>
where
    I: IntoIterator<Item = &'a CredentialRecord>,
{
    let needle = search.to_lowercase();
    records
        .into_iter()
        .filter(|r| r.matches_lowercase(&needle))
        .collect()
}
