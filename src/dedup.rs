use indexmap::IndexSet;

use crate::canvas::schema::QuestionRecord;

/// Removes duplicate records, keeping the first occurrence of each and
/// preserving input order otherwise.
pub fn deduplicate(records: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    records
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
