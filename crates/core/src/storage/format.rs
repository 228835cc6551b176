use serde_json::Value;

use crate::errors::CoreError;

/// One saved calculation: the balance history it produced.
pub type HistoryRecord = Vec<f64>;

/// Everything stored in a history document, oldest record first.
pub type HistoryCollection = Vec<HistoryRecord>;

/// Serialize a collection to the on-disk document.
///
/// Layout: a pretty-printed JSON array of arrays of numbers (2-space indent).
/// ```text
/// [
///   [1000.0, 1010.0, ...],
///   [0.0, 100.42, ...]
/// ]
/// ```
///
/// JSON has no encoding for NaN or infinity, so those are rejected rather
/// than silently written as `null`.
pub fn write_document(collection: &[HistoryRecord]) -> Result<Vec<u8>, CoreError> {
    for (i, record) in collection.iter().enumerate() {
        if let Some(j) = record.iter().position(|v| !v.is_finite()) {
            return Err(CoreError::Serialization(format!(
                "record {i}, entry {j} is not a finite number"
            )));
        }
    }

    serde_json::to_vec_pretty(collection)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize history: {e}")))
}

/// Parse a history document.
///
/// Malformed JSON is a `Deserialization` error; well-formed JSON of the wrong
/// shape is an `InvalidFileFormat` error naming the offending position.
pub fn read_document(data: &[u8]) -> Result<HistoryCollection, CoreError> {
    let doc: Value = serde_json::from_slice(data)?;

    let records = doc.as_array().ok_or_else(|| {
        CoreError::InvalidFileFormat("expected a JSON array of histories".into())
    })?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let entries = record.as_array().ok_or_else(|| {
                CoreError::InvalidFileFormat(format!("record {i} is not an array"))
            })?;
            entries
                .iter()
                .enumerate()
                .map(|(j, entry)| {
                    entry.as_f64().ok_or_else(|| {
                        CoreError::InvalidFileFormat(format!(
                            "record {i}, entry {j} is not a number"
                        ))
                    })
                })
                .collect::<Result<HistoryRecord, CoreError>>()
        })
        .collect()
}
