//! Decoding of the `/run_simulation` response body.

use crate::types::{Aggregate, PeriodRecord};
use crate::{Granularity, ResultsError, ResultsResult};
use serde_json::Value;

/// Parse a run payload into an [`Aggregate`].
///
/// The body must be a JSON object with at least one granularity key. Keys
/// naming a known granularity must hold an array of period records; any other
/// key is skipped.
pub fn parse_aggregate(body: &[u8]) -> ResultsResult<Aggregate> {
    let value: Value = serde_json::from_slice(body)?;
    let object = match value {
        Value::Object(map) => map,
        other => {
            return Err(ResultsError::NotAnObject {
                found: json_kind(&other),
            });
        }
    };

    let mut aggregate = Aggregate::new();
    for (key, series) in object {
        let Ok(granularity) = key.parse::<Granularity>() else {
            tracing::debug!(key = %key, "ignoring unknown payload key");
            continue;
        };
        let records: Vec<PeriodRecord> = serde_json::from_value(series)
            .map_err(|source| ResultsError::InvalidSeries {
                granularity,
                source,
            })?;
        aggregate.insert(granularity, records);
    }

    if aggregate.is_empty() {
        return Err(ResultsError::NoSeries);
    }
    Ok(aggregate)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
