//! Response envelopes returned by the REST API.

use serde::{Deserialize, Serialize};

/// Envelope returned by the query endpoint.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult<T> {
    pub total_size: i64,
    pub done: bool,
    pub records: Vec<T>,
}
