//! SPARQL JSON result documents (`application/sparql-results+json`)

use crate::error::ExecutorError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Media type requested from the graph store
pub const SPARQL_RESULTS_JSON: &str = "application/sparql-results+json";

/// One bound value inside a result row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingValue {
    /// `uri`, `literal`, `bnode`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(rename = "xml:lang", default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl BindingValue {
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: Some("literal".to_string()),
            value: value.into(),
            datatype: None,
            lang: None,
        }
    }
}

/// Variable name to value for one solution; unbound variables are absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BindingRow(HashMap<String, BindingValue>);

impl BindingRow {
    /// Lexical value bound to `variable`
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.0.get(variable).map(|b| b.value.as_str())
    }

    /// Full binding for `variable`
    pub fn binding(&self, variable: &str) -> Option<&BindingValue> {
        self.0.get(variable)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a row of plain literals
    pub fn from_literals<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(k, v)| (k.into(), BindingValue::literal(v)))
            .collect()
    }
}

impl FromIterator<(String, BindingValue)> for BindingRow {
    fn from_iter<T: IntoIterator<Item = (String, BindingValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// All rows returned by one query
pub type BindingRowSet = Vec<BindingRow>;

/// Decode a SPARQL JSON result document into rows
///
/// The document must be a JSON object with a `results.bindings` array whose
/// elements are objects of `{ "value": ... }` bindings.
pub fn parse_sparql_results(body: &[u8]) -> Result<BindingRowSet, ExecutorError> {
    let document: Value = serde_json::from_slice(body)
        .map_err(|e| ExecutorError::protocol(format!("response is not valid JSON: {e}")))?;

    let bindings = document
        .get("results")
        .and_then(|results| results.get("bindings"))
        .and_then(Value::as_array)
        .ok_or_else(|| ExecutorError::protocol("response has no results.bindings array"))?;

    bindings
        .iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value::<BindingRow>(row.clone()).map_err(|e| {
                ExecutorError::protocol(format!("malformed binding row {index}: {e}"))
            })
        })
        .collect()
}
