use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::AppError;

/// Read a JSON document from `path`, or stdin when absent or `-`.
pub fn read_document(path: Option<&Path>) -> Result<Value, AppError> {
    let text = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!(bytes = text.len(), "read input document");
    Ok(serde_json::from_str(&text)?)
}

/// A document is either one record or an array of them.
pub fn records(document: Value) -> Result<Vec<Value>, AppError> {
    match document {
        Value::Array(items) => Ok(items),
        obj @ Value::Object(_) => Ok(vec![obj]),
        other => Err(AppError::InvalidInput(format!(
            "expected a JSON object or array of objects, got {}",
            json_type(&other)
        ))),
    }
}

/// One group together with the bulbs shown beneath it.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    pub group: Value,
    pub bulbs: Vec<Value>,
}

pub fn tree_entries(document: Value) -> Result<Vec<TreeEntry>, AppError> {
    records(document)?
        .into_iter()
        .enumerate()
        .map(|(index, mut entry)| {
            let group = entry
                .get_mut("group")
                .map(Value::take)
                .ok_or_else(|| {
                    AppError::InvalidInput(format!("tree entry {} has no \"group\"", index))
                })?;
            let bulbs = match entry.get_mut("bulbs").map(Value::take) {
                None | Some(Value::Null) => Vec::new(),
                Some(Value::Array(bulbs)) => bulbs,
                Some(_) => {
                    return Err(AppError::InvalidInput(format!(
                        "tree entry {} has a non-array \"bulbs\"",
                        index
                    )))
                }
            };
            Ok(TreeEntry { group, bulbs })
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
