//! Structured header extraction
//!
//! A document starts with a `---` line, a YAML mapping, and a closing `---`
//! line. Everything after the closing delimiter is prose and never inspected.

use crate::errors::CtxError;
use serde_yaml::{Mapping, Value};

const DELIMITER: &str = "---";

/// Parsed header mapping with typed accessors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: Mapping,
}

impl Frontmatter {
    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Scalar field coerced to a trimmed string
    ///
    /// Strings, numbers and booleans are accepted; null, empty strings and
    /// composite values read as absent.
    pub fn scalar(&self, key: &str) -> Option<String> {
        self.get(key).and_then(scalar_to_string)
    }

    /// List field; a single scalar is read as a one-element list
    pub fn string_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
            Some(other) => scalar_to_string(other).into_iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Split raw content into (header, body)
///
/// Returns a reason string when the delimiters are missing.
pub fn split_frontmatter(content: &str) -> Result<(&str, &str), String> {
    let content = content.trim_start();
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().unwrap_or("");
    if first.trim_end() != DELIMITER {
        return Err("missing opening frontmatter delimiter ---".to_string());
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((header, body));
        }
        offset += line.len();
    }

    Err("missing closing frontmatter delimiter ---".to_string())
}

/// Parse the structured header of a document
///
/// `path` is only used to attribute errors.
///
/// # Errors
///
/// `CtxError::Parse` when the file is not UTF-8, the delimiters are missing,
/// the YAML is malformed, or the header is not a mapping.
pub fn parse_frontmatter(path: &str, bytes: &[u8]) -> Result<Frontmatter, CtxError> {
    let parse_err = |reason: String| CtxError::Parse {
        path: path.to_string(),
        reason,
    };

    let content = std::str::from_utf8(bytes)
        .map_err(|e| parse_err(format!("file is not valid UTF-8: {}", e)))?;
    let (header, _body) = split_frontmatter(content).map_err(parse_err)?;

    if header.trim().is_empty() {
        return Ok(Frontmatter::default());
    }

    let value: Value = serde_yaml::from_str(header)
        .map_err(|e| parse_err(format!("invalid YAML in frontmatter: {}", e)))?;

    match value {
        Value::Mapping(fields) => Ok(Frontmatter { fields }),
        Value::Null => Ok(Frontmatter::default()),
        _ => Err(parse_err("frontmatter must be a YAML mapping".to_string())),
    }
}
