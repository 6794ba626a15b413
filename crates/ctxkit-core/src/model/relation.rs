use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation type between two documents
///
/// Only `uses` is produced today. Unknown strings read from an existing
/// manifest are preserved in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    Uses,
    Other(String),
}

impl RelationType {
    pub fn as_str(&self) -> &str {
        match self {
            RelationType::Uses => "uses",
            RelationType::Other(s) => s,
        }
    }
}

impl From<String> for RelationType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "uses" => RelationType::Uses,
            _ => RelationType::Other(s),
        }
    }
}

impl From<RelationType> for String {
    fn from(t: RelationType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed edge derived from a document's `references`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub relation_type: RelationType,
}

impl Relation {
    pub fn uses(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation_type: RelationType::Uses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relation_serializes_type_field() {
        let rel = Relation::uses("TASK-1-spec", "rule-a");
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "uses");
    }

    #[test]
    fn test_unknown_relation_type_preserved() {
        let rel: Relation =
            serde_json::from_str(r#"{"from":"a","to":"b","type":"supersedes"}"#).unwrap();
        assert_eq!(
            rel.relation_type,
            RelationType::Other("supersedes".to_string())
        );
        assert_eq!(serde_json::to_value(&rel).unwrap()["type"], "supersedes");
    }
}
