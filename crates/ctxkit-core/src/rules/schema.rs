//! Per-kind schema table and document construction
//!
//! Defaults (`version: 1`, `tags: []`) are applied before the schema check.
//! Every violation for a document is reported, not only the first.

use serde_yaml::Value;

use crate::errors::CtxError;
use crate::model::{
    Complexity, Document, DocumentKind, DocumentOrigin, DocumentStatus, Frontmatter,
};

pub const FIELD_ID: &str = "id";
pub const FIELD_KIND: &str = "kind";
pub const FIELD_STATUS: &str = "status";
pub const FIELD_COMPLEXITY: &str = "complexity";
pub const FIELD_VERSION: &str = "version";
pub const FIELD_TAGS: &str = "tags";
pub const FIELD_REFERENCES: &str = "references";

const DEFAULT_VERSION: u64 = 1;

/// Schema entry for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindSchema {
    pub required: &'static [&'static str],
    pub status_enum: bool,
    pub complexity_enum: bool,
}

const SPEC_SCHEMA: KindSchema = KindSchema {
    required: &[FIELD_ID, FIELD_KIND, FIELD_STATUS, FIELD_COMPLEXITY],
    status_enum: true,
    complexity_enum: true,
};

const RULE_SCHEMA: KindSchema = KindSchema {
    required: &[FIELD_ID, FIELD_KIND, FIELD_VERSION],
    status_enum: false,
    complexity_enum: false,
};

const DEFAULT_SCHEMA: KindSchema = KindSchema {
    required: &[FIELD_ID, FIELD_KIND],
    status_enum: false,
    complexity_enum: false,
};

/// Look up the schema for a kind; unknown kinds get the minimal default
pub fn schema_for(kind: Option<&DocumentKind>) -> KindSchema {
    match kind {
        Some(DocumentKind::Spec) => SPEC_SCHEMA,
        Some(DocumentKind::Rule) => RULE_SCHEMA,
        _ => DEFAULT_SCHEMA,
    }
}

/// Read `version`, defaulting to 1
///
/// # Errors
///
/// Reason string when the value is not a positive integer.
pub fn parse_version(value: Option<&Value>) -> Result<u64, String> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(DEFAULT_VERSION),
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(_) => None,
    };
    match parsed {
        Some(v) if v > 0 => Ok(v),
        _ => Err("must be a positive integer".to_string()),
    }
}

/// Build an indexable document from a parsed header
///
/// Returns the document (when its id and kind can be determined) together
/// with every schema violation found. A document with violations is still
/// returned so reference checks can see it; callers decide whether the
/// violations block further work.
pub fn build_document(
    path: &str,
    origin: &DocumentOrigin,
    frontmatter: &Frontmatter,
    checksum: String,
) -> (Option<Document>, Vec<CtxError>) {
    let mut errors = Vec::new();
    let schema_err = |field: &str, reason: &str| CtxError::Schema {
        path: path.to_string(),
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let kind = frontmatter.scalar(FIELD_KIND).map(DocumentKind::from);
    let declared_id = frontmatter.scalar(FIELD_ID);
    let status = frontmatter.scalar(FIELD_STATUS);
    let complexity = frontmatter.scalar(FIELD_COMPLEXITY);

    let schema = schema_for(kind.as_ref());

    // only kinds that require `version` validate it; elsewhere it is opaque
    let version = match parse_version(frontmatter.get(FIELD_VERSION)) {
        Ok(v) => v,
        Err(reason) => {
            if schema.required.contains(&FIELD_VERSION) {
                errors.push(schema_err(FIELD_VERSION, &reason));
            }
            DEFAULT_VERSION
        }
    };

    for field in schema.required {
        let present = match *field {
            FIELD_ID => declared_id.is_some(),
            FIELD_KIND => kind.is_some(),
            FIELD_STATUS => status.is_some(),
            FIELD_COMPLEXITY => complexity.is_some(),
            // defaulted before the check
            FIELD_VERSION => true,
            other => frontmatter.contains_key(other),
        };
        if !present {
            errors.push(schema_err(field, "required field missing"));
        }
    }

    if schema.status_enum {
        if let Some(s) = &status {
            if s.parse::<DocumentStatus>().is_err() {
                errors.push(schema_err(
                    FIELD_STATUS,
                    &format!("'{}' must be one of active, historical, obsolete", s),
                ));
            }
        }
    }
    if schema.complexity_enum {
        if let Some(c) = &complexity {
            if c.parse::<Complexity>().is_err() {
                errors.push(schema_err(
                    FIELD_COMPLEXITY,
                    &format!("'{}' must be one of trivial, normal, critical", c),
                ));
            }
        }
    }

    let (id, task) = match origin {
        DocumentOrigin::Rule => (declared_id, None),
        DocumentOrigin::Task { task, role } => (Some(role.document_id(task)), Some(task.clone())),
    };

    let (Some(id), Some(kind)) = (id, kind) else {
        return (None, errors);
    };

    let doc = Document {
        id,
        kind,
        path: path.to_string(),
        task,
        version,
        status,
        complexity,
        tags: frontmatter.string_list(FIELD_TAGS),
        references: frontmatter.string_list(FIELD_REFERENCES),
        checksum,
    };
    (Some(doc), errors)
}
