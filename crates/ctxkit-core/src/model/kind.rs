//! Document kinds, status/complexity domains and task roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a document, as declared in its frontmatter.
///
/// The set is open: unknown kinds are preserved verbatim in `Other` and get
/// the minimal default schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DocumentKind {
    Spec,
    Rule,
    Context,
    Plan,
    Implementation,
    Review,
    TestsReview,
    Other(String),
}

impl DocumentKind {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentKind::Spec => "spec",
            DocumentKind::Rule => "rule",
            DocumentKind::Context => "context",
            DocumentKind::Plan => "plan",
            DocumentKind::Implementation => "implementation",
            DocumentKind::Review => "review",
            DocumentKind::TestsReview => "tests-review",
            DocumentKind::Other(s) => s,
        }
    }
}

impl From<&str> for DocumentKind {
    fn from(s: &str) -> Self {
        match s {
            "spec" => DocumentKind::Spec,
            "rule" => DocumentKind::Rule,
            "context" => DocumentKind::Context,
            "plan" => DocumentKind::Plan,
            "implementation" => DocumentKind::Implementation,
            "review" => DocumentKind::Review,
            "tests-review" => DocumentKind::TestsReview,
            other => DocumentKind::Other(other.to_string()),
        }
    }
}

impl From<String> for DocumentKind {
    fn from(s: String) -> Self {
        DocumentKind::from(s.as_str())
    }
}

impl From<DocumentKind> for String {
    fn from(kind: DocumentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Active,
    Historical,
    Obsolete,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 3] = [
        DocumentStatus::Active,
        DocumentStatus::Historical,
        DocumentStatus::Obsolete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Active => "active",
            DocumentStatus::Historical => "historical",
            DocumentStatus::Obsolete => "obsolete",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentStatus::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown status '{}'", s))
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task complexity; drives the required-file set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Trivial,
    Normal,
    Critical,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Trivial, Complexity::Normal, Complexity::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Trivial => "trivial",
            Complexity::Normal => "normal",
            Complexity::Critical => "critical",
        }
    }

    /// Role files a task of this complexity must contain
    pub fn required_roles(&self) -> &'static [TaskRole] {
        match self {
            Complexity::Trivial => &[TaskRole::Spec, TaskRole::Implementation],
            Complexity::Normal => &[
                TaskRole::Spec,
                TaskRole::Plan,
                TaskRole::Implementation,
                TaskRole::TestsReview,
            ],
            Complexity::Critical => &[
                TaskRole::Spec,
                TaskRole::Context,
                TaskRole::Plan,
                TaskRole::Implementation,
                TaskRole::Review,
                TaskRole::TestsReview,
            ],
        }
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| format!("unknown complexity '{}'", s))
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named role file inside a task directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskRole {
    /// Requirement
    Spec,
    /// Constraints
    Context,
    /// Strategy
    Plan,
    /// Implementation record
    Implementation,
    /// Audit
    Review,
    /// Evidence of testing
    TestsReview,
}

impl TaskRole {
    pub const ALL: [TaskRole; 6] = [
        TaskRole::Spec,
        TaskRole::Context,
        TaskRole::Plan,
        TaskRole::Implementation,
        TaskRole::Review,
        TaskRole::TestsReview,
    ];

    /// Role name used in derived ids (`{task}-{role}`)
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskRole::Spec => "spec",
            TaskRole::Context => "context",
            TaskRole::Plan => "plan",
            TaskRole::Implementation => "implementation",
            TaskRole::Review => "review",
            TaskRole::TestsReview => "tests-review",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            TaskRole::Spec => "spec.md",
            TaskRole::Context => "context.md",
            TaskRole::Plan => "plan.md",
            TaskRole::Implementation => "implementation.md",
            TaskRole::Review => "review.md",
            TaskRole::TestsReview => "tests-review.md",
        }
    }

    pub fn from_file_name(name: &str) -> Option<TaskRole> {
        TaskRole::ALL.into_iter().find(|r| r.file_name() == name)
    }

    /// Derive the document id for this role within a task
    pub fn document_id(&self, task_id: &str) -> String {
        format!("{}-{}", task_id, self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip_known_and_unknown() {
        assert_eq!(DocumentKind::from("tests-review"), DocumentKind::TestsReview);
        assert_eq!(
            DocumentKind::from("adr"),
            DocumentKind::Other("adr".to_string())
        );
        assert_eq!(DocumentKind::from("adr").as_str(), "adr");
    }

    #[test]
    fn test_kind_serializes_as_string() {
        let json = serde_json::to_string(&DocumentKind::Rule).unwrap();
        assert_eq!(json, "\"rule\"");
        let back: DocumentKind = serde_json::from_str("\"glossary\"").unwrap();
        assert_eq!(back, DocumentKind::Other("glossary".to_string()));
    }

    #[test]
    fn test_status_and_complexity_parse() {
        assert_eq!("active".parse::<DocumentStatus>(), Ok(DocumentStatus::Active));
        assert!("draft".parse::<DocumentStatus>().is_err());
        assert_eq!("critical".parse::<Complexity>(), Ok(Complexity::Critical));
        assert!("huge".parse::<Complexity>().is_err());
    }

    #[test]
    fn test_required_roles_grow_with_complexity() {
        assert_eq!(Complexity::Trivial.required_roles().len(), 2);
        assert_eq!(Complexity::Normal.required_roles().len(), 4);
        assert_eq!(Complexity::Critical.required_roles().len(), 6);
        assert!(Complexity::Trivial
            .required_roles()
            .contains(&TaskRole::Implementation));
    }

    #[test]
    fn test_task_role_ids() {
        assert_eq!(TaskRole::Spec.document_id("TASK-123"), "TASK-123-spec");
        assert_eq!(
            TaskRole::from_file_name("tests-review.md"),
            Some(TaskRole::TestsReview)
        );
        assert_eq!(TaskRole::from_file_name("notes.md"), None);
    }
}
