pub mod document;
pub mod frontmatter;
pub mod kind;
pub mod relation;

pub use document::{Document, DocumentOrigin};
pub use frontmatter::{parse_frontmatter, Frontmatter};
pub use kind::{Complexity, DocumentKind, DocumentStatus, TaskRole};
pub use relation::{Relation, RelationType};
