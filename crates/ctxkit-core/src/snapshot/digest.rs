//! Checksum computation for documents and manifests.
//!
//! ## Checksum Types
//!
//! - **Document checksum**: `sha256:<hex>` of the normalized file bytes
//! - **Root checksum**: `sha256:<hex>` over the concatenated document
//!   checksums of the eligible subset, in byte-wise id order
//!
//! ## Normalization
//!
//! `\r\n` and lone `\r` become `\n`, then leading and trailing ASCII
//! whitespace is stripped. Checkouts that differ only in line endings hash
//! identically.
//!
//! ## Eligibility
//!
//! Rule documents always count toward the root checksum. Task documents
//! (the spec included) count only while their task's spec is `active`.

use sha2::{Digest, Sha256};

use crate::index::DocumentIndex;
use crate::model::{Document, DocumentKind};

pub const CHECKSUM_PREFIX: &str = "sha256:";

/// Normalize raw file bytes for hashing.
pub fn normalize_content(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut iter = bytes.iter().copied().peekable();
    while let Some(b) = iter.next() {
        if b == b'\r' {
            if iter.peek() == Some(&b'\n') {
                iter.next();
            }
            out.push(b'\n');
        } else {
            out.push(b);
        }
    }

    let start = out
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(out.len());
    let end = out
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    out[start..end].to_vec()
}

/// Compute a document checksum from raw file bytes.
///
/// ## Example
///
/// ```
/// use ctxkit_core::snapshot::digest::document_checksum;
///
/// assert_eq!(document_checksum(b"a\r\nb\n"), document_checksum(b"a\nb"));
/// assert!(document_checksum(b"x").starts_with("sha256:"));
/// ```
pub fn document_checksum(bytes: &[u8]) -> String {
    format!("{}{}", CHECKSUM_PREFIX, hash_bytes(&normalize_content(bytes)))
}

/// Whether a document counts toward the root checksum.
pub fn is_eligible(doc: &Document, index: &DocumentIndex) -> bool {
    if doc.kind == DocumentKind::Rule {
        return true;
    }
    match &doc.task {
        Some(task) => index.task_spec(task).is_some_and(Document::is_active),
        None => false,
    }
}

/// Eligible documents in id order.
pub fn eligible_documents(index: &DocumentIndex) -> Vec<&Document> {
    index.iter().filter(|doc| is_eligible(doc, index)).collect()
}

/// Compute the aggregated root checksum.
///
/// Any content change, addition or removal inside the eligible subset
/// changes the result; documents outside it never do.
pub fn compute_root_checksum(index: &DocumentIndex) -> String {
    let mut hasher = Sha256::new();
    for doc in eligible_documents(index) {
        hasher.update(doc.checksum.as_bytes());
    }
    format!("{}{}", CHECKSUM_PREFIX, hex::encode(hasher.finalize()))
}

/// Hash bytes using SHA256, hex-encoded.
fn hash_bytes(input: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}
