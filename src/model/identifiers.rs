//! Core identifier newtypes with smart constructors.
//!
//! Document identifiers validate non-empty strings at construction time.
//! View and tab identifiers are normally handed out by their owning
//! containers; `new` exists for policies and tests that build views directly.

use std::fmt;

/// Identity of an open document (usually a path or URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(String);

impl DocumentId {
    /// Smart constructor: validates non-empty document identity
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidDocumentId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidDocumentId::Empty);
        }
        Ok(Self(raw))
    }

    /// The identity as given at construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used for tab titles.
    ///
    /// Falls back to the whole identity when it has no separators or ends
    /// with one.
    pub fn file_name(&self) -> &str {
        match self.0.rsplit(['/', '\\']).next() {
            Some(name) if !name.is_empty() => name,
            _ => &self.0,
        }
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editor view identifier, allocated by the view registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    /// Wrap a raw numeric id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tab identifier, allocated by the tab container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    /// Wrap a raw numeric id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Error Types =====

/// Rejected document identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDocumentId {
    /// Empty string.
    #[error("Document ID cannot be empty")]
    Empty,
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_accepts_path() {
        let id = DocumentId::new("src/main.rs");
        assert!(id.is_ok(), "Path should be accepted");
    }

    #[test]
    fn document_id_rejects_empty_string() {
        let id = DocumentId::new("");
        assert!(
            matches!(id, Err(InvalidDocumentId::Empty)),
            "Empty string should return InvalidDocumentId::Empty"
        );
    }

    #[test]
    fn document_id_as_str_returns_original() {
        let id = DocumentId::new("/home/user/notes.txt").expect("valid id");
        assert_eq!(id.as_str(), "/home/user/notes.txt");
        assert_eq!(id.to_string(), "/home/user/notes.txt");
    }

    #[test]
    fn file_name_takes_last_segment() {
        let id = DocumentId::new("src/state/view_manager.rs").expect("valid id");
        assert_eq!(id.file_name(), "view_manager.rs");
    }

    #[test]
    fn file_name_handles_windows_separators() {
        let id = DocumentId::new(r"C:\work\todo.md").expect("valid id");
        assert_eq!(id.file_name(), "todo.md");
    }

    #[test]
    fn file_name_without_separator_is_whole_id() {
        let id = DocumentId::new("scratch").expect("valid id");
        assert_eq!(id.file_name(), "scratch");
    }

    #[test]
    fn file_name_with_trailing_separator_is_whole_id() {
        let id = DocumentId::new("dir/").expect("valid id");
        assert_eq!(id.file_name(), "dir/");
    }

    #[test]
    fn view_ids_order_by_allocation() {
        assert!(ViewId::new(1) < ViewId::new(2));
        assert_eq!(ViewId::new(7).get(), 7);
        assert_eq!(TabId::new(3).to_string(), "3");
    }
}
