//! h5ai JSON listing types
//!
//! The server answers `GET {dir}?json=true` with
//! `{"children": [{"name": ..., "type": "dir"|"file", "href": ...}, ...]}`.
//! Decoding is lenient: a missing or malformed `children` array yields no
//! entries and missing fields become empty strings. Only a body that is not
//! a JSON object is an error.

use serde_json::{Map, Value};

use crate::error::H5aiError;

/// Kind of a listing entry, derived from the `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Any other `type` value (e.g. `"symlink"`), kept for diagnostics only.
    Unknown(String),
}

impl EntryKind {
    fn from_type(raw: String) -> Self {
        match raw.as_str() {
            "dir" => Self::Directory,
            "file" => Self::File,
            _ => Self::Unknown(raw),
        }
    }
}

/// One child of an h5ai directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub kind: EntryKind,
    /// Link exactly as the server sent it, usually an encoded absolute path.
    pub link: String,
}

impl DirectoryEntry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    fn from_value(value: &Value) -> Self {
        let empty = Map::new();
        let obj = value.as_object().unwrap_or(&empty);
        Self {
            name: string_field(obj, "name"),
            kind: EntryKind::from_type(string_field(obj, "type")),
            link: string_field(obj, "href"),
        }
    }
}

/// Entries of one directory, in server order.
pub type ListingResult = Vec<DirectoryEntry>;

/// Decode a listing body. Invalid UTF-8 is a parse error.
pub fn parse_listing(body: impl AsRef<[u8]>) -> Result<ListingResult, H5aiError> {
    let root: Value = serde_json::from_slice(body.as_ref())?;
    let Value::Object(root) = root else {
        return Err(H5aiError::Parse("listing body is not a JSON object".to_string()));
    };

    let entries = root
        .get("children")
        .and_then(Value::as_array)
        .map(|children| children.iter().map(DirectoryEntry::from_value).collect())
        .unwrap_or_default();

    Ok(entries)
}

/// Read a field as text. Numbers and booleans are rendered, anything else is empty.
fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    match obj.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
