//! JSON export of the contact collection.
//!
//! The document is a pretty-printed JSON array of contact records using the
//! stored field names (`createdAt`, `twitterHandle`, ...).

use crate::error::Result;
use crate::models::Contact;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name offered for downloads
pub const EXPORT_FILE_NAME: &str = "contacts-export.json";

/// Render contacts as a pretty-printed JSON document.
pub fn contacts_to_json(contacts: &[Contact]) -> Result<String> {
    Ok(serde_json::to_string_pretty(contacts)?)
}

/// Write contacts to a JSON file, creating parent directories as needed.
///
/// # Errors
///
/// Returns an error if directory creation, file creation or writing fails.
pub fn write_contacts_json(contacts: &[Contact], file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    let file = File::create(file_path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, contacts)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(EXPORT_FILE_NAME);
        let contacts = vec![Contact::blank("a", 1), Contact::blank("b", 2)];

        write_contacts_json(&contacts, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Contact> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, contacts);
        assert!(text.contains("\"createdAt\": 1"));
    }

    #[test]
    fn test_empty_collection_is_empty_array() {
        assert_eq!(contacts_to_json(&[]).unwrap(), "[]");
    }
}
