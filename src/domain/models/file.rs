//! Uploaded File Model

use std::path::Path;

use uuid::Uuid;

use crate::shared::errors::DomainError;

/// Location of a stored upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub url: String,
    pub name: String,
}

/// Extensions accepted for upload. Uploads are served from the API origin, so
/// anything a browser would render as active content (html, svg, xml, js) is left out.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "csv", "txt", "png", "jpg", "jpeg",
    "gif", "webp", "zip",
];

/// Generate the stored name for an upload: a fresh UUID plus the original extension
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` when the extension is not in `ALLOWED_EXTENSIONS`.
pub fn generate_file_name(original: &str) -> Result<String, DomainError> {
    let id = Uuid::new_v4().simple().to_string();
    match Path::new(original).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => {
            let ext = ext.to_ascii_lowercase();
            if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
                return Err(DomainError::InvalidValue {
                    field: "file",
                    reason: format!("files of type '.{ext}' are not accepted"),
                });
            }
            Ok(format!("{id}.{ext}"))
        }
        _ => Ok(id),
    }
}

/// Ensure a client supplied stored name cannot escape the upload directory
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` when the name is empty or contains a
/// path separator or a parent reference.
pub fn validate_file_name(name: &str) -> Result<(), DomainError> {
    let invalid = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains("..")
        || name.contains('\0');
    if invalid {
        return Err(DomainError::InvalidValue {
            field: "name",
            reason: format!("'{name}' is not a valid file name"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_name_keeps_extension() {
        let name = generate_file_name("Contract Scan.PDF").unwrap();
        assert!(name.ends_with(".pdf"));
        assert_eq!(name.len(), 32 + 4);
    }

    #[test]
    fn test_generated_name_without_extension() {
        let name = generate_file_name("README").unwrap();
        assert_eq!(name.len(), 32);
        assert!(!name.contains('.'));
    }

    #[test]
    fn test_generated_names_are_unique() {
        assert_ne!(
            generate_file_name("a.png").unwrap(),
            generate_file_name("a.png").unwrap()
        );
    }

    #[test]
    fn test_rejects_extensions_browsers_would_render() {
        for name in ["page.html", "page.HTM", "logo.svg", "feed.xml", "app.js", "x.xhtml"] {
            assert!(generate_file_name(name).is_err(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("0f8fad5bd9cb469fa16570867728950e.png").is_ok());
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name("../etc/passwd").is_err());
        assert!(validate_file_name("a/b.png").is_err());
        assert!(validate_file_name("a\\b.png").is_err());
    }
}
