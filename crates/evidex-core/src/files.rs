//! Stored-file descriptors.
//!
//! Pass-through data shape from the file-storage service. The shell never
//! transforms or validates these; they ride on the render context for
//! descendant panels to display.

use serde::{Deserialize, Serialize};

/// Descriptor for a file held by the storage service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: String,
    pub name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub url: Option<String>,
}

/// Mock descriptors used until the storage client is wired in.
pub fn sample_files() -> Vec<StoredFile> {
    vec![
        StoredFile {
            id: uuid::Uuid::new_v4().to_string(),
            name: "soc2-access-review-q3.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 482_113,
            url: None,
        },
        StoredFile {
            id: uuid::Uuid::new_v4().to_string(),
            name: "vendor-risk-register.xlsx".to_string(),
            content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
                .to_string(),
            size_bytes: 91_540,
            url: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_files_have_unique_ids() {
        let files = sample_files();
        assert_eq!(files.len(), 2);
        assert_ne!(files[0].id, files[1].id);
    }

    #[test]
    fn test_descriptor_round_trips_through_json() {
        let file = &sample_files()[0];
        let json = serde_json::to_string(file).unwrap();
        let back: StoredFile = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, file.name);
        assert_eq!(back.size_bytes, file.size_bytes);
    }
}
