/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the API layer and the UI layer.

use serde::Deserialize;
use std::fmt;

/// A product line offered for download (compiled into the catalog)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRef {
    /// Identifier sent to the API (e.g., "ws-windows")
    pub id: &'static str,
    /// Human readable name shown in the product picker
    pub display_name: &'static str,
    /// Manifest document the server resolves this product from
    pub manifest_file: &'static str,
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

/// One selectable version of a product, as returned by the version list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectableVersion {
    /// Client-local key, unique within one product's list
    #[serde(rename = "idForClientSelection")]
    pub selection_key: String,
    /// Label shown in the version picker
    #[serde(rename = "displayVersion")]
    pub display_label: String,
    #[serde(rename = "version")]
    pub version_string: String,
    #[serde(rename = "build")]
    pub build_id: String,
    #[serde(rename = "platformOrArch")]
    pub platform_or_arch: String,
    /// Path of the version's compressed manifest on the update server
    #[serde(rename = "gzFilePath")]
    pub manifest_path: String,
}

impl fmt::Display for SelectableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label)
    }
}

/// One downloadable artifact of a resolved version
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadableItem {
    pub name: String,
    pub path_fragment: String,
    pub final_file_name: String,
    pub checksum_type: Option<String>,
    pub checksum_value: Option<String>,
}

impl DownloadableItem {
    /// Checksum as `(type, value)`, only when both halves are present
    pub fn checksum(&self) -> Option<(&str, &str)> {
        match (self.checksum_type.as_deref(), self.checksum_value.as_deref()) {
            (Some(kind), Some(value)) if !kind.is_empty() && !value.is_empty() => {
                Some((kind, value))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_uses_wire_names() {
        let json = r#"{
            "idForClientSelection": "17.6.1-24319023-windows",
            "displayVersion": "17.6.1 (24319023)",
            "version": "17.6.1",
            "build": "24319023",
            "platformOrArch": "windows",
            "gzFilePath": "ws/17.6.1/24319023/windows/core/metadata.xml.gz"
        }"#;

        let version: SelectableVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.selection_key, "17.6.1-24319023-windows");
        assert_eq!(version.build_id, "24319023");
        assert_eq!(version.to_string(), "17.6.1 (24319023)");
    }

    #[test]
    fn test_checksum_requires_both_fields() {
        let mut item: DownloadableItem = serde_json::from_str(
            r#"{"name": "Installer", "pathFragment": "ws/", "finalFileName": "setup.exe"}"#,
        )
        .unwrap();
        assert_eq!(item.checksum(), None);

        item.checksum_type = Some("sha256".to_string());
        assert_eq!(item.checksum(), None);

        item.checksum_value = Some("abc123".to_string());
        assert_eq!(item.checksum(), Some(("sha256", "abc123")));
    }
}
