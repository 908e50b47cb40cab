//! File reference type returned by the Google AI file service.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A file stored in the Google AI file service, as returned by an upload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleAIFile {
    /// The resource name of the file (e.g. `files/abc123`).
    pub name: String,
    /// The display name of the file, normally echoing the uploaded name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// The MIME type of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// The size of the file in bytes. The service serializes this as either
    /// a JSON string or a JSON number; both are accepted.
    #[serde(default, deserialize_with = "deserialize_size_bytes")]
    pub size_bytes: i64,
}

fn deserialize_size_bytes<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct SizeBytesVisitor;

    impl Visitor<'_> for SizeBytesVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a byte count as an integer or a decimal string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::custom(format!("byte count {value} out of range")))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            value
                .parse()
                .map_err(|_| E::custom(format!("invalid byte count '{value}'")))
        }
    }

    deserializer.deserialize_any(SizeBytesVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_size_bytes_as_string() {
        let file: GoogleAIFile = serde_json::from_str(
            r#"{"name":"files/abc","displayName":"a.txt","mimeType":"text/plain","sizeBytes":"4"}"#,
        )
        .unwrap();
        assert_eq!(file.size_bytes, 4);
    }

    #[test]
    fn test_deserialize_size_bytes_as_number() {
        let file: GoogleAIFile = serde_json::from_str(
            r#"{"name":"files/abc","displayName":"a.txt","mimeType":"text/plain","sizeBytes":4}"#,
        )
        .unwrap();
        assert_eq!(file.size_bytes, 4);
    }

    #[test]
    fn test_string_and_number_sizes_agree() {
        let quoted: GoogleAIFile =
            serde_json::from_str(r#"{"name":"files/abc","sizeBytes":"2048"}"#).unwrap();
        let bare: GoogleAIFile =
            serde_json::from_str(r#"{"name":"files/abc","sizeBytes":2048}"#).unwrap();
        assert_eq!(quoted, bare);
    }

    #[test]
    fn test_deserialize_missing_size_defaults_to_zero() {
        let file: GoogleAIFile = serde_json::from_str(r#"{"name":"files/abc"}"#).unwrap();
        assert_eq!(file.size_bytes, 0);
        assert_eq!(file.display_name, None);
        assert_eq!(file.mime_type, None);
    }

    #[test]
    fn test_deserialize_invalid_size_string_rejected() {
        let result = serde_json::from_str::<GoogleAIFile>(
            r#"{"name":"files/abc","sizeBytes":"four"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_missing_name_rejected() {
        let result = serde_json::from_str::<GoogleAIFile>(r#"{"sizeBytes":"4"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_display_name_distinct_from_empty() {
        let absent: GoogleAIFile = serde_json::from_str(r#"{"name":"files/a"}"#).unwrap();
        let empty: GoogleAIFile =
            serde_json::from_str(r#"{"name":"files/a","displayName":""}"#).unwrap();
        assert_eq!(absent.display_name, None);
        assert_eq!(empty.display_name, Some(String::new()));
    }
}
