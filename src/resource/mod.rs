//! Resource records parsed from configuration documents
//!
//! A **resource** is one YAML or JSON document. Only its top-level `kind` is interpreted;
//! the rest of the document is carried along untouched.

pub mod reader;

pub use reader::{FileMatcher, STREAM_LABEL, read_package, read_stream};

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::Result;

/// API versions whose `ResourceList` documents wrap the real resources in `items`
const RESOURCE_LIST_API_VERSIONS: &[&str] =
    &["config.kubernetes.io/v1", "config.kubernetes.io/v1alpha1"];

const RESOURCE_LIST_KIND: &str = "ResourceList";

/// One parsed configuration document
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRecord {
    kind: String,
    document: Value,
}

impl ResourceRecord {
    /// Build a record from a parsed document
    ///
    /// Numeric and boolean kinds are counted by their text. A missing, null or
    /// non-scalar `kind` yields an empty kind.
    pub fn new(document: Value) -> Self {
        let kind = match document.get("kind") {
            Some(Value::String(kind)) => kind.clone(),
            Some(Value::Number(kind)) => kind.to_string(),
            Some(Value::Bool(kind)) => kind.to_string(),
            _ => String::new(),
        };
        Self { kind, document }
    }

    /// Declared resource type
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The full parsed document
    pub fn document(&self) -> &Value {
        &self.document
    }
}

/// Parse a stream of `---` separated YAML documents
pub fn parse_yaml(content: &str) -> Result<Vec<ResourceRecord>> {
    let mut records = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document)?;
        push_document(value, &mut records);
    }
    Ok(records)
}

/// Parse a stream of concatenated JSON values
pub fn parse_json(content: &str) -> Result<Vec<ResourceRecord>> {
    let mut records = Vec::new();
    for value in serde_json::Deserializer::from_str(content).into_iter::<serde_json::Value>() {
        let value = serde_yaml::to_value(value?)?;
        push_document(value, &mut records);
    }
    Ok(records)
}

fn push_document(value: Value, records: &mut Vec<ResourceRecord>) {
    if value.is_null() {
        return;
    }

    if is_resource_list(&value) {
        if let Some(Value::Sequence(items)) = value.get("items") {
            records.extend(
                items
                    .iter()
                    .filter(|item| !item.is_null())
                    .cloned()
                    .map(ResourceRecord::new),
            );
        }
        return;
    }

    records.push(ResourceRecord::new(value));
}

fn is_resource_list(value: &Value) -> bool {
    let kind = value.get("kind").and_then(Value::as_str);
    let api_version = value.get("apiVersion").and_then(Value::as_str);
    kind == Some(RESOURCE_LIST_KIND)
        && api_version.is_some_and(|v| RESOURCE_LIST_API_VERSIONS.contains(&v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CountError;

    fn kinds(records: &[ResourceRecord]) -> Vec<&str> {
        records.iter().map(ResourceRecord::kind).collect()
    }

    #[test]
    fn test_parse_yaml_multiple_documents() {
        let records = parse_yaml(
            "kind: Deployment\nmetadata:\n  name: a\n---\nkind: Service\n---\nkind: Deployment\n",
        )
        .unwrap();
        assert_eq!(kinds(&records), vec!["Deployment", "Service", "Deployment"]);
    }

    #[test]
    fn test_missing_kind_is_empty() {
        let records = parse_yaml("metadata:\n  name: orphan\n").unwrap();
        assert_eq!(kinds(&records), vec![""]);
    }

    #[test]
    fn test_scalar_kind_uses_text() {
        let records = parse_yaml("kind: 42\n---\nkind: true\n").unwrap();
        assert_eq!(kinds(&records), vec!["42", "true"]);
    }

    #[test]
    fn test_null_or_collection_kind_is_empty() {
        let records =
            parse_yaml("kind: null\n---\nkind: [a, b]\n---\nkind:\n  name: x\n").unwrap();
        assert_eq!(kinds(&records), vec!["", "", ""]);
    }

    #[test]
    fn test_scalar_document_counts_with_empty_kind() {
        let records = parse_yaml("just a string\n").unwrap();
        assert_eq!(kinds(&records), vec![""]);
    }

    #[test]
    fn test_empty_documents_are_skipped() {
        assert!(parse_yaml("").unwrap().is_empty());
        let records = parse_yaml("---\nkind: A\n---\n---\n").unwrap();
        assert_eq!(kinds(&records), vec!["A"]);
    }

    #[test]
    fn test_document_content_is_preserved() {
        let records = parse_yaml("kind: ConfigMap\ndata:\n  key: value\n").unwrap();
        assert_eq!(
            records[0].document().get("data").and_then(|d| d.get("key")),
            Some(&Value::String("value".to_string()))
        );
    }

    #[test]
    fn test_malformed_yaml_fails() {
        let err = parse_yaml("kind: A\n---\nkind: [unclosed\n").unwrap_err();
        assert!(matches!(err, CountError::ResourceParseFailed { .. }));
    }

    #[test]
    fn test_json_flow_in_yaml_stream() {
        let records = parse_yaml("{\"kind\": \"Service\", \"apiVersion\": \"v1\"}\n").unwrap();
        assert_eq!(kinds(&records), vec!["Service"]);
    }

    #[test]
    fn test_parse_json_concatenated_values() {
        let records =
            parse_json("{\"kind\": \"Service\"}\n{\n\t\"kind\": \"Deployment\"\n}\n").unwrap();
        assert_eq!(kinds(&records), vec!["Service", "Deployment"]);
    }

    #[test]
    fn test_parse_json_malformed() {
        let err = parse_json("{\"kind\": ").unwrap_err();
        assert!(matches!(err, CountError::ResourceParseFailed { .. }));
    }

    #[test]
    fn test_resource_list_is_unwrapped() {
        let records = parse_yaml(
            r"
apiVersion: config.kubernetes.io/v1
kind: ResourceList
items:
- kind: Deployment
- kind: Service
- kind: Deployment
",
        )
        .unwrap();
        assert_eq!(kinds(&records), vec!["Deployment", "Service", "Deployment"]);
    }

    #[test]
    fn test_resource_list_with_other_api_version_is_a_resource() {
        let records =
            parse_yaml("apiVersion: example.com/v1\nkind: ResourceList\nitems:\n- kind: A\n")
                .unwrap();
        assert_eq!(kinds(&records), vec!["ResourceList"]);
    }

    #[test]
    fn test_empty_resource_list_has_no_resources() {
        let records =
            parse_yaml("apiVersion: config.kubernetes.io/v1alpha1\nkind: ResourceList\nitems: []\n")
                .unwrap();
        assert!(records.is_empty());
    }
}
