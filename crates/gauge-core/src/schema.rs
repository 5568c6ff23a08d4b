//! Optional external schema reference.
//!
//! A schema reference supplies the list of required section names from an
//! external source of truth. Two shapes are understood:
//!
//! ```json
//! {"required_sections": ["0_preparation", "1_executive_summary"]}
//! ```
//!
//! or a JSON Schema for the plan itself, in which case the list is read from
//! `properties.UNIVERSAL_PLANNING_STRUCTURE.required`.

use std::{fs, path::Path, str::FromStr};

use serde::Deserialize;
use serde_json::Value;

use crate::{
    document::{REQUIRED_SECTIONS, SECTIONS_KEY},
    error::{IoResultExt, Result, ValidatorError},
};

/// Required-section list loaded from an external schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaReference {
    /// Section keys every plan must contain
    pub required_sections: Vec<String>,
}

impl SchemaReference {
    /// Interpret a parsed schema value.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Schema` if neither supported shape yields a
    /// non-empty list of section names.
    pub fn from_value(value: &Value) -> Result<Self> {
        let list = value.get("required_sections").or_else(|| {
            value
                .pointer(&format!("/properties/{SECTIONS_KEY}/required"))
        });

        let Some(list) = list else {
            return Err(ValidatorError::schema(
                "expected `required_sections` or a JSON Schema listing required sections",
            ));
        };

        let required_sections = Vec::<String>::deserialize(list)
            .map_err(|e| ValidatorError::schema(format!("section list: {e}")))?;

        if required_sections.is_empty() {
            return Err(ValidatorError::schema("required section list is empty"));
        }

        Ok(Self { required_sections })
    }

    /// Read a schema reference from a file.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::FileSystem` if the file cannot be read,
    /// `ValidatorError::Parse` if it is not JSON, or `ValidatorError::Schema`
    /// if it lists no sections.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).fs_context(path)?;
        text.parse()
    }

    /// Section names present here but missing from the built-in list, and
    /// vice versa.
    pub fn divergence(&self) -> (Vec<&str>, Vec<&'static str>) {
        let extra = self
            .required_sections
            .iter()
            .map(String::as_str)
            .filter(|name| !REQUIRED_SECTIONS.contains(name))
            .collect();
        let missing = REQUIRED_SECTIONS
            .iter()
            .copied()
            .filter(|name| !self.required_sections.iter().any(|s| s == name))
            .collect();
        (extra, missing)
    }
}

impl FromStr for SchemaReference {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(&value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reads_flat_list() {
        let schema = SchemaReference::from_value(&json!({
            "required_sections": ["0_preparation", "1_executive_summary"]
        }))
        .unwrap();
        assert_eq!(schema.required_sections.len(), 2);
    }

    #[test]
    fn test_reads_json_schema_shape() {
        let schema: SchemaReference = r#"{
            "$schema": "http://json-schema.org/draft-07/schema#",
            "properties": {
                "UNIVERSAL_PLANNING_STRUCTURE": {
                    "type": "object",
                    "required": ["0_preparation", "extra_section"]
                }
            }
        }"#
        .parse()
        .unwrap();
        assert_eq!(
            schema.required_sections,
            vec!["0_preparation".to_string(), "extra_section".to_string()]
        );
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let err = SchemaReference::from_value(&json!({ "type": "object" })).unwrap_err();
        assert!(matches!(err, ValidatorError::Schema { .. }));
    }

    #[test]
    fn test_rejects_empty_or_mistyped_lists() {
        assert!(SchemaReference::from_value(&json!({ "required_sections": [] })).is_err());
        assert!(SchemaReference::from_value(&json!({ "required_sections": [1, 2] })).is_err());
    }

    #[test]
    fn test_divergence_against_builtin_list() {
        let mut names: Vec<String> = REQUIRED_SECTIONS[1..].iter().map(|s| s.to_string()).collect();
        names.push("10_rollout".to_string());
        let schema = SchemaReference {
            required_sections: names,
        };

        let (extra, missing) = schema.divergence();
        assert_eq!(extra, vec!["10_rollout"]);
        assert_eq!(missing, vec!["0_preparation"]);
    }
}
