//! Builder for creating and configuring Validator instances.

use super::Validator;
use crate::{
    checklist::Checklist,
    checks::Patterns,
    document::REQUIRED_SECTIONS,
    error::Result,
    schema::SchemaReference,
};

/// Builder for creating and configuring Validator instances.
#[derive(Debug, Clone, Default)]
pub struct ValidatorBuilder {
    schema: Option<SchemaReference>,
}

impl ValidatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the external schema reference.
    ///
    /// If not specified, the built-in list of ten required sections is used.
    pub fn with_schema(mut self, schema: Option<SchemaReference>) -> Self {
        if let Some(schema) = schema {
            self.schema = Some(schema);
        }
        self
    }

    /// Builds the configured validator.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Pattern` if a text pattern fails to compile.
    pub fn build(self) -> Result<Validator> {
        let required_sections = match self.schema {
            Some(schema) => {
                let (extra, missing) = schema.divergence();
                if !extra.is_empty() || !missing.is_empty() {
                    log::warn!(
                        "Schema reference diverges from built-in sections (extra: {extra:?}, missing: {missing:?})"
                    );
                }
                schema.required_sections
            }
            None => REQUIRED_SECTIONS.iter().map(|s| s.to_string()).collect(),
        };

        Ok(Validator {
            required_sections,
            patterns: Patterns::compile()?,
            checklist: Checklist::compile()?,
        })
    }
}
