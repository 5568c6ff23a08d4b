//! Checklist projection.
//!
//! Every checklist item is a pattern over the leading phrase of issue
//! messages. An item passes when no issue matches it. The projection reads
//! the finished issue list only; it never runs a checker.

use std::collections::BTreeMap;

use regex::Regex;

use crate::{checks::patterns::compile, error::Result, models::Issue};

/// Checklist item names and the issue messages that fail them.
pub const CHECKLIST_ITEMS: [(&str, &str); 23] = [
    ("metadata_present", r"^Missing META_DOCUMENTATION\b"),
    ("sections_container_present", r"^Missing UNIVERSAL_PLANNING_STRUCTURE\b"),
    (
        "all_sections_present",
        r"^Missing (?:required section|UNIVERSAL_PLANNING_STRUCTURE\b)",
    ),
    ("no_placeholder_text", r"^Placeholder text found"),
    ("task_ids_unique", r"^Duplicate task ID"),
    ("dependencies_valid", r"^Unknown dependency"),
    ("no_circular_dependencies", r"^Circular dependency"),
    ("task_descriptions_detailed", r"^Task description"),
    ("phases_complete", r"^Phase missing required field"),
    ("complexity_ratings_valid", r"^Invalid complexity"),
    ("effort_levels_valid", r"^Invalid effort_level"),
    ("no_deprecated_fields", r"^Deprecated field"),
    ("success_criteria_measurable", r"^Success criteria not measurable"),
    ("edge_case_behavior_defined", r"^Insufficient edge case coverage"),
    ("workorder_id_present", r"^Workorder missing id$"),
    ("workorder_id_format_valid", r"^Invalid workorder ID format"),
    ("workorder_name_present", r"^Workorder missing name$"),
    ("workorder_feature_dir_present", r"^Workorder missing feature_dir$"),
    ("tasks_reference_workorder", r"^Task missing workorder_id"),
    ("workorder_ids_consistent", r"^Workorder ID mismatch"),
    ("no_ambiguous_language", r"^Ambiguous language"),
    ("no_unresolved_questions", r"^Unresolved question"),
    ("no_time_estimates", r"^Time-based estimates"),
];

/// Compiled checklist.
#[derive(Debug, Clone)]
pub struct Checklist {
    items: Vec<(&'static str, Regex)>,
}

impl Checklist {
    /// Compile every item pattern.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::Pattern` if an item pattern is invalid.
    pub fn compile() -> Result<Self> {
        let items = CHECKLIST_ITEMS
            .iter()
            .map(|(name, pattern)| Ok((*name, compile("checklist", pattern)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    /// Project an issue list onto the named checks.
    pub fn project(&self, issues: &[Issue]) -> BTreeMap<String, bool> {
        self.items
            .iter()
            .map(|(name, pattern)| {
                let failed = issues.iter().any(|issue| pattern.is_match(&issue.issue));
                (name.to_string(), !failed)
            })
            .collect()
    }
}
