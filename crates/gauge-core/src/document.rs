//! Plan document model and loader.
//!
//! A plan is a JSON object holding a metadata block and a container of ten
//! numbered sections. The engine works on the parsed [`serde_json::Value`]
//! tree directly and exposes typed, borrowed views over the parts it needs
//! ([`Task`], [`PhaseLayout`]) so that missing or oddly shaped fields are
//! simply "nothing to check" rather than deserialization failures.
//!
//! ```rust
//! use gauge_core::PlanDocument;
//!
//! let doc: PlanDocument = r#"{"META_DOCUMENTATION": {"feature_name": "auth"}}"#
//!     .parse()
//!     .unwrap();
//! assert!(doc.metadata().is_some());
//! assert!(doc.sections().is_none());
//! ```

use std::{fs, path::Path, str::FromStr};

use serde_json::{Map, Value};

use crate::error::{IoResultExt, Result, ValidatorError};

/// Key of the metadata block at the document root.
pub const META_KEY: &str = "META_DOCUMENTATION";

/// Key of the sections container at the document root.
pub const SECTIONS_KEY: &str = "UNIVERSAL_PLANNING_STRUCTURE";

/// Section keys, in index order.
pub mod sections {
    pub const PREPARATION: &str = "0_preparation";
    pub const EXECUTIVE_SUMMARY: &str = "1_executive_summary";
    pub const RISK_ASSESSMENT: &str = "2_risk_assessment";
    pub const CURRENT_STATE_ANALYSIS: &str = "3_current_state_analysis";
    pub const KEY_FEATURES: &str = "4_key_features";
    pub const TASK_ID_SYSTEM: &str = "5_task_id_system";
    pub const IMPLEMENTATION_PHASES: &str = "6_implementation_phases";
    pub const TESTING_STRATEGY: &str = "7_testing_strategy";
    pub const SUCCESS_CRITERIA: &str = "8_success_criteria";
    pub const IMPLEMENTATION_CHECKLIST: &str = "9_implementation_checklist";
}

/// The ten sections every plan must contain.
pub const REQUIRED_SECTIONS: [&str; 10] = [
    sections::PREPARATION,
    sections::EXECUTIVE_SUMMARY,
    sections::RISK_ASSESSMENT,
    sections::CURRENT_STATE_ANALYSIS,
    sections::KEY_FEATURES,
    sections::TASK_ID_SYSTEM,
    sections::IMPLEMENTATION_PHASES,
    sections::TESTING_STRATEGY,
    sections::SUCCESS_CRITERIA,
    sections::IMPLEMENTATION_CHECKLIST,
];

/// A parsed implementation plan. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanDocument {
    root: Value,
}

impl PlanDocument {
    /// Wrap an already parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidDocument` if the value is `null` or
    /// its root is not a JSON object.
    pub fn from_value(root: Value) -> Result<Self> {
        match root {
            Value::Object(_) => Ok(Self { root }),
            Value::Null => Err(ValidatorError::invalid_document("document is absent")),
            other => Err(ValidatorError::invalid_document(format!(
                "root must be a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Parse a plan from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::InvalidDocument` for empty input,
    /// `ValidatorError::Parse` for malformed JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(ValidatorError::invalid_document("document is empty"));
        }
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Read and parse a plan file.
    ///
    /// # Errors
    ///
    /// Returns `ValidatorError::FileSystem` if the file cannot be read, plus
    /// every error [`PlanDocument::from_json`] can return.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).fs_context(path)?;
        log::debug!("Loaded plan document from {}", path.display());
        Self::from_json(&text)
    }

    /// The raw JSON tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The metadata block, if present and not null.
    pub fn metadata(&self) -> Option<&Value> {
        self.root.get(META_KEY).filter(|value| !value.is_null())
    }

    /// The sections container, if present and an object.
    pub fn sections(&self) -> Option<&Map<String, Value>> {
        self.root.get(SECTIONS_KEY).and_then(Value::as_object)
    }

    /// A single named section.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections().and_then(|sections| sections.get(name))
    }

    /// Compact JSON text of the whole document, used by the text scans.
    pub fn to_text(&self) -> String {
        self.root.to_string()
    }

    /// Detect which phase schema generation the document uses.
    pub fn phase_layout(&self) -> PhaseLayout<'_> {
        PhaseLayout::detect(self.section(sections::IMPLEMENTATION_PHASES))
    }

    /// The workorder object declared by the task-id system, if any.
    pub fn workorder(&self) -> Option<&Map<String, Value>> {
        self.section(sections::TASK_ID_SYSTEM)?
            .get("workorder")?
            .as_object()
    }

    /// The task population used for id integrity, cycle detection and
    /// description checks.
    ///
    /// Tasks declared inside the implementation phases win; the flat list of
    /// the task-id system is used only when the phases declare none.
    pub fn tasks(&self) -> TaskSet<'_> {
        let tasks: Vec<Task<'_>> = self
            .phase_layout()
            .phases()
            .filter_map(|phase| phase.get("tasks"))
            .flat_map(tasks_in)
            .collect();
        if !tasks.is_empty() {
            return TaskSet {
                section: sections::IMPLEMENTATION_PHASES,
                tasks,
            };
        }

        TaskSet {
            section: sections::TASK_ID_SYSTEM,
            tasks: self
                .section(sections::TASK_ID_SYSTEM)
                .and_then(|system| system.get("tasks"))
                .map(tasks_in)
                .unwrap_or_default(),
        }
    }
}

impl FromStr for PlanDocument {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

impl TryFrom<Value> for PlanDocument {
    type Error = ValidatorError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

/// The two supported shapes of the implementation-phases section.
#[derive(Debug, Clone, PartialEq)]
pub enum PhaseLayout<'a> {
    /// Newer form: an array of phase objects carrying `phase`, `name`,
    /// `tasks` and `deliverables`.
    Array(Vec<&'a Value>),

    /// Older form: `phase_1`, `phase_2`, ... keys holding phase objects.
    Keyed(Vec<(&'a str, &'a Value)>),

    /// No recognizable phases.
    Absent,
}

impl<'a> PhaseLayout<'a> {
    fn detect(section: Option<&'a Value>) -> Self {
        let Some(section) = section else {
            return PhaseLayout::Absent;
        };

        if let Some(phases) = section.as_array() {
            return PhaseLayout::Array(phases.iter().collect());
        }

        let Some(map) = section.as_object() else {
            return PhaseLayout::Absent;
        };

        if let Some(phases) = map.get("phases").and_then(Value::as_array) {
            return PhaseLayout::Array(phases.iter().collect());
        }

        let mut keyed: Vec<_> = map
            .iter()
            .filter(|(key, value)| key.starts_with("phase_") && value.is_object())
            .map(|(key, value)| (key.as_str(), value))
            .collect();
        // phase_2 before phase_10; unnumbered keys last.
        keyed.sort_by_key(|(key, _)| (phase_number(key).unwrap_or(u64::MAX), *key));

        if keyed.is_empty() {
            PhaseLayout::Absent
        } else {
            PhaseLayout::Keyed(keyed)
        }
    }

    /// Iterate over the phase objects regardless of layout.
    pub fn phases(&self) -> Box<dyn Iterator<Item = &'a Value> + '_> {
        match self {
            PhaseLayout::Array(phases) => Box::new(phases.iter().copied()),
            PhaseLayout::Keyed(phases) => Box::new(phases.iter().map(|(_, phase)| *phase)),
            PhaseLayout::Absent => Box::new(std::iter::empty()),
        }
    }
}

fn phase_number(key: &str) -> Option<u64> {
    key.strip_prefix("phase_")?.parse().ok()
}

/// Borrowed view of one task record.
#[derive(Debug, Clone, PartialEq)]
pub struct Task<'a> {
    /// Task identifier, when the record carries a string `id`
    pub id: Option<&'a str>,

    /// Free-text description
    pub description: Option<&'a str>,

    /// Ids this task depends on
    pub depends_on: Vec<&'a str>,

    /// Raw `workorder_id` value, kept untyped so mismatched types are
    /// reported rather than ignored
    pub workorder_id: Option<&'a Value>,
}

impl<'a> Task<'a> {
    /// Read a task from a JSON entry. Objects are full records, strings are
    /// bare id declarations; anything else is not a task.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(id) => Some(Task {
                id: Some(id.trim()),
                description: None,
                depends_on: Vec::new(),
                workorder_id: None,
            }),
            Value::Object(record) => Some(Task {
                id: record.get("id").and_then(Value::as_str),
                description: record.get("description").and_then(Value::as_str),
                depends_on: match record.get("depends_on") {
                    Some(Value::Array(ids)) => ids.iter().filter_map(Value::as_str).collect(),
                    Some(Value::String(id)) => vec![id.as_str()],
                    _ => Vec::new(),
                },
                workorder_id: record.get("workorder_id"),
            }),
            _ => None,
        }
    }

    /// Display label for issue messages.
    pub fn label(&self) -> &'a str {
        self.id.unwrap_or("(unnamed task)")
    }
}

/// The task population of a document and the section it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSet<'a> {
    /// Section the tasks were read from
    pub section: &'static str,

    /// Tasks in declaration order
    pub tasks: Vec<Task<'a>>,
}

fn tasks_in(value: &Value) -> Vec<Task<'_>> {
    value
        .as_array()
        .map(|entries| entries.iter().filter_map(Task::from_value).collect())
        .unwrap_or_default()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
