//! Workorder metadata consistency.
//!
//! Only runs when the task-id system declares a `workorder` object; plans
//! written before workorders existed are not penalized.

use serde_json::Value;

use super::Inspection;
use crate::{
    document::{sections, Task},
    models::Issue,
};

pub fn check(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let Some(workorder) = inspection.document.workorder() else {
        return;
    };
    let section = sections::TASK_ID_SYSTEM;

    let id = workorder.get("id");
    match id {
        None => issues.push(Issue::critical(
            section,
            "Workorder missing id",
            "Add an id of the form WO-{FEATURE-NAME}-001 to the workorder",
        )),
        Some(id) => {
            let well_formed = id
                .as_str()
                .is_some_and(|id| inspection.patterns.workorder_id.is_match(id));
            if !well_formed {
                issues.push(Issue::major(
                    section,
                    format!("Invalid workorder ID format: {}", plain(id)),
                    "Use the form WO-{FEATURE-NAME}-001 with an uppercase feature name",
                ));
            }
        }
    }

    for field in ["name", "feature_dir"] {
        if !workorder.contains_key(field) {
            issues.push(Issue::major(
                section,
                format!("Workorder missing {field}"),
                format!("Add '{field}' to the workorder"),
            ));
        }
    }

    let Some(id) = id else {
        return;
    };

    let tasks = workorder
        .get("tasks")
        .filter(|tasks| tasks.is_array())
        .or_else(|| {
            inspection
                .document
                .section(sections::TASK_ID_SYSTEM)
                .and_then(|system| system.get("tasks"))
        })
        .and_then(Value::as_array);

    for entry in tasks.into_iter().flatten().filter(|entry| entry.is_object()) {
        let Some(task) = Task::from_value(entry) else {
            continue;
        };
        match task.workorder_id {
            None => issues.push(Issue::major(
                section,
                format!("Task missing workorder_id: {}", task.label()),
                format!("Set workorder_id to {} on {}", plain(id), task.label()),
            )),
            Some(bound) if bound != id => issues.push(Issue::critical(
                section,
                format!(
                    "Workorder ID mismatch: {} has {}, expected {}",
                    task.label(),
                    plain(bound),
                    plain(id)
                ),
                format!("Change workorder_id on {} to {}", task.label(), plain(id)),
            )),
            Some(_) => {}
        }
    }
}

/// Strings without their JSON quotes, everything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
