//! Completeness: placeholder text, task-id integrity and circular
//! dependencies.

use std::collections::HashSet;

use super::{graph::DependencyGraph, Inspection, DOCUMENT};
use crate::models::Issue;

pub fn check(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    check_placeholders(inspection, issues);
    check_task_ids(inspection, issues);
    check_circular_dependencies(inspection, issues);
}

fn check_placeholders(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    for (token, pattern) in &inspection.patterns.placeholders {
        if let Some(found) = pattern.find(&inspection.text) {
            issues.push(Issue::major(
                DOCUMENT,
                format!("Placeholder text found: \"{}\"", found.as_str()),
                format!("Replace every \"{token}\" with concrete content"),
            ));
        }
    }
}

fn check_task_ids(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let section = inspection.tasks.section;
    let tasks = &inspection.tasks.tasks;

    let mut declared = HashSet::new();
    for id in tasks.iter().filter_map(|task| task.id) {
        if !declared.insert(id) {
            issues.push(Issue::critical(
                section,
                format!("Duplicate task ID: {id}"),
                format!("Give every task a unique ID; {id} is declared more than once"),
            ));
        }
    }

    for task in tasks {
        for dependency in &task.depends_on {
            if !declared.contains(dependency) {
                issues.push(Issue::critical(
                    section,
                    format!(
                        "Unknown dependency: {} depends on {dependency}, which is not declared",
                        task.label()
                    ),
                    format!("Declare {dependency} or remove it from depends_on"),
                ));
            }
        }
    }
}

fn check_circular_dependencies(inspection: &Inspection<'_>, issues: &mut Vec<Issue>) {
    let graph = DependencyGraph::from_tasks(&inspection.tasks.tasks);
    let back_edges = graph.back_edges();
    log::debug!(
        "Dependency graph has {} task(s) and {} back-edge(s)",
        graph.nodes().len(),
        back_edges.len()
    );
    for edge in back_edges {
        issues.push(Issue::critical(
            inspection.tasks.section,
            format!("Circular dependency detected: {} -> {}", edge.from, edge.to),
            "Break the cycle so that tasks can be executed in dependency order",
        ));
    }
}
