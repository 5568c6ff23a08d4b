#![allow(dead_code)]

use gauge_core::{PlanDocument, ValidationResult, Validator, ValidatorBuilder};
use serde_json::{json, Value};

/// A task description long enough to raise no quality issue.
pub fn description(subject: &str) -> String {
    format!(
        "Implement the {subject} module with full input validation, structured logging, \
         and unit tests that cover every public function and documented failure path"
    )
}

/// A plan that passes every check.
pub fn perfect_plan() -> Value {
    json!({
        "META_DOCUMENTATION": {
            "feature_name": "auth-system",
            "version": "1.0.0",
            "status": "complete"
        },
        "UNIVERSAL_PLANNING_STRUCTURE": {
            "0_preparation": {
                "foundation_docs": ["README.md", "ARCHITECTURE.md"]
            },
            "1_executive_summary": {
                "purpose": "Add token based authentication to the API gateway."
            },
            "2_risk_assessment": {
                "overall_risk": "medium",
                "mitigations": ["A feature flag guards the rollout."]
            },
            "3_current_state_analysis": {
                "affected_files": ["src/gateway.rs"]
            },
            "4_key_features": {
                "primary": ["Token issuance", "Token revocation"]
            },
            "5_task_id_system": {
                "prefixes": { "AUTH": "Authentication work" }
            },
            "6_implementation_phases": {
                "phases": [
                    {
                        "phase": 1,
                        "name": "Foundation",
                        "tasks": [
                            { "id": "AUTH-001", "description": description("token"), "depends_on": [] },
                            { "id": "AUTH-002", "description": description("storage"), "depends_on": ["AUTH-001"] }
                        ],
                        "deliverables": ["Token storage"]
                    },
                    {
                        "phase": 2,
                        "name": "Integration",
                        "tasks": [
                            {
                                "id": "AUTH-003",
                                "description": description("session"),
                                "depends_on": ["AUTH-001", "AUTH-002"]
                            }
                        ],
                        "deliverables": ["Gateway middleware"]
                    }
                ]
            },
            "7_testing_strategy": {
                "unit_tests": ["Token parser rejects invalid signatures"],
                "edge_cases": [
                    "empty token header",
                    "expired token at the exact boundary",
                    "null subject claim",
                    "storage error during revocation",
                    "exception raised by the key loader"
                ]
            },
            "8_success_criteria": {
                "functional": ["All 3 endpoints return 401 for revoked tokens"],
                "performance": ["p95 validation latency <= 5 ms", "test coverage >= 90%"]
            },
            "9_implementation_checklist": {
                "pre_implementation": ["Review the gateway module"],
                "finalization": ["Update the changelog"]
            }
        }
    })
}

/// Mutable access to one section of a plan value.
pub fn section_mut<'a>(plan: &'a mut Value, name: &str) -> &'a mut Value {
    &mut plan["UNIVERSAL_PLANNING_STRUCTURE"][name]
}

/// Mutable access to the task list of the first phase.
pub fn first_phase_tasks(plan: &mut Value) -> &mut Value {
    &mut section_mut(plan, "6_implementation_phases")["phases"][0]["tasks"]
}

/// Build a validator with default settings.
pub fn validator() -> Validator {
    ValidatorBuilder::new()
        .build()
        .expect("Failed to build validator")
}

/// Validate a plan value with a default validator.
pub fn validate(plan: Value) -> ValidationResult {
    let document = PlanDocument::from_value(plan).expect("Failed to load plan");
    validator().validate(&document)
}

/// Messages of all issues, in order.
pub fn messages(result: &ValidationResult) -> Vec<&str> {
    result.issues.iter().map(|issue| issue.issue.as_str()).collect()
}
