#[cfg(test)]
mod validator_tests {
    use serde_json::json;

    use crate::{
        checks::CHECKERS,
        document::{PlanDocument, REQUIRED_SECTIONS},
        models::{Severity, Verdict},
        schema::SchemaReference,
        validator::ValidatorBuilder,
    };

    fn document(value: serde_json::Value) -> PlanDocument {
        PlanDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_default_required_sections() {
        let validator = ValidatorBuilder::new().build().unwrap();
        assert_eq!(validator.required_sections(), REQUIRED_SECTIONS);
    }

    #[test]
    fn test_with_schema_none_keeps_defaults() {
        let schema: SchemaReference = r#"{"required_sections": ["only_one"]}"#.parse().unwrap();
        let validator = ValidatorBuilder::new()
            .with_schema(Some(schema))
            .with_schema(None)
            .build()
            .unwrap();
        assert_eq!(validator.required_sections(), ["only_one"]);

        let validator = ValidatorBuilder::new().with_schema(None).build().unwrap();
        assert_eq!(validator.required_sections().len(), 10);
    }

    #[test]
    fn test_checker_order() {
        let names: Vec<_> = CHECKERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["structure", "completeness", "quality", "workorder", "autonomy", "time_policy"]
        );
    }

    #[test]
    fn test_empty_object_plan() {
        let validator = ValidatorBuilder::new().build().unwrap();
        let result = validator.validate(&document(json!({})));

        assert_eq!(result.issues.len(), 2);
        assert!(result.issues.iter().all(|i| i.severity == Severity::Critical));
        assert_eq!(result.score, 80);
        assert_eq!(result.verdict, Verdict::NeedsRevision);
        assert!(!result.approved);
        assert!(!result.checklist["metadata_present"]);
        assert!(!result.checklist["sections_container_present"]);
        assert!(!result.checklist["all_sections_present"]);
        assert!(result.checklist["no_time_estimates"]);
    }

    #[test]
    fn test_empty_container_reports_every_section() {
        let validator = ValidatorBuilder::new().build().unwrap();
        let result = validator.validate(&document(json!({
            "META_DOCUMENTATION": {},
            "UNIVERSAL_PLANNING_STRUCTURE": {}
        })));

        assert_eq!(result.issues.len(), 10);
        assert_eq!(result.score, 0);
        assert_eq!(result.verdict, Verdict::Fail);
        assert_eq!(result.issues[0].section, "0_preparation");
    }

    #[test]
    fn test_result_serializes_with_expected_keys() {
        let validator = ValidatorBuilder::new().build().unwrap();
        let result = validator.validate(&document(json!({ "META_DOCUMENTATION": {} })));
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["verdict"], "PASS");
        assert_eq!(value["score"], 90);
        assert_eq!(value["approved"], true);
        assert_eq!(value["issues"][0]["severity"], "critical");
        assert_eq!(value["issues"][0]["section"], "UNIVERSAL_PLANNING_STRUCTURE");
        assert!(value["checklist"].is_object());
    }
}
