use compound_growth_core::errors::CoreError;
use compound_growth_core::models::plan::{Period, PlanPoint, PlanResult};
use compound_growth_core::models::projection::{CalculationResponse, CalculationResult};
use compound_growth_core::models::request::{
    CalculationRequest, NumericInput, RawCalculationRequest,
};
use compound_growth_core::models::settings::{Settings, DEFAULT_HISTORY_PATH};
use std::path::PathBuf;

fn raw(json: &str) -> RawCalculationRequest {
    serde_json::from_str(json).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  CalculationRequest
// ═══════════════════════════════════════════════════════════════════

mod calculation_request {
    use super::*;

    #[test]
    fn months_is_twelve_per_year() {
        assert_eq!(CalculationRequest::new(0.0, 0.0, 0, 0.0).months(), 0);
        assert_eq!(CalculationRequest::new(0.0, 0.0, 7, 0.0).months(), 84);
    }

    #[test]
    fn monthly_addition_defaults_when_absent() {
        let req: CalculationRequest =
            serde_json::from_str(r#"{"principal": 100, "annual_rate": 5, "years": 2}"#).unwrap();
        assert_eq!(req, CalculationRequest::new(100.0, 5.0, 2, 0.0));
    }

    #[test]
    fn default_is_all_zero() {
        assert_eq!(CalculationRequest::default(), CalculationRequest::new(0.0, 0.0, 0, 0.0));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  RawCalculationRequest — coercion at the request boundary
// ═══════════════════════════════════════════════════════════════════

mod raw_request {
    use super::*;

    #[test]
    fn empty_object_is_all_zero() {
        let req = raw("{}").coerce().unwrap();
        assert_eq!(req, CalculationRequest::default());
    }

    #[test]
    fn null_values_default_to_zero() {
        let req = raw(r#"{"principal": null, "years": null}"#).coerce().unwrap();
        assert_eq!(req, CalculationRequest::default());
    }

    #[test]
    fn numbers_pass_through() {
        let req = raw(
            r#"{"principal": 1000, "annual_rate": 4.5, "years": 10, "monthly_addition": 250.75}"#,
        )
        .coerce()
        .unwrap();
        assert_eq!(req, CalculationRequest::new(1000.0, 4.5, 10, 250.75));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let req = raw(
            r#"{
                "principal": " 1500.50 ",
                "annual_rate": "1e1",
                "years": "3",
                "monthly_addition": "-20"
            }"#,
        )
        .coerce()
        .unwrap();
        assert_eq!(req, CalculationRequest::new(1500.5, 10.0, 3, -20.0));
    }

    #[test]
    fn fractional_years_number_truncates() {
        let req = raw(r#"{"years": 2.9}"#).coerce().unwrap();
        assert_eq!(req.years, 2);
    }

    #[test]
    fn fractional_years_string_rejected() {
        let err = raw(r#"{"years": "2.5"}"#).coerce().unwrap_err();
        match err {
            CoreError::InvalidInput(msg) => assert!(msg.contains("years is not an integer")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn negative_years_rejected() {
        let err = raw(r#"{"years": -1}"#).coerce().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref m) if m.contains("negative")));

        let err = raw(r#"{"years": "-4"}"#).coerce().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn huge_years_rejected() {
        let err = raw(r#"{"years": 1e12}"#).coerce().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref m) if m.contains("too large")));
    }

    #[test]
    fn non_numeric_principal_rejected() {
        let err = raw(r#"{"principal": "a lot"}"#).coerce().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: principal is not a number: \"a lot\""
        );
    }

    #[test]
    fn non_finite_string_rejected() {
        let err = raw(r#"{"annual_rate": "inf"}"#).coerce().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref m) if m.contains("finite")));
    }

    #[test]
    fn booleans_count_as_one_and_zero() {
        let req = raw(r#"{"principal": true, "annual_rate": false, "years": true}"#)
            .coerce()
            .unwrap();
        assert_eq!(req, CalculationRequest::new(1.0, 0.0, 1, 0.0));
    }

    #[test]
    fn digit_separators_accepted() {
        let req = raw(r#"{"principal": "1_000.5", "years": "1_0", "monthly_addition": "2_500"}"#)
            .coerce()
            .unwrap();
        assert_eq!(req, CalculationRequest::new(1000.5, 0.0, 10, 2500.0));
    }

    #[test]
    fn misplaced_separators_rejected() {
        for bad in ["_100", "100_", "1__000", "1_.5", "1._5"] {
            let body = format!(r#"{{"principal": "{bad}"}}"#);
            let err = raw(&body).coerce().unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidInput(_)),
                "{bad:?} should be rejected"
            );
        }
        let err = raw(r#"{"years": "_3"}"#).coerce().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn from_json_accepts_object() {
        let parsed = RawCalculationRequest::from_json(r#"{"principal": 5}"#).unwrap();
        assert_eq!(parsed.principal, Some(NumericInput::Number(5.0)));
        assert_eq!(parsed.years, None);
    }

    #[test]
    fn from_json_rejects_positional_array() {
        let err = RawCalculationRequest::from_json("[1, 2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: request body must be a JSON object, got an array"
        );
    }

    #[test]
    fn from_json_rejects_scalars() {
        for body in ["null", "42", "\"principal\"", "true"] {
            let err = RawCalculationRequest::from_json(body).unwrap_err();
            assert!(matches!(err, CoreError::InvalidInput(_)), "{body} accepted");
        }
    }

    #[test]
    fn unknown_keys_ignored() {
        let req = raw(r#"{"principal": 10, "currency": "JPY"}"#).coerce().unwrap();
        assert_eq!(req.principal, 10.0);
    }

    #[test]
    fn numeric_input_from_conversions() {
        assert_eq!(NumericInput::from(2.5), NumericInput::Number(2.5));
        assert_eq!(NumericInput::from("7"), NumericInput::Text("7".into()));
        assert_eq!(NumericInput::from(true), NumericInput::Bool(true));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CalculationResult / CalculationResponse
// ═══════════════════════════════════════════════════════════════════

mod projection {
    use super::*;

    #[test]
    fn months_excludes_initial_entry() {
        let r = CalculationResult {
            final_total: 1.0,
            history: vec![1.0; 25],
        };
        assert_eq!(r.months(), 24);
    }

    #[test]
    fn response_uses_wire_keys() {
        let response: CalculationResponse = CalculationResult {
            final_total: 1010.0,
            history: vec![1000.0, 1010.0],
        }
        .into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"result": 1010.0, "history": [1000.0, 1010.0]}));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Plan models
// ═══════════════════════════════════════════════════════════════════

mod plan {
    use super::*;

    #[test]
    fn point_splits_month_index() {
        let p = PlanPoint::new(14, 99.5);
        assert_eq!(p.elapsed_years, 1);
        assert_eq!(p.elapsed_months, 2);
        assert_eq!(p.month_index, 14);

        let p = PlanPoint::new(12, 0.0);
        assert_eq!((p.elapsed_years, p.elapsed_months), (1, 0));
    }

    #[test]
    fn period_fields_default() {
        let p: Period = serde_json::from_str(r#"{"annual_rate": 3}"#).unwrap();
        assert_eq!(p, Period::follow_up(3.0, 0, 0.0, 0.0));
    }

    #[test]
    fn constructors() {
        let opening = Period::opening(500.0, 2.0, 1, 10.0);
        assert_eq!(opening.extra_income, 0.0);
        assert_eq!(opening.principal, 500.0);

        let next = Period::follow_up(2.0, 1, 10.0, -50.0);
        assert_eq!(next.principal, 0.0);
        assert_eq!(next.extra_income, -50.0);
    }

    #[test]
    fn result_default_is_empty() {
        let r = PlanResult::default();
        assert_eq!(r.total, 0.0);
        assert!(r.points.is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.history_path, PathBuf::from(DEFAULT_HISTORY_PATH));
        assert_eq!(s.log_level, "info");
        assert_eq!(s.log_format, "pretty");
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"history_path": "/var/lib/growth/h.json"}"#).unwrap();
        assert_eq!(s.history_path, PathBuf::from("/var/lib/growth/h.json"));
        assert_eq!(s.log_level, "info");
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"log_level": "debug", "log_format": "json"}"#).unwrap();

        let s = Settings::load_from_file(&path).unwrap();
        assert_eq!(s.log_level, "debug");
        assert_eq!(s.log_format, "json");
        assert_eq!(s.history_path, PathBuf::from(DEFAULT_HISTORY_PATH));
    }

    #[test]
    fn load_optional_none_gives_defaults() {
        assert_eq!(Settings::load_optional(None).unwrap(), Settings::default());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let err = Settings::load_optional(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}
