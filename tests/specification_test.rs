//! Specification contract tests
//!
//! The parameter whitelist gate: names are handed back untouched when valid,
//! rejected with typed errors otherwise.

use kinorate::modules::catalog::domain::specifications::{
    ParamValue, ParameterError, Specification,
};

#[test]
fn same_object_accepts_whitelisted_keyword_parameter() {
    let spec = Specification::same_object().with("name", ParamValue::text("x"));
    let params = spec.is_satisfied().expect("name is whitelisted");
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].0, "name");
    assert_eq!(params[0].1, ParamValue::text("x"));
}

#[test]
fn unknown_parameter_raises_unavailable_with_names() {
    let spec = Specification::same_object().with("color", ParamValue::text("red"));
    assert_eq!(
        spec.is_satisfied().unwrap_err(),
        ParameterError::Unavailable(vec!["color".to_string()])
    );
}

#[test]
fn no_parameters_raises_absent() {
    assert_eq!(
        Specification::by_parameter().is_satisfied().unwrap_err(),
        ParameterError::Absent
    );
}

#[test]
fn every_profile_accepts_its_own_whitelist() {
    let same_object = ["name", "url", "title", "year"];
    for name in same_object {
        let spec = Specification::same_object().with(name, ParamValue::text("v"));
        assert!(spec.is_satisfied().is_ok(), "same-object rejected {}", name);
    }

    let by_parameter = ["pk", "id", "url", "title", "world_premiere", "movie"];
    for name in by_parameter {
        let spec = Specification::by_parameter().with(name, ParamValue::Int(1));
        assert!(spec.is_satisfied().is_ok(), "by-parameter rejected {}", name);
    }

    let order_by = ["id", "name", "world_premiere", "title"];
    for name in order_by {
        assert!(
            Specification::order_by(name).is_satisfied().is_ok(),
            "order-by rejected {}",
            name
        );
    }

    let unique_values = ["pk", "country", "year"];
    for name in unique_values {
        assert!(
            Specification::unique_values(name).is_satisfied().is_ok(),
            "unique-values rejected {}",
            name
        );
    }
}

#[test]
fn profiles_reject_each_others_parameters() {
    assert!(Specification::order_by("country").is_satisfied().is_err());
    assert!(Specification::unique_values("title").is_satisfied().is_err());
    assert!(Specification::same_object()
        .with("movie", ParamValue::Int(7))
        .is_satisfied()
        .is_err());
}

#[test]
fn descending_prefix_is_valid_for_any_whitelisted_name() {
    assert!(Specification::order_by("-world_premiere")
        .is_satisfied()
        .is_ok());
    assert!(Specification::order_by("-title").is_satisfied().is_ok());
    assert!(Specification::order_by("-color").is_satisfied().is_err());
}

#[test]
fn multiple_offending_names_are_all_reported() {
    let spec = Specification::same_object()
        .with("color", ParamValue::text("red"))
        .with("title", ParamValue::text("Heat"))
        .with("shape", ParamValue::text("round"));
    assert_eq!(
        spec.is_satisfied().unwrap_err(),
        ParameterError::Unavailable(vec!["color".to_string(), "shape".to_string()])
    );
}
