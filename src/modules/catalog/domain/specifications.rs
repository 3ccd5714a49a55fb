use chrono::NaiveDate;
use thiserror::Error;

/// Raised when a query is built from parameters outside the caller's whitelist.
///
/// Repositories catch these at their boundary and turn them into empty
/// results; they are never surfaced to end users.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("No one parameter was passed")]
    Absent,

    #[error("Passed parameters {0:?} are unavailable")]
    Unavailable(Vec<String>),
}

/// Value carried by a keyword parameter; `Flag` marks a bare positional
/// name (used by the ordering and unique-values profiles)
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Flag,
    Text(String),
    Int(i64),
    Date(NaiveDate),
}

/// Whitelist profile a specification validates against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecificationKind {
    /// Uniqueness probe against an existing row
    SameObject,
    /// Single-object lookup
    ObjectByParameter,
    /// Result ordering
    OrderBy,
    /// Distinct-values projection
    UniqueValues,
}

impl SpecificationKind {
    pub fn available_params(&self) -> &'static [&'static str] {
        match self {
            SpecificationKind::SameObject => &["name", "url", "title", "year"],
            SpecificationKind::ObjectByParameter => {
                &["pk", "id", "url", "title", "world_premiere", "movie"]
            }
            SpecificationKind::OrderBy => &["id", "name", "world_premiere", "title"],
            SpecificationKind::UniqueValues => &["pk", "country", "year"],
        }
    }
}

/// A named, whitelisted parameter set validated before any query uses it.
///
/// Purely a validation gate: `is_satisfied` hands the parameters back
/// untouched when every name (ignoring a leading `-` for descending order)
/// belongs to the profile's whitelist.
#[derive(Debug, Clone, PartialEq)]
pub struct Specification {
    kind: SpecificationKind,
    params: Vec<(String, ParamValue)>,
}

impl Specification {
    pub fn same_object() -> Self {
        Self::new(SpecificationKind::SameObject)
    }

    pub fn by_parameter() -> Self {
        Self::new(SpecificationKind::ObjectByParameter)
    }

    pub fn order_by(parameter: &str) -> Self {
        Self::new(SpecificationKind::OrderBy).flag(parameter)
    }

    pub fn unique_values(parameter: &str) -> Self {
        Self::new(SpecificationKind::UniqueValues).flag(parameter)
    }

    fn new(kind: SpecificationKind) -> Self {
        Self {
            kind,
            params: Vec::new(),
        }
    }

    /// Add a keyword parameter (a filter)
    pub fn with(mut self, name: &str, value: ParamValue) -> Self {
        self.params.push((name.to_string(), value));
        self
    }

    /// Add a positional parameter (a bare flag such as an ordering field)
    pub fn flag(mut self, name: &str) -> Self {
        self.params.push((name.to_string(), ParamValue::Flag));
        self
    }

    pub fn kind(&self) -> SpecificationKind {
        self.kind
    }

    /// Validate the parameter set and return it unchanged on success
    pub fn is_satisfied(&self) -> Result<&[(String, ParamValue)], ParameterError> {
        if self.params.is_empty() {
            return Err(ParameterError::Absent);
        }

        let available = self.kind.available_params();
        let unavailable: Vec<String> = self
            .params
            .iter()
            .map(|(name, _)| name.clone())
            .filter(|name| {
                let bare = name.strip_prefix('-').unwrap_or(name);
                !available.contains(&bare)
            })
            .collect();

        if !unavailable.is_empty() {
            return Err(ParameterError::Unavailable(unavailable));
        }

        Ok(&self.params)
    }
}

impl ParamValue {
    pub fn text(value: impl Into<String>) -> Self {
        ParamValue::Text(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitelisted_parameters_are_returned_unchanged() {
        let spec = Specification::same_object().with("name", ParamValue::text("x"));
        let params = spec.is_satisfied().expect("name is whitelisted");
        assert_eq!(params, &[("name".to_string(), ParamValue::text("x"))]);
    }

    #[test]
    fn empty_parameter_set_is_absent() {
        let spec = Specification::same_object();
        assert_eq!(spec.is_satisfied(), Err(ParameterError::Absent));
    }

    #[test]
    fn unknown_parameter_is_reported_by_name() {
        let spec = Specification::same_object().with("color", ParamValue::text("red"));
        assert_eq!(
            spec.is_satisfied(),
            Err(ParameterError::Unavailable(vec!["color".to_string()]))
        );
    }

    #[test]
    fn descending_prefix_is_accepted() {
        let spec = Specification::order_by("-world_premiere");
        assert!(spec.is_satisfied().is_ok());
    }

    #[test]
    fn mixed_valid_and_invalid_parameters_report_only_invalid() {
        let spec = Specification::by_parameter()
            .with("url", ParamValue::text("inception"))
            .with("rating", ParamValue::Int(5));
        assert_eq!(
            spec.is_satisfied(),
            Err(ParameterError::Unavailable(vec!["rating".to_string()]))
        );
    }

    #[test]
    fn profiles_have_distinct_whitelists() {
        assert!(Specification::order_by("country").is_satisfied().is_err());
        assert!(Specification::unique_values("country").is_satisfied().is_ok());
    }
}
