use std::fmt;

/// Shape checks that run after deserialization and before a payload reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Rejects strings that are empty once surrounding whitespace is removed.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

/// Same as [`require_non_empty`], but only when the optional value is present.
pub fn optional_non_empty(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) => require_non_empty(field, v),
        None => Ok(()),
    }
}

/// Model names end up as a URL path segment upstream. A leading `models/` is allowed;
/// any other `/`, `?`, `#` or `..` is rejected.
pub fn model_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require_non_empty(field, value)?;
    let bare = value.strip_prefix("models/").unwrap_or(value);
    if bare.contains(['/', '?', '#']) || bare.contains("..") {
        return Err(ValidationError::new(field, "not a valid model name"));
    }
    Ok(())
}

/// Same as [`model_name`], but only when the optional value is present.
pub fn optional_model_name(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| model_name(field, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_rejected() {
        let err = require_non_empty("name", "  \t").unwrap_err();
        assert_eq!(err.to_string(), "name: must not be empty");
        assert!(require_non_empty("name", "x").is_ok());
    }

    #[test]
    fn absent_optional_passes() {
        assert!(optional_non_empty("name", None).is_ok());
        assert!(optional_non_empty("name", Some("")).is_err());
    }

    #[test]
    fn model_names_may_not_reshape_a_url_path() {
        assert!(model_name("model", "gemini-2.0-flash").is_ok());
        assert!(model_name("model", "models/gemini-2.0-flash").is_ok());
        assert!(model_name("model", "gpt-4o-mini").is_ok());
        for bad in ["../files", "gemini?alt=sse", "a/b", "models/x#frag", "models/models/x"] {
            assert!(model_name("model", bad).is_err(), "{bad} should be rejected");
        }
    }
}
