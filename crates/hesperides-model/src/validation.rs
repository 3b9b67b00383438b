use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Identity fields (application, platform, module names and version labels)
/// must be non-empty and free of control characters.
pub fn only_printable(subject: &str, input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError(format!("{subject} must not be empty")));
    }
    if input.chars().any(char::is_control) {
        return Err(ValidationError(format!(
            "{subject} must contain only printable characters"
        )));
    }
    Ok(())
}
