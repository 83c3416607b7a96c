use crate::core::error::{MeetingError, Result};

/// Reject an empty required field before anything is sent
pub fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(MeetingError::MissingField(field));
    }
    Ok(())
}

/// Parameters that must be checked before a request is built
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
