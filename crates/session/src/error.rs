//! Session errors.

use sheet_core::SheetError;

/// Errors surfaced to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// One or more input fields failed validation. Every failing field is
    /// reported, not only the first.
    #[error("invalid sheet input: {}", join(.0))]
    InvalidInput(Vec<SheetError>),
}

impl SessionError {
    /// The individual field errors.
    pub fn errors(&self) -> &[SheetError] {
        match self {
            SessionError::InvalidInput(errors) => errors,
        }
    }

    /// Whether `field` is among the failing fields.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors().iter().any(|e| e.field() == field)
    }
}

impl From<SheetError> for SessionError {
    fn from(error: SheetError) -> Self {
        SessionError::InvalidInput(vec![error])
    }
}

fn join(errors: &[SheetError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
