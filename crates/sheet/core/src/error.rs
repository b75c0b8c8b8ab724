//! Input validation errors for sheet derivation.
//!
//! The derivation rules themselves never fail; errors only arise when raw
//! input (form fields, data files) is turned into a [`CharacterSheet`].
//! Every variant names the offending field so the presentation layer can
//! show it next to the input instead of rendering a blank or bogus number.
//!
//! [`CharacterSheet`]: crate::CharacterSheet

/// Errors raised while reading and validating sheet inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    /// A required field was absent.
    #[error("missing input field '{field}'")]
    MissingField { field: String },

    /// A field was present but could not be parsed as an integer.
    #[error("field '{field}' is not a number: '{value}'")]
    NonNumeric { field: String, value: String },

    /// A numeric field fell outside its configured bounds.
    #[error("field '{field}' value {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: i32,
        min: i32,
        max: i32,
    },
}

impl SheetError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn non_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonNumeric {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::NonNumeric { field, .. }
            | Self::OutOfRange { field, .. } => field,
        }
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable across releases; useful for tests and for mapping errors to
    /// UI messages.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "SHEET_MISSING_FIELD",
            Self::NonNumeric { .. } => "SHEET_NON_NUMERIC",
            Self::OutOfRange { .. } => "SHEET_OUT_OF_RANGE",
        }
    }
}

/// Parses a raw field value as an integer.
///
/// Leading and trailing whitespace is ignored. Empty input counts as
/// missing, since an empty text box is the form's way of saying "no value".
pub fn parse_field(field: &str, raw: Option<&str>) -> Result<i32, SheetError> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty());
    let Some(raw) = raw else {
        return Err(SheetError::missing(field));
    };
    raw.parse::<i32>()
        .map_err(|_| SheetError::non_numeric(field, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_accepts_signed_integers() {
        assert_eq!(parse_field("str", Some("14")), Ok(14));
        assert_eq!(parse_field("str", Some(" -3 ")), Ok(-3));
    }

    #[test]
    fn parse_field_reports_missing_and_blank() {
        assert_eq!(parse_field("level", None), Err(SheetError::missing("level")));
        assert_eq!(
            parse_field("level", Some("   ")),
            Err(SheetError::missing("level"))
        );
    }

    #[test]
    fn parse_field_reports_non_numeric() {
        let err = parse_field("dex", Some("twelve")).unwrap_err();
        assert_eq!(err, SheetError::non_numeric("dex", "twelve"));
        assert_eq!(err.error_code(), "SHEET_NON_NUMERIC");
        assert_eq!(err.field(), "dex");
        assert_eq!(err.to_string(), "field 'dex' is not a number: 'twelve'");
    }

    #[test]
    fn fractional_input_is_not_an_integer() {
        assert!(matches!(
            parse_field("level", Some("4.5")),
            Err(SheetError::NonNumeric { .. })
        ));
    }
}
