use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("Type mismatch for '{attribute}': expected {expected}, found {found}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown attribute '{attribute}' on {glyph}")]
    UnknownAttribute {
        glyph: &'static str,
        attribute: String,
    },

    #[error("Invalid value '{value}' for '{attribute}' (allowed: {})", allowed.join(", "))]
    InvalidEnumValue {
        attribute: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Unknown glyph type: {0}")]
    UnknownGlyphType(String),

    #[error("Invalid assignment: {0}")]
    InvalidAssignment(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GlyphError {
    pub(crate) fn mismatch(
        attribute: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        GlyphError::TypeMismatch {
            attribute: attribute.into(),
            expected,
            found,
        }
    }
}

pub type Result<T> = std::result::Result<T, GlyphError>;
