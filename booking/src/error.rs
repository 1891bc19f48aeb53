use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Catalog request failed: {0}")]
    Transport(String),

    #[error("Catalog returned HTTP {0}")]
    Status(u16),

    #[error("Catalog response could not be decoded: {0}")]
    Decode(String),
}

impl From<BookingError> for String {
    fn from(err: BookingError) -> Self {
        err.to_string()
    }
}

/// A single field that failed validation. `field` is the wire key, using a
/// dotted path for nested address parts (e.g. `address.city`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors produced by one step advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) need attention", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// First message reported for `field`, if any.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn has(&self, field: &str) -> bool {
        self.message_for(field).is_some()
    }

    /// Drop every message for `field`, e.g. once the user has fixed it.
    pub fn clear_field(&mut self, field: &str) {
        self.errors.retain(|e| e.field != field);
    }
}
