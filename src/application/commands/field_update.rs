// src/application/commands/field_update.rs

/// One field of a partial update, keeping "not sent" apart from "sent empty".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate {
    #[default]
    Unset,
    /// Sent, but empty or whitespace only.
    Blank,
    Value(String),
}

impl FieldUpdate {
    pub fn value(value: impl Into<String>) -> Self {
        Self::from(Some(value.into()))
    }

    /// New value if one was sent, otherwise `current`. Blank counts as not sent.
    pub fn or_keep(self, current: impl Into<String>) -> String {
        match self.normalized() {
            Self::Value(value) => value,
            Self::Unset | Self::Blank => current.into(),
        }
    }

    /// Like [`FieldUpdate::or_keep`] for optional fields, except that blank clears.
    pub fn or_keep_optional(self, current: Option<String>) -> Option<String> {
        match self.normalized() {
            Self::Value(value) => Some(value),
            Self::Blank => None,
            Self::Unset => current,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::Value(value) if !value.trim().is_empty() => Some(value),
            Self::Value(_) | Self::Unset | Self::Blank => None,
        }
    }

    // `Value` can be built directly, so whitespace is reclassified here too.
    fn normalized(self) -> Self {
        match self {
            Self::Value(value) if value.trim().is_empty() => Self::Blank,
            other => other,
        }
    }
}

impl From<Option<String>> for FieldUpdate {
    fn from(input: Option<String>) -> Self {
        match input {
            None => Self::Unset,
            Some(value) if value.trim().is_empty() => Self::Blank,
            Some(value) => Self::Value(value),
        }
    }
}
