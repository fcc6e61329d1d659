use thiserror::Error;

/// Raised when a transform is asked to map a value it is not defined for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{value} * {factor} does not fit in an i32")]
    Overflow { value: i32, factor: i32 },

    #[error("transform is undefined at {value}: {reason}")]
    Undefined { value: i32, reason: String },
}

impl DomainError {
    pub fn overflow(value: i32, factor: i32) -> Self {
        Self::Overflow { value, factor }
    }

    pub fn undefined(value: i32, reason: impl Into<String>) -> Self {
        Self::Undefined {
            value,
            reason: reason.into(),
        }
    }

    /// The input the transform rejected.
    pub fn value(&self) -> i32 {
        match self {
            Self::Overflow { value, .. } | Self::Undefined { value, .. } => *value,
        }
    }
}
