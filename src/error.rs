use thiserror::Error;

/// Errors surfaced while consuming a variation sequence.
///
/// Building a sequence never fails; these show up as `Err` items during
/// iteration, after which the sequence ends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariationError {
    /// The transform rejected a component.
    #[error("transform failed on component '{component}': {reason}")]
    InvalidTransform { component: String, reason: String },

    /// Input that cannot be split or stitched (e.g. an empty delimiter).
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
}

impl VariationError {
    pub(crate) fn empty_delimiter() -> Self {
        VariationError::MalformedInput {
            reason: "split delimiter must not be empty".to_string(),
        }
    }
}

pub type Result<T, E = VariationError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = VariationError::InvalidTransform {
            component: "cost".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "transform failed on component 'cost': boom");
        assert_eq!(
            VariationError::empty_delimiter().to_string(),
            "malformed input: split delimiter must not be empty"
        );
    }
}
