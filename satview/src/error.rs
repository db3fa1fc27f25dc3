use alloc::string::String;

/// Geometry passed to the row window was unusable.
///
/// This is a caller bug, not a runtime condition: list geometry is validated when a
/// [`crate::VirtualList`] is configured so the scroll path itself never fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    #[error("row height must be greater than zero")]
    ZeroRowHeight,
    #[error("viewport height must be greater than zero")]
    ZeroViewportHeight,
}

/// Persisted selection data could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("malformed persisted selection: {reason}")]
pub struct MalformedState {
    pub reason: String,
}

impl MalformedState {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
