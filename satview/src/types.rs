use alloc::string::String;
use core::ops::Range;

/// Identifier type used when a row is keyed by its catalog id.
pub type RowKey = String;

/// The rows that must be materialized for the current scroll position.
///
/// `start_index..end_index` is half-open and already includes the buffer on both sides.
/// `first_visible` is the unbuffered index of the row under the top edge of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub first_visible: usize,
}

impl RowWindow {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        first_visible: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }

    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }
}

/// A row that is currently materialized, with its absolute position inside the spacer.
#[derive(Debug)]
pub struct RenderedRow<'a, R> {
    pub index: usize,
    /// Offset from the top of the spacer (`index * row_height`).
    pub top: u64,
    pub height: u32,
    pub row: &'a R,
    pub selected: bool,
}

impl<R> Clone for RenderedRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RenderedRow<'_, R> {}

/// Why a selection toggle was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    AtCapacity,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AtCapacity => "AT_CAPACITY",
        }
    }
}

/// Result of [`crate::SelectionSet::toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ToggleOutcome {
    Added,
    Removed,
    Rejected(RejectReason),
}

impl ToggleOutcome {
    pub fn applied(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }

    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Rejected(reason) => Some(*reason),
            _ => None,
        }
    }
}
