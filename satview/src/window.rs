use crate::{RowWindow, WindowError};

/// Inputs for [`compute_window`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowParams {
    pub scroll_offset: u64,
    pub row_height: u32,
    pub viewport_height: u32,
    pub total_count: usize,
    /// Extra rows materialized above and below the visible rows.
    pub buffer_size: usize,
}

/// Computes the range of rows to materialize for a fixed-height list.
///
/// - `start_index = max(0, floor(scroll_offset / row_height) - buffer_size)`
/// - `end_index = min(total_count, floor(scroll_offset / row_height) + ceil(viewport_height / row_height) + buffer_size)`
///
/// The result is pure: the same inputs always give the same range. An offset past the end of
/// the list yields an empty range at the tail rather than `start_index > end_index`.
///
/// Returns an error when `row_height` or `viewport_height` is zero.
pub fn compute_window(params: WindowParams) -> Result<RowWindow, WindowError> {
    validate_geometry(params.row_height, params.viewport_height)?;
    Ok(window_unchecked(params))
}

pub(crate) fn validate_geometry(row_height: u32, viewport_height: u32) -> Result<(), WindowError> {
    if row_height == 0 {
        return Err(WindowError::ZeroRowHeight);
    }
    if viewport_height == 0 {
        return Err(WindowError::ZeroViewportHeight);
    }
    Ok(())
}

/// Same as [`compute_window`] for geometry that was already validated.
pub(crate) fn window_unchecked(params: WindowParams) -> RowWindow {
    let count = params.total_count;
    if count == 0 {
        return RowWindow::EMPTY;
    }

    let row = params.scroll_offset / u64::from(params.row_height);
    let first = usize::try_from(row).unwrap_or(usize::MAX);
    let visible_count = params.viewport_height.div_ceil(params.row_height) as usize;

    let end = first
        .saturating_add(visible_count)
        .saturating_add(params.buffer_size)
        .min(count);
    let start = first.saturating_sub(params.buffer_size).min(end);

    RowWindow {
        start_index: start,
        end_index: end,
        first_visible: first.min(count),
    }
}
