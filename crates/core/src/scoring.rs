//! Scoring module - fixed-value line clear and drop scoring
//!
//! Line clears award a fixed amount per burst (never scaled by level). Level is
//! tracked for display only and does not change gravity.

use crate::types::{
    HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, LINE_SCORE_FALLBACK, SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows in a single pass
///
/// ```
/// use term_tetris_core::line_clear_points;
///
/// assert_eq!(line_clear_points(1), 100);
/// assert_eq!(line_clear_points(4), 800);
/// assert_eq!(line_clear_points(5), 100);
/// ```
pub fn line_clear_points(lines: u32) -> u32 {
    match lines {
        0 => 0,
        n => LINE_SCORES
            .get(n as usize)
            .copied()
            .unwrap_or(LINE_SCORE_FALLBACK),
    }
}

/// Points for a manual soft drop of `rows` rows
pub fn soft_drop_points(rows: u32) -> u32 {
    rows.saturating_mul(SOFT_DROP_POINTS)
}

/// Points for a hard drop that descended `rows` rows
pub fn hard_drop_points(rows: u32) -> u32 {
    rows.saturating_mul(HARD_DROP_POINTS)
}

/// Level reached after clearing `total_lines` lines (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}
