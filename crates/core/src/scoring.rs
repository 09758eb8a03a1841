//! Scoring module - line-clear points, level thresholds and fall speed
//!
//! - A batch of `n` cleared lines earns `LINE_SCORES[min(n, 4)] * level`.
//! - The level rises each time the score reaches `level * threshold`.
//! - The fall interval starts at the base interval on level 1 and speeds up by
//!   100ms per level, then by 50ms once it is at or under 100ms, never going
//!   below `MIN_TICK_LENGTH_MS`.

use crate::types::{LINE_SCORES, MIN_TICK_LENGTH_MS};

/// Calculate points for clearing `lines` rows at once on `level`
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Number of level-ups earned by reaching `score` while on `level`
pub fn levels_gained(score: u32, level: u32, threshold: u32) -> u32 {
    if threshold == 0 {
        return 0;
    }
    let mut next = level;
    while score >= next.saturating_mul(threshold) {
        next += 1;
    }
    next - level
}

/// Get fall interval for a level (in milliseconds)
pub fn tick_interval_ms(level: u32, base_ms: u32) -> u32 {
    let mut interval = base_ms;
    for _ in 1..level {
        if interval > 100 {
            interval -= 100;
        } else if interval > MIN_TICK_LENGTH_MS {
            interval -= 50;
        } else {
            break;
        }
    }
    interval.max(MIN_TICK_LENGTH_MS.min(base_ms))
}
