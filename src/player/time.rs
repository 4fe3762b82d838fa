//! Time label formatting

use crate::utils::finite_or_zero;

/// Format a position in seconds as `M:SS`
///
/// Whether the seconds component is rounded or truncated depends on the
/// *duration's* sub-second remainder: 500 ms or more rounds, less truncates.
/// The same rule applies to every label of a given media, so a rounded
/// seconds component of 59.5 or more shows as `60`.
pub fn display_time(time: f64, duration: f64) -> String {
    let time = finite_or_zero(time).max(0.0);

    // NaN for unknown durations, which compares false and truncates
    let millis_remainder = (duration * 1000.0) % 1000.0;

    let secs = time % 60.0;
    let seconds = if millis_remainder >= 500.0 {
        secs.round()
    } else {
        secs.floor()
    };
    let minutes = (time / 60.0).floor();

    format!("{}:{:02}", minutes as u64, seconds as u64)
}
