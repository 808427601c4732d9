//! Time formatting helpers.

use mintdesk_types::Timestamp;

/// Format how long ago `then` was, relative to `now`.
///
/// Used when listing submissions: staff care about coarse age, not exact
/// timestamps.
pub fn format_age(then: Timestamp, now: Timestamp) -> String {
    let secs = now.as_secs().saturating_sub(then.as_secs());
    if secs < 60 {
        format!("{secs}s ago")
    } else if secs < 3600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86400 {
        format!("{}h ago", secs / 3600)
    } else {
        format!("{}d ago", secs / 86400)
    }
}
