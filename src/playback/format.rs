/// Render seconds as `m:ss`. Minutes are not wrapped into hours.
///
/// Negative and non-finite inputs render as `0:00`.
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// `"<current> / <duration>"`; an unknown duration renders as `0:00`.
pub fn format_progress(current: f64, duration: Option<f64>) -> String {
    format!(
        "{} / {}",
        format_time(current),
        format_time(duration.unwrap_or(0.0))
    )
}

#[cfg(test)]
#[path = "../../tests/unit/playback/format.rs"]
mod tests;
