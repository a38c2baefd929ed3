use chrono::DateTime;

/// Get current local date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year as u32, month as u32, day as u32)
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`; anything unparsable is shown as-is
pub fn format_timestamp(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}
