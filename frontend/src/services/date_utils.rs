use chrono::NaiveDate;

/// Current date in the browser's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Today as the `YYYY-MM-DD` value format of `<input type="date">`,
/// used to prefill date fields.
pub fn today_input_value() -> String {
    today().format("%Y-%m-%d").to_string()
}
