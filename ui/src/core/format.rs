//! Formatting helpers for chart labels and export stamps.

use time::{macros::format_description, Date, OffsetDateTime, UtcOffset};

/// Two fixed decimals, as shown in tooltips and the average overlay.
pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// `DD.MM.YYYY`, the Turkish short date layout.
pub fn format_date_tr(date: Date) -> String {
    date.format(&format_description!("[day].[month].[year]"))
        .unwrap_or_else(|_| "—".to_string())
}

/// Calendar date of `now` at `offset`, or the UTC date when the offset is unknown.
pub fn local_date(now: OffsetDateTime, offset: Option<UtcOffset>) -> Date {
    match offset {
        Some(offset) => now.to_offset(offset).date(),
        None => now.date(),
    }
}

/// Today's date in the user's time zone.
pub fn today_local() -> Date {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        let year = i32::try_from(now.get_full_year()).ok();
        if let (Some(year), Some(month), Some(day)) = (year, month, day) {
            if let Ok(date) = Date::from_calendar_date(year, month, day) {
                return date;
            }
        }
        local_date(OffsetDateTime::now_utc(), None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        local_date(
            OffsetDateTime::now_utc(),
            UtcOffset::current_local_offset().ok(),
        )
    }
}
