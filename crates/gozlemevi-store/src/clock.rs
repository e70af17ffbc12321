use chrono::{DateTime, Local, NaiveDate};

/// Day format shown to visitors and used as the archive grouping key.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Source of the wall-clock instant stamped onto new wishes.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Display string of the current day.
    fn today(&self) -> String {
        display_date(self.now().date_naive())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Parses a `dd.mm.yyyy` display string back into a calendar day.
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DISPLAY_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_date_is_zero_padded_day_month_year() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(display_date(date), "07.03.2026");
    }

    #[test]
    fn parse_accepts_display_format_only() {
        assert_eq!(
            parse_display_date("18.10.2026"),
            NaiveDate::from_ymd_opt(2026, 10, 18)
        );
        assert_eq!(parse_display_date("2026-10-18"), None);
        assert_eq!(parse_display_date("yesterday"), None);
    }

    #[test]
    fn fixed_clock_reports_its_day() {
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap());
        assert_eq!(clock.today(), "18.10.2026");
    }
}
