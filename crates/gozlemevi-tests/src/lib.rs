//! Shared fixtures for the cross-crate scenario tests.

use chrono::{Local, TimeZone};
use gozlemevi_store::{FixedClock, Wish};

/// Clock frozen at noon on the given day.
pub fn clock_on(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock(
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .expect("unambiguous local noon"),
    )
}

pub fn wish(id: &str, name: &str, date: &str) -> Wish {
    Wish {
        id: id.to_owned(),
        name: name.to_owned(),
        message: format!("{name} dilek tutar"),
        image: None,
        date: date.to_owned(),
        timestamp: 0,
    }
}
