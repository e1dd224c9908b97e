//! Local-midnight anchoring across daylight-saving changes.
//!
//! Every test in this binary pins `TZ` to the same zone before the first
//! conversion, so the process never observes another value.

use std::{path::Path, sync::Once};

use confdata_core::{DataType, DateAnchor, NativeValue, TypedValue, convert, to_instant};
use time::{OffsetDateTime, macros::datetime};

const ZONE: &str = "Europe/Oslo";

static PIN_TZ: Once = Once::new();

/// Returns false when the zone database is not installed.
fn pin_zone() -> bool {
    PIN_TZ.call_once(|| {
        // SAFETY: runs exactly once, before any test in this binary reads the environment.
        unsafe { std::env::set_var("TZ", ZONE) };
    });
    Path::new("/usr/share/zoneinfo").join(ZONE).exists()
}

fn instant(raw: &str) -> OffsetDateTime {
    to_instant(DataType::Date, raw).unwrap()
}

#[test]
fn winter_date_uses_standard_time() {
    if !pin_zone() {
        return;
    }
    assert_eq!(instant("2024-01-15"), datetime!(2024-01-15 0:00 +1));
    assert_eq!(instant("2024-01-15").offset().whole_hours(), 1);
}

#[test]
fn summer_date_uses_daylight_time() {
    if !pin_zone() {
        return;
    }
    assert_eq!(instant("2024-07-15"), datetime!(2024-07-15 0:00 +2));
    assert_eq!(instant("15/07/2024").offset().whole_hours(), 2);
}

#[test]
fn days_around_the_spring_change() {
    if !pin_zone() {
        return;
    }
    // Clocks go forward at 02:00 on 2024-03-31; midnight of that day is still winter time.
    assert_eq!(instant("2024-03-31").offset().whole_hours(), 1);
    assert_eq!(instant("2024-04-01").offset().whole_hours(), 2);
    assert_eq!(instant("2024-10-27").offset().whole_hours(), 2);
    assert_eq!(instant("2024-10-28").offset().whole_hours(), 1);
}

#[test]
fn typed_values_follow_the_same_rule() {
    if !pin_zone() {
        return;
    }
    let winter = TypedValue::parse("DATE", "01/02/2023").unwrap().converted().unwrap();
    assert_eq!(
        winter.native(),
        Some(&NativeValue::Instant(datetime!(2023-02-01 0:00 +1)))
    );
    assert_eq!(
        convert(DataType::Date, "2023-08-01"),
        Ok(NativeValue::Instant(datetime!(2023-08-01 0:00 +2)))
    );
}

#[test]
fn utc_anchor_ignores_the_zone() {
    if !pin_zone() {
        return;
    }
    assert_eq!(
        DateAnchor::Utc.offset_on(time::macros::date!(2024 - 07 - 15)),
        time::UtcOffset::UTC
    );
}
