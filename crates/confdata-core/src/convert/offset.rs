use chrono::{Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use time::{Date, UtcOffset};
use tracing::debug;

/// Local UTC offset in effect at midnight of `date`.
///
/// Resolved against the system time zone rules (honouring `TZ`) for that
/// particular day, so a winter date and a summer date may get different
/// offsets. Safe to call from any thread.
///
/// - Midnight repeated by a backward transition: the earlier (pre-transition) offset.
/// - Midnight skipped by a forward transition: the offset the wall clock read
///   just before the gap, so the instant lands on the transition itself.
pub fn local_offset_on(date: Date) -> UtcOffset {
    let Some(day) = NaiveDate::from_ymd_opt(date.year(), u8::from(date.month()).into(), date.day().into())
    else {
        debug!(%date, "date outside the local time zone range, anchoring at UTC");
        return UtcOffset::UTC;
    };
    let midnight = day.and_time(NaiveTime::MIN);

    let seconds = match Local.from_local_datetime(&midnight) {
        LocalResult::Single(at) => at.offset().local_minus_utc(),
        LocalResult::Ambiguous(earliest, _) => earliest.offset().local_minus_utc(),
        // Walk back to the last wall time before the gap.
        LocalResult::None => (1..=96)
            .map(|quarter| midnight - Duration::minutes(15 * quarter))
            .find_map(|before| Local.from_local_datetime(&before).latest())
            .map(|at| at.offset().local_minus_utc())
            .unwrap_or_else(|| Local.offset_from_utc_datetime(&midnight).local_minus_utc()),
    };

    UtcOffset::from_whole_seconds(seconds).unwrap_or_else(|_| {
        debug!(seconds, "local offset out of range, anchoring at UTC");
        UtcOffset::UTC
    })
}
