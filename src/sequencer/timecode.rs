// Timecode - fixed-width clock text at the editor boundary
// 100 time steps per second, field boundaries at 60

use std::num::ParseIntError;

/// Time steps per displayed second
pub const STEPS_PER_SECOND: i64 = 100;

/// Time steps per displayed minute
pub const STEPS_PER_MINUTE: i64 = 60 * STEPS_PER_SECOND;

/// Time steps per displayed hour
pub const STEPS_PER_HOUR: i64 = 60 * STEPS_PER_MINUTE;

/// Reasons user time text is rejected
///
/// Surfaced to the editor as-is; a malformed entry never silently reads
/// as zero and never reaches the clock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    #[error("empty time entry")]
    Empty,

    #[error("too many fields in time entry: {0} (expected at most 3)")]
    TooManyFields(usize),

    #[error("invalid number {text:?} in time entry")]
    InvalidField {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Format a time step count as `HH:MM:SS`
///
/// Each field is two digits; the hour field grows past 99 instead of
/// wrapping. The seconds field is the finest one shown, so the sub-second
/// remainder (`t % 100`) does not survive a trip through the display:
/// `parse(&format(t))` recovers `t` exactly when `t` sits on the 100-step
/// grid and rounds down to it otherwise.
///
/// Two-digit fields cannot encode a sign, so negative times clamp to
/// `00:00:00` here while the clock keeps the real value. With the clamp in
/// place every division below runs on non-negative operands and truncating
/// division agrees with floor division.
pub fn format(t: i64) -> String {
    let t = t.max(0);
    format!(
        "{:02}:{:02}:{:02}",
        t / STEPS_PER_HOUR,
        (t / STEPS_PER_MINUTE) % 60,
        (t / STEPS_PER_SECOND) % 60
    )
}

/// Parse user time text back into a time step count
///
/// Fields split on `:` or whitespace. Missing trailing fields read as 0,
/// so `"5"` is five hours and `"1:30"` an hour and a half. A non-numeric
/// field is an error, never coerced to 0.
pub fn parse(text: &str) -> Result<i64, TimecodeError> {
    let fields: Vec<&str> = text
        .split(|c: char| c == ':' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();

    if fields.is_empty() {
        return Err(TimecodeError::Empty);
    }
    if fields.len() > 3 {
        return Err(TimecodeError::TooManyFields(fields.len()));
    }

    let mut total = 0i64;
    let units = [STEPS_PER_HOUR, STEPS_PER_MINUTE, STEPS_PER_SECOND];
    for (field, unit) in fields.iter().zip(units) {
        let value: i64 = field.parse().map_err(|source| TimecodeError::InvalidField {
            text: (*field).to_string(),
            source,
        })?;
        // Absurdly large entries pin to the end of the timeline instead of
        // wrapping
        total = total.saturating_add(value.saturating_mul(unit));
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zero() {
        assert_eq!(format(0), "00:00:00");
    }

    #[test]
    fn test_format_field_boundaries() {
        assert_eq!(format(99), "00:00:00");
        assert_eq!(format(100), "00:00:01");
        assert_eq!(format(5_999), "00:00:59");
        assert_eq!(format(6_000), "00:01:00");
        assert_eq!(format(6_125), "00:01:01");
        assert_eq!(format(359_999), "00:59:59");
        assert_eq!(format(360_000), "01:00:00");
    }

    #[test]
    fn test_format_hours_grow_past_two_digits() {
        assert_eq!(format(100 * STEPS_PER_HOUR), "100:00:00");
    }

    #[test]
    fn test_format_clamps_negative_to_zero() {
        assert_eq!(format(-1), "00:00:00");
        assert_eq!(format(-360_000), "00:00:00");
    }

    #[test]
    fn test_parse_full_entry() {
        assert_eq!(parse("01:02:03"), Ok(372_300));
        assert_eq!(parse("00:00:00"), Ok(0));
    }

    #[test]
    fn test_parse_pads_missing_trailing_fields() {
        assert_eq!(parse("5"), Ok(5 * STEPS_PER_HOUR));
        assert_eq!(parse("1:30"), Ok(STEPS_PER_HOUR + 30 * STEPS_PER_MINUTE));
    }

    #[test]
    fn test_parse_accepts_whitespace_separators() {
        assert_eq!(parse("01 02 03"), Ok(372_300));
        assert_eq!(parse(" 01 : 02 : 03 "), Ok(372_300));
    }

    #[test]
    fn test_parse_rejects_garbage_field() {
        assert!(matches!(
            parse("aa:00:00"),
            Err(TimecodeError::InvalidField { text, .. }) if text == "aa"
        ));
        assert!(matches!(
            parse("1:2x:3"),
            Err(TimecodeError::InvalidField { text, .. }) if text == "2x"
        ));
    }

    #[test]
    fn test_parse_rejects_empty_entry() {
        assert_eq!(parse(""), Err(TimecodeError::Empty));
        assert_eq!(parse("   "), Err(TimecodeError::Empty));
    }

    #[test]
    fn test_parse_rejects_extra_fields() {
        assert_eq!(parse("1:2:3:4"), Err(TimecodeError::TooManyFields(4)));
    }

    #[test]
    fn test_round_trip_on_the_second_grid() {
        for t in [0, 100, 5_900, 6_000, 360_000, 372_300, 8_639_900] {
            assert_eq!(parse(&format(t)), Ok(t), "round-trip failed for {t}");
        }
    }

    #[test]
    fn test_round_trip_truncates_below_a_second() {
        // The display has no sub-second field, so off-grid times round
        // down to the previous second on the way back
        assert_eq!(parse(&format(6_125)), Ok(6_100));
        assert_eq!(parse(&format(99)), Ok(0));
    }
}
