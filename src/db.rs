use time::{OffsetDateTime, UtcOffset};

/// Encodes a timestamp as the TEXT stored in SQLite: RFC 3339 in UTC
/// with exactly nine subsecond digits. The fixed width keeps
/// lexicographic TEXT order chronological; a trimmed fraction would
/// sort `...00Z` after `...00.2Z`.
pub fn datetime_text(ts: OffsetDateTime) -> String {
    let utc = ts.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}Z",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second(),
        utc.nanosecond()
    )
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn pads_subseconds_to_fixed_width() {
        assert_eq!(
            datetime_text(datetime!(2024-03-07 12:00:00 UTC)),
            "2024-03-07T12:00:00.000000000Z"
        );
        assert_eq!(
            datetime_text(datetime!(2024-03-07 12:00:00.2 UTC)),
            "2024-03-07T12:00:00.200000000Z"
        );
    }

    #[test]
    fn text_order_matches_chronological_order() {
        let whole = datetime_text(datetime!(2024-03-07 12:00:00 UTC));
        let fractional = datetime_text(datetime!(2024-03-07 12:00:00.2 UTC));
        assert!(whole < fractional);
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        assert_eq!(
            datetime_text(datetime!(2024-03-07 14:00:00 +02:00)),
            "2024-03-07T12:00:00.000000000Z"
        );
    }
}
