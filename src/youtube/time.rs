use serde::{Deserialize, Serialize};

/// Convert `mm:ss` or `hh:mm:ss` into seconds.
///
/// Any other number of segments, or a segment that isn't a number, is treated as `0`.
/// Components aren't range checked, `1:75` is simply `135`.
pub fn parse_time_to_seconds(time: &str) -> u64 {
    let Some(parts) = time
        .split(':')
        .map(parse_segment)
        .collect::<Option<Vec<u64>>>()
    else {
        return 0;
    };

    match parts[..] {
        [minutes, seconds] => minutes.saturating_mul(60).saturating_add(seconds),
        [hours, minutes, seconds] => hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds),
        _ => 0,
    }
}

// an empty segment counts as zero, so `"1:"` is one minute
fn parse_segment(segment: &str) -> Option<u64> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Some(0);
    }
    segment.parse().ok()
}

/// A clip boundary, given either as plain seconds or as a `mm:ss` / `hh:mm:ss` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Offset {
    Seconds(u64),
    Time(String),
}

impl Offset {
    /// Read a query-string value: a bare number is seconds, anything else a time string.
    pub fn parse(value: &str) -> Offset {
        match value.trim().parse() {
            Ok(seconds) => Offset::Seconds(seconds),
            Err(_) => Offset::Time(value.to_string()),
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            Offset::Seconds(seconds) => *seconds,
            Offset::Time(time) => parse_time_to_seconds(time),
        }
    }
}

impl From<u64> for Offset {
    fn from(seconds: u64) -> Self {
        Offset::Seconds(seconds)
    }
}

impl From<&str> for Offset {
    fn from(time: &str) -> Self {
        Offset::Time(time.to_string())
    }
}

impl From<String> for Offset {
    fn from(time: String) -> Self {
        Offset::Time(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(parse_time_to_seconds("1:20"), 80);
        assert_eq!(parse_time_to_seconds("7:53"), 473);
        assert_eq!(parse_time_to_seconds("09:02"), 542);
    }

    #[test]
    fn hours_minutes_and_seconds() {
        assert_eq!(parse_time_to_seconds("1:02:03"), 3723);
    }

    #[test]
    fn out_of_range_components_are_added_up() {
        assert_eq!(parse_time_to_seconds("1:75"), 135);
        assert_eq!(parse_time_to_seconds("0:90:00"), 5400);
    }

    #[test]
    fn wrong_shape_is_zero() {
        assert_eq!(parse_time_to_seconds("bad"), 0);
        assert_eq!(parse_time_to_seconds("42"), 0);
        assert_eq!(parse_time_to_seconds("1:2:3:4"), 0);
        assert_eq!(parse_time_to_seconds("a:10"), 0);
        assert_eq!(parse_time_to_seconds("-1:10"), 0);
    }

    #[test]
    fn empty_segment_counts_as_zero() {
        assert_eq!(parse_time_to_seconds("2:"), 120);
    }

    #[test]
    fn offset_from_query_value() {
        assert_eq!(Offset::parse("80"), Offset::Seconds(80));
        assert_eq!(Offset::parse("1:20"), Offset::Time("1:20".to_string()));
        assert_eq!(Offset::parse("1:20").seconds(), 80);
    }

    #[test]
    fn offset_accepts_number_or_time() {
        let offset: Offset = serde_json::from_str("95").unwrap();
        assert_eq!(offset.seconds(), 95);

        let offset: Offset = serde_json::from_str("\"2:13\"").unwrap();
        assert_eq!(offset.seconds(), 133);
    }
}
