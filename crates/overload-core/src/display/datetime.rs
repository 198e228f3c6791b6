//! Timestamp formatting in the local timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a server timestamp as `YYYY-MM-DD HH:MM TZ` in the system
/// timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_date_time_shape() {
        let timestamp = Timestamp::from_second(1_700_000_000).unwrap();
        let output = LocalDateTime(&timestamp).to_string();

        let (date, rest) = output.split_once(' ').unwrap();
        assert_eq!(date.len(), 10);
        assert_eq!(date.matches('-').count(), 2);
        assert_eq!(rest.split_once(' ').unwrap().0.len(), 5);
    }
}
