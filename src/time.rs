use chrono::NaiveTime;

/// Parse a wall-clock time string in HH:MM:SS or HH:MM format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time of day.
pub fn parse_wall_clock(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
}

/// Format a stored 24-hour time string for display in 12-hour form
///
/// "08:30:00" becomes "8:30 AM". Unparseable strings are shown as-is rather
/// than hiding the row.
#[must_use]
pub fn format_time_12h(s: &str) -> String {
    match parse_wall_clock(s) {
        Ok(time) => time.format("%-I:%M %p").to_string(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_wall_clock_hms() {
        let time = parse_wall_clock("08:30:45").expect("should parse");
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.second(), 45);
    }

    #[test]
    fn test_parse_wall_clock_hm() {
        let time = parse_wall_clock("17:05").expect("should parse");
        assert_eq!(time.hour(), 17);
        assert_eq!(time.minute(), 5);
        assert_eq!(time.second(), 0);
    }

    #[test]
    fn test_parse_wall_clock_midnight() {
        let time = parse_wall_clock("00:00:00").expect("should parse");
        assert_eq!(time.hour(), 0);
    }

    #[test]
    fn test_parse_wall_clock_invalid_hour() {
        assert!(parse_wall_clock("25:00:00").is_err());
    }

    #[test]
    fn test_parse_wall_clock_invalid_minute() {
        assert!(parse_wall_clock("12:60:00").is_err());
    }

    #[test]
    fn test_parse_wall_clock_empty_string() {
        assert!(parse_wall_clock("").is_err());
    }

    #[test]
    fn test_parse_wall_clock_garbage() {
        assert!(parse_wall_clock("noon").is_err());
    }

    #[test]
    fn test_format_time_12h_morning() {
        assert_eq!(format_time_12h("08:30:00"), "8:30 AM");
    }

    #[test]
    fn test_format_time_12h_afternoon() {
        assert_eq!(format_time_12h("16:45:00"), "4:45 PM");
    }

    #[test]
    fn test_format_time_12h_midnight() {
        assert_eq!(format_time_12h("00:15:00"), "12:15 AM");
    }

    #[test]
    fn test_format_time_12h_noon() {
        assert_eq!(format_time_12h("12:00:00"), "12:00 PM");
    }

    #[test]
    fn test_format_time_12h_unparseable_passthrough() {
        assert_eq!(format_time_12h("??:??"), "??:??");
    }
}
