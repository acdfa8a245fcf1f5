use chrono::Weekday;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DaysOfWeek: u8 {
        const MONDAY    = 0b0000_0001;
        const TUESDAY   = 0b0000_0010;
        const WEDNESDAY = 0b0000_0100;
        const THURSDAY  = 0b0000_1000;
        const FRIDAY    = 0b0001_0000;
        const SATURDAY  = 0b0010_0000;
        const SUNDAY    = 0b0100_0000;
        const ALL_DAYS  = Self::MONDAY.bits() | Self::TUESDAY.bits() | Self::WEDNESDAY.bits()
                        | Self::THURSDAY.bits() | Self::FRIDAY.bits() | Self::SATURDAY.bits()
                        | Self::SUNDAY.bits();
        const WEEKDAYS  = Self::MONDAY.bits() | Self::TUESDAY.bits() | Self::WEDNESDAY.bits()
                        | Self::THURSDAY.bits() | Self::FRIDAY.bits();
        const WEEKENDS  = Self::SATURDAY.bits() | Self::SUNDAY.bits();
    }
}

const TOKEN_TABLE: [(DaysOfWeek, &str); 7] = [
    (DaysOfWeek::MONDAY, "Mon"),
    (DaysOfWeek::TUESDAY, "Tue"),
    (DaysOfWeek::WEDNESDAY, "Wed"),
    (DaysOfWeek::THURSDAY, "Thu"),
    (DaysOfWeek::FRIDAY, "Fri"),
    (DaysOfWeek::SATURDAY, "Sat"),
    (DaysOfWeek::SUNDAY, "Sun"),
];

impl DaysOfWeek {
    /// Decode a `days_active` token string such as "Mon" or "MonWedFri"
    ///
    /// Each 3-letter day token present as a case-insensitive substring
    /// contributes its bit; any other text contributes nothing.
    #[must_use]
    pub fn from_token_string(s: &str) -> Self {
        let lower = s.to_ascii_lowercase();
        let mut days = Self::empty();
        for (day, token) in TOKEN_TABLE {
            if lower.contains(&token.to_ascii_lowercase()) {
                days |= day;
            }
        }
        days
    }

    /// The single-day set for a calendar weekday
    #[must_use]
    pub const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::MONDAY,
            Weekday::Tue => Self::TUESDAY,
            Weekday::Wed => Self::WEDNESDAY,
            Weekday::Thu => Self::THURSDAY,
            Weekday::Fri => Self::FRIDAY,
            Weekday::Sat => Self::SATURDAY,
            Weekday::Sun => Self::SUNDAY,
        }
    }

    /// Whether this set runs on exactly one day: the given weekday
    #[must_use]
    pub fn is_exactly(self, weekday: Weekday) -> bool {
        self == Self::from_weekday(weekday)
    }

    /// Check if all days are enabled
    #[must_use]
    pub const fn is_all_days(self) -> bool {
        self.bits() == Self::ALL_DAYS.bits()
    }

    /// Get a human-readable string representation
    #[must_use]
    pub fn to_display_string(self) -> String {
        if self.is_all_days() {
            return "All days".to_string();
        }
        if self == Self::WEEKDAYS {
            return "Weekdays".to_string();
        }
        if self == Self::WEEKENDS {
            return "Weekends".to_string();
        }

        let mut days = Vec::new();
        for (day, token) in TOKEN_TABLE {
            if self.contains(day) {
                days.push(token);
            }
        }
        days.join(", ")
    }
}

/// Short 3-letter token for a weekday, as stored in `days_active`
#[must_use]
pub const fn weekday_token(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Full weekday name for selector labels
#[must_use]
pub const fn weekday_long_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
