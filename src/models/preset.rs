/// Quick filter currently narrowing the displayed timetable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    AllTrains,
    MorningOnly,
    EveningOnly,
    PeakHours,
}

impl Preset {
    /// Label shown on the status line
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AllTrains => "All Trains",
            Self::MorningOnly => "Morning Only",
            Self::EveningOnly => "Evening Only",
            Self::PeakHours => "Peak Hours",
        }
    }

    /// Label shown on the preset button; the reset preset reads "Show All"
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::AllTrains => "Show All",
            other => other.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_trains() {
        assert_eq!(Preset::default(), Preset::AllTrains);
        assert_eq!(Preset::default().label(), "All Trains");
    }
}
