use serde::{Deserialize, Serialize};

use super::Station;

/// Route endpoints embedded by the timetable query's foreign-key select
///
/// Either side can be missing on a malformed remote row; such rows never
/// match an active station filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RouteEndpoints {
    pub start_station: Option<Station>,
    pub end_station: Option<Station>,
}

/// One scheduled service as returned by the timetable query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: i64,
    pub route_id: i64,
    pub departure_time: String,
    pub arrival_time: String,
    pub days_active: String,
    pub routes: Option<RouteEndpoints>,
}

impl TimetableEntry {
    /// Id of the resolved origin station, if the row carries one
    #[must_use]
    pub fn start_station_id(&self) -> Option<i64> {
        self.routes
            .as_ref()
            .and_then(|r| r.start_station.as_ref())
            .map(|s| s.id)
    }

    /// Id of the resolved destination station, if the row carries one
    #[must_use]
    pub fn end_station_id(&self) -> Option<i64> {
        self.routes
            .as_ref()
            .and_then(|r| r.end_station.as_ref())
            .map(|s| s.id)
    }

    /// Origin station name for display
    #[must_use]
    pub fn start_station_name(&self) -> &str {
        self.routes
            .as_ref()
            .and_then(|r| r.start_station.as_ref())
            .map_or("\u{2014}", |s| s.name.as_str())
    }

    /// Destination station name for display
    #[must_use]
    pub fn end_station_name(&self) -> &str {
        self.routes
            .as_ref()
            .and_then(|r| r.end_station.as_ref())
            .map_or("\u{2014}", |s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_embedded_route() {
        let json = r#"{
            "id": 7,
            "route_id": 2,
            "departure_time": "06:15:00",
            "arrival_time": "07:05:00",
            "days_active": "MonTueWed",
            "routes": {
                "start_station": {"id": 1, "name": "Cape Town"},
                "end_station": {"id": 4, "name": "Bellville"}
            }
        }"#;
        let entry: TimetableEntry = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(entry.start_station_id(), Some(1));
        assert_eq!(entry.end_station_id(), Some(4));
        assert_eq!(entry.start_station_name(), "Cape Town");
        assert_eq!(entry.end_station_name(), "Bellville");
    }

    #[test]
    fn test_missing_route_embedding() {
        let json = r#"{
            "id": 8,
            "route_id": 9,
            "departure_time": "06:15:00",
            "arrival_time": "07:05:00",
            "days_active": "Sat",
            "routes": null
        }"#;
        let entry: TimetableEntry = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(entry.start_station_id(), None);
        assert_eq!(entry.end_station_id(), None);
        assert_eq!(entry.start_station_name(), "\u{2014}");
    }
}
