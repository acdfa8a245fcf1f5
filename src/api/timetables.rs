use crate::models::TimetableEntry;

/// Columns for the timetable query, with route endpoints resolved through
/// their foreign keys into nested station objects
const TIMETABLE_SELECT: &str = "id,route_id,departure_time,arrival_time,days_active,\
     routes(start_station:stations!routes_start_station_id_fkey(id,name),\
     end_station:stations!routes_end_station_id_fkey(id,name))";

/// Fetch every timetable row active on the given day
///
/// The day token is matched server-side as a case-insensitive substring of
/// `days_active`; station filtering happens client-side afterwards.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// ok, or the response body cannot be deserialized.
pub async fn fetch_timetables_for_day(day_token: &str) -> Result<Vec<TimetableEntry>, String> {
    let query = format!(
        "timetables?select={TIMETABLE_SELECT}&days_active=ilike.*{day_token}*"
    );
    super::get_json(&super::rest_url(&query)).await
}
