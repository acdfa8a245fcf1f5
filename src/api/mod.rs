mod config;
mod stations;
mod timetables;

pub use stations::fetch_stations;
pub use timetables::fetch_timetables_for_day;

use serde::de::DeserializeOwned;

/// Issue a GET against the hosted query service and decode the JSON body
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// ok, or the body cannot be deserialized.
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = reqwest::Client::new()
        .get(url)
        .header("apikey", config::anon_key())
        .bearer_auth(config::anon_key())
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.status().is_success() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to deserialize: {e}"))
}

fn rest_url(table_and_query: &str) -> String {
    format!("{}/rest/v1/{table_and_query}", config::base_url())
}
