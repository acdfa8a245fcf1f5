use crate::models::Station;

/// Fetch the full station directory (id and name only)
///
/// Issued once at startup; the directory is never re-fetched.
///
/// # Errors
///
/// Returns an error if the HTTP request fails, the response status is not
/// ok, or the response body cannot be deserialized.
pub async fn fetch_stations() -> Result<Vec<Station>, String> {
    super::get_json(&super::rest_url("stations?select=id,name")).await
}
