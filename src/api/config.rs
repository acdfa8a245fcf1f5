/// Build-time configuration for the hosted database
///
/// Both values are baked into the bundle (they are the public anon-role
/// credentials, not secrets) and can be overridden per deployment via
/// environment variables at build time.
const DEFAULT_BASE_URL: &str = "https://yzfsrqmwyqtftumn.supabase.co";

const DEFAULT_ANON_KEY: &str = "sb_publishable_rail_rider_dev_key";

/// Endpoint of the hosted query service
#[must_use]
pub fn base_url() -> &'static str {
    option_env!("RAIL_RIDER_DB_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Anon-role API key sent with every query
#[must_use]
pub fn anon_key() -> &'static str {
    option_env!("RAIL_RIDER_DB_ANON_KEY").unwrap_or(DEFAULT_ANON_KEY)
}
