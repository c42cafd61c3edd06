//! Credential store: the only component that touches persistent storage.
//!
//! The bearer token and the profile snapshot live in `localStorage` under
//! two keys and are always written and cleared as a pair. Reads are
//! untrusted: a missing half or a malformed profile makes the whole pair
//! absent. There is no expiry check and no encryption; token lifetime is
//! not observable from this subsystem.
//!
//! All storage access is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment; outside the browser the store is empty.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::net::types::UserProfile;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "picboard_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "picboard_user";

/// Decode a raw storage pair into a credential pair.
///
/// Both halves must be present, the token must be non-empty, and the
/// profile must parse; anything else is treated as absent rather than an
/// error, since persisted data can be edited out from under us.
pub fn decode_pair(
    token: Option<String>,
    profile_json: Option<String>,
) -> Option<(String, UserProfile)> {
    let token = token.filter(|t| !t.is_empty())?;
    let json = profile_json?;
    match serde_json::from_str::<UserProfile>(&json) {
        Ok(profile) => Some((token, profile)),
        Err(err) => {
            log::warn!("discarding malformed stored profile: {err}");
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist the token and profile snapshot together.
pub fn save(token: &str, profile: &UserProfile) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if let Ok(json) = serde_json::to_string(profile) {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(USER_KEY, &json);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, profile);
    }
}

/// Load the stored pair, or `None` if either half is missing or malformed.
pub fn load() -> Option<(String, UserProfile)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let token = storage.get_item(TOKEN_KEY).ok().flatten();
        let profile = storage.get_item(USER_KEY).ok().flatten();
        decode_pair(token, profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove both halves. Safe to call when nothing is stored.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Presence check of the token half only.
///
/// Synchronous; this backs the startup authentication flag before the
/// profile hydration completes.
pub fn has_token() -> bool {
    token().is_some()
}

/// The token half, for bearer-authorized API calls.
pub fn token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
