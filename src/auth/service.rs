//! Session service: the only component allowed to call the auth API and to
//! write the credential store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Outside the
//! browser the async operations fail with a network error and the
//! synchronous reads see an empty store, since sessions only exist in a
//! running tab.
//!
//! Every operation either completes fully or leaves the store exactly as it
//! was; there is no partial write path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;

use crate::auth::error::AuthError;
use crate::auth::store;
use crate::net::types::{Role, UserProfile};
#[cfg(feature = "hydrate")]
use crate::net::types::{
    ApiErrorBody, LoginRequest, LoginResponse, ProfileResponse, ProfileUpdateRequest,
    RegisterRequest,
};

/// Map a rejected login response to an error reason.
pub fn login_failure(status: u16, msg: Option<String>) -> AuthError {
    match status {
        401 | 403 => AuthError::InvalidCredentials,
        _ => AuthError::Server(msg.unwrap_or_else(|| format!("login failed with status {status}"))),
    }
}

/// Map a rejected registration response to an error reason.
pub fn register_failure(status: u16, msg: Option<String>) -> AuthError {
    match status {
        409 => AuthError::DuplicateIdentifier,
        400 | 422 => {
            AuthError::Validation(msg.unwrap_or_else(|| "invalid registration data".to_owned()))
        }
        _ => AuthError::Server(
            msg.unwrap_or_else(|| format!("registration failed with status {status}")),
        ),
    }
}

/// Map a rejected profile update or fetch to an error reason.
pub fn profile_failure(status: u16, msg: Option<String>) -> AuthError {
    match status {
        400 | 422 => {
            AuthError::Validation(msg.unwrap_or_else(|| "invalid profile data".to_owned()))
        }
        _ => AuthError::Server(
            msg.unwrap_or_else(|| format!("profile request failed with status {status}")),
        ),
    }
}

#[cfg(feature = "hydrate")]
async fn error_message(resp: &gloo_net::http::Response) -> Option<String> {
    resp.json::<ApiErrorBody>().await.ok().and_then(|b| b.msg)
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Authenticate against `POST /api/auth/login` without touching the store.
///
/// Persisting the returned pair is a separate step, [`commit_login`], so
/// the caller can first check that the completion has not been superseded
/// by a newer operation; on any failure the store is left untouched, so a
/// failed login never destroys a prior session.
///
/// # Errors
///
/// `InvalidCredentials`, `Network`, or `Server` per the response.
pub async fn authenticate(
    identifier: &str,
    password: &str,
) -> Result<(String, UserProfile), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest {
                identifier,
                password,
            })
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let msg = error_message(&resp).await;
            return Err(login_failure(resp.status(), msg));
        }
        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Server(e.to_string()))?;
        Ok(body.into_pair())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identifier, password);
        Err(AuthError::Network(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Persist a freshly authenticated credential pair.
///
/// Kept here so the service stays the sole store writer; a discarded
/// completion never reaches this step.
pub fn commit_login(token: &str, profile: &UserProfile) {
    store::save(token, profile);
}

/// Create an account via `POST /api/auth/register`.
///
/// Never writes the credential store: registration does not establish a
/// session, the new account must log in separately.
///
/// # Errors
///
/// `DuplicateIdentifier`, `Validation`, `Network`, or `Server`.
pub async fn register(
    user_id: &str,
    display_name: &str,
    email: &str,
    password: &str,
    role: Role,
) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&RegisterRequest {
                user_id,
                display_name,
                email,
                password,
                role: role.as_str(),
            })
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let msg = error_message(&resp).await;
            return Err(register_failure(resp.status(), msg));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, display_name, email, password, role);
        Err(AuthError::Network(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Drop the local session unconditionally.
///
/// Infallible by contract: clearing local state is the authoritative,
/// user-visible effect of logging out.
pub fn logout() {
    store::clear();
}

/// Synchronous read of the stored profile half. Never touches the network.
pub fn current_user() -> Option<UserProfile> {
    store::load().map(|(_, profile)| profile)
}

/// Synchronous presence check of the stored token half.
pub fn has_credential() -> bool {
    store::has_token()
}

/// Update the display name, then re-fetch the canonical profile and
/// overwrite the stored snapshot. Write-then-reconcile, two sequential
/// calls; the full overwrite avoids stale-field drift between the client
/// cache and server state.
///
/// # Errors
///
/// Errors from the write step leave the store untouched. A failed re-fetch
/// after a committed write returns `StaleProfile`; the store keeps the
/// previous snapshot until [`refresh_profile`] succeeds.
pub async fn update_profile(display_name: &str) -> Result<UserProfile, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let token = store::token().ok_or(AuthError::InvalidCredentials)?;
        let resp = gloo_net::http::Request::put("/api/auth/profile")
            .header("Authorization", &bearer(&token))
            .json(&ProfileUpdateRequest {
                display_name: Some(display_name),
            })
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let msg = error_message(&resp).await;
            return Err(profile_failure(resp.status(), msg));
        }
        refresh_profile()
            .await
            .map_err(|e| AuthError::StaleProfile(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = display_name;
        Err(AuthError::Network(
            "not available outside the browser".to_owned(),
        ))
    }
}

/// Re-fetch `GET /api/auth/profile` and overwrite the stored profile half,
/// keeping the existing token. Retryable independently of the write step.
///
/// # Errors
///
/// `InvalidCredentials` when no session exists, otherwise `Network`,
/// `Validation`, or `Server` per the response.
pub async fn refresh_profile() -> Result<UserProfile, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let (token, _) = store::load().ok_or(AuthError::InvalidCredentials)?;
        let resp = gloo_net::http::Request::get("/api/auth/profile")
            .header("Authorization", &bearer(&token))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let msg = error_message(&resp).await;
            return Err(profile_failure(resp.status(), msg));
        }
        let body: ProfileResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Server(e.to_string()))?;
        let profile = body.into_profile();
        store::save(&token, &profile);
        Ok(profile)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::Network(
            "not available outside the browser".to_owned(),
        ))
    }
}
