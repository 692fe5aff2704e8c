//! Authentication handlers
//!
//! Endpoints for user registration, login, and logout. Successful register
//! and login responses carry the session cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use pulse_service::{AuthResponse, AuthService, LoginRequest, RegisterRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Build the session cookie for a freshly issued token
fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((state.session_cookie_name().to_string(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config().app.env.is_production())
        .build()
}

/// Cookie used to clear the session on logout
fn removal_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.session_cookie_name().to_string(), ""))
        .path("/")
        .build()
}

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<Json<AuthResponse>>)> {
    let service = AuthService::new(state.service_context());
    let (token, response) = service.register(request).await?;
    let jar = jar.add(session_cookie(&state, token));
    Ok((jar, Created(Json(response))))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let (token, response) = service.login(request).await?;
    let jar = jar.add(session_cookie(&state, token));
    Ok((jar, Json(response)))
}

/// Logout the current session
///
/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
) -> ApiResult<(CookieJar, NoContent)> {
    let service = AuthService::new(state.service_context());
    service.logout(&auth.session_token).await?;
    let jar = jar.remove(removal_cookie(&state));
    Ok((jar, NoContent))
}

/// Logout from all devices
///
/// POST /auth/logout-all
pub async fn logout_all(
    State(state): State<AppState>,
    jar: CookieJar,
    auth: AuthUser,
) -> ApiResult<(CookieJar, NoContent)> {
    let service = AuthService::new(state.service_context());
    service.logout_all(auth.user_id).await?;
    let jar = jar.remove(removal_cookie(&state));
    Ok((jar, NoContent))
}
