//! Handlers for the `/auth` resource (register, login, profile).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gardenspace_core::error::CoreError;
use gardenspace_core::person::{validate_blood_group, validate_gender, validate_rh_factor};
use gardenspace_core::types::Date;
use gardenspace_core::validation::{not_blank, validate_input};
use gardenspace_db::models::user::{CreateUser, User, UserResponse, UserSummary};
use gardenspace_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::issue_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password_or_dummy,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_blank"), length(max = 50))]
    pub username: String,
    #[validate(custom(function = "not_blank"), length(max = 100))]
    pub full_name: String,
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
    pub birth_date: Date,
    #[validate(custom(function = "not_blank"), length(max = 200))]
    pub address: String,
    #[validate(custom(function = "validate_gender"))]
    pub gender: String,
    #[validate(length(max = 200))]
    pub hobby: Option<String>,
    #[validate(length(max = 200))]
    pub vk_profile: Option<String>,
    #[validate(custom(function = "validate_blood_group"))]
    pub blood_group: String,
    #[validate(custom(function = "validate_rh_factor"))]
    pub rh_factor: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub user: UserSummary,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account and return a token for it.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    validate_input(&input)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mut tx = state.pool.begin().await?;

    if UserRepo::find_by_username(&mut *tx, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with this username already exists".into(),
        )));
    }

    if let Some(vk_profile) = input.vk_profile.as_deref() {
        if UserRepo::vk_profile_exists(&mut *tx, vk_profile).await? {
            return Err(AppError::Core(CoreError::Conflict(
                "This VK profile is already linked to another account".into(),
            )));
        }
    }

    let new_user = CreateUser {
        username: input.username,
        full_name: input.full_name,
        password_hash,
        birth_date: input.birth_date,
        address: input.address,
        gender: input.gender,
        hobby: input.hobby,
        vk_profile: input.vk_profile,
        blood_group: input.blood_group,
        rh_factor: input.rh_factor,
    };
    let user = UserRepo::create(&mut *tx, &new_user).await?;
    tx.commit().await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = auth_response(&state, &user)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login
///
/// Unknown usernames and wrong passwords produce the same 401, and both
/// pay for one Argon2 verification.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username).await?;

    let stored_hash = user.as_ref().map(|user| user.password_hash.as_str());
    let verified = verify_password_or_dummy(&input.password, stored_hash);

    let user = match user {
        Some(user) if verified => user,
        _ => {
            tracing::warn!(username = %input.username, "Rejected login attempt");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid username or password".into(),
            )));
        }
    };

    tracing::info!(user_id = user.id, "User logged in");

    let response = auth_response(&state, &user)?;
    Ok(Json(response))
}

/// GET /api/auth/profile
///
/// Return the authenticated user's profile (without the password hash).
pub async fn profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth_user.user_id,
        }))?;
    Ok(Json(UserResponse::from(user)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = issue_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        token_type: "bearer",
        user: UserSummary::from(user),
    })
}
