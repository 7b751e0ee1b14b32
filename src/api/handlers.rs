//! Query-string handlers. Missing parameters deserialize to empty strings.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::duration::parse_ttl;
use super::error::ApiError;
use super::routes::ApiState;
use crate::vault::SecretString;

#[derive(Debug, Deserialize)]
pub struct CreateRootParams {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: SecretString,
    #[serde(default)]
    pub ttl: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserParams {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: SecretString,
}

/// Shared by `/create-approle` and `/get-token`.
#[derive(Debug, Deserialize)]
pub struct AppRoleParams {
    #[serde(default, rename = "roleID")]
    pub role_id: String,
    #[serde(default, rename = "secretID")]
    pub secret_id: SecretString,
}

#[derive(Debug, Deserialize)]
pub struct GetSecretParams {
    #[serde(default)]
    pub token: SecretString,
    #[serde(default, rename = "rootName")]
    pub root_name: String,
}

pub async fn create_root_handler(
    State(state): State<ApiState>,
    Query(params): Query<CreateRootParams>,
) -> Result<&'static str, ApiError> {
    let ttl = parse_ttl(&params.ttl)?;
    state.vault.create_secret(&params.name, params.value, ttl);
    Ok("Root created")
}

pub async fn create_user_handler(
    State(state): State<ApiState>,
    Query(params): Query<CreateUserParams>,
) -> &'static str {
    state.vault.create_user(&params.username, params.password);
    "User created"
}

pub async fn create_app_role_handler(
    State(state): State<ApiState>,
    Query(params): Query<AppRoleParams>,
) -> &'static str {
    state.vault.create_app_role(&params.role_id, params.secret_id);
    "AppRole created"
}

pub async fn get_token_handler(
    State(state): State<ApiState>,
    Query(params): Query<AppRoleParams>,
) -> Result<String, ApiError> {
    let token = state.vault.authenticate(&params.role_id, params.secret_id.expose_secret())?;
    Ok(token.into_value().expose_secret().to_string())
}

pub async fn get_secret_handler(
    State(state): State<ApiState>,
    Query(params): Query<GetSecretParams>,
) -> Result<String, ApiError> {
    let value = state.vault.authorize(params.token.expose_secret(), &params.root_name)?;
    Ok(value.expose_secret().to_string())
}
