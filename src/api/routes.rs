use std::sync::Arc;

use axum::{middleware, routing::get, Router};

use crate::observability::trace_http_requests;
use crate::vault::Vault;

use super::handlers::{
    create_app_role_handler, create_root_handler, create_user_handler, get_secret_handler,
    get_token_handler,
};

#[derive(Clone)]
pub struct ApiState {
    pub vault: Arc<Vault>,
}

/// Every endpoint answers both GET and POST; parameters come from the query string.
pub fn build_router(vault: Arc<Vault>) -> Router {
    let state = ApiState { vault };

    Router::new()
        .route("/create-root", get(create_root_handler).post(create_root_handler))
        .route("/create-user", get(create_user_handler).post(create_user_handler))
        .route("/create-approle", get(create_app_role_handler).post(create_app_role_handler))
        .route("/get-token", get(get_token_handler).post(get_token_handler))
        .route("/get-secret", get(get_secret_handler).post(get_secret_handler))
        .layer(middleware::from_fn(trace_http_requests))
        .with_state(state)
}
