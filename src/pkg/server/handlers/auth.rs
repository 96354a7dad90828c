use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::{
    pkg::server::state::AppState,
    prelude::{Error, Result},
};

#[derive(Deserialize, Serialize)]
pub struct LoginInput {
    #[serde(default, alias = "identifier")]
    pub email: String,
    #[serde(default, alias = "secret")]
    pub password: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct LoginOutput {
    pub token: String,
    pub message: String,
}

pub async fn login(
    State(state): State<AppState>,
    input: std::result::Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<LoginOutput>> {
    let Json(input) = input.map_err(|e| {
        tracing::warn!("rejected login body: {}", e.body_text());
        Error::InvalidCredentials
    })?;
    let token = state
        .authority
        .login(&input.email, &input.password)
        .inspect_err(|_| tracing::warn!("rejected login for {}", &input.email))?;
    tracing::info!("{} logged in", &input.email);
    Ok(Json(LoginOutput {
        token,
        message: "Login successful".into(),
    }))
}
