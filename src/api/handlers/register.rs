// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::api::AppState;
use crate::error::AppError;
use crate::hotspot::{NewAccount, RegistrationForm, RegistrationOutcome, register_account};
use crate::metrics::RegistrationStatus;
use crate::routeros::RouterOsClient;

/// JSON envelope returned by `/register`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<RegisteredUser>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    pub username: String,
    pub profile: String,
}

fn reply(
    status: StatusCode,
    message: impl Into<String>,
    data: Option<RegisteredUser>,
) -> Response {
    let body = ApiResponse {
        success: status.is_success(),
        message: message.into(),
        data,
    };
    (status, Json(body)).into_response()
}

/// POST /register
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<RegistrationForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!("Rejected registration body: {}", rejection);
            state.metrics.record_registration(RegistrationStatus::Invalid);
            return reply(StatusCode::BAD_REQUEST, "Invalid form data", None);
        }
    };

    let account = match form.validate() {
        Ok(account) => account,
        Err(e) => {
            tracing::debug!(
                "Registration for '{}' failed validation: {}",
                form.username.trim(),
                e
            );
            state.metrics.record_registration(RegistrationStatus::Invalid);
            return reply(StatusCode::BAD_REQUEST, e.to_string(), None);
        }
    };

    match run_registration(state.clone(), account).await {
        Ok(RegistrationOutcome::Created { username, profile }) => {
            state.metrics.record_registration(RegistrationStatus::Created);
            reply(
                StatusCode::OK,
                "Registration successful",
                Some(RegisteredUser { username, profile }),
            )
        }
        Ok(RegistrationOutcome::Duplicate) => {
            state.metrics.record_registration(RegistrationStatus::Duplicate);
            reply(StatusCode::CONFLICT, "Username already registered", None)
        }
        Ok(RegistrationOutcome::Rejected(message)) => {
            state.metrics.record_registration(RegistrationStatus::Rejected);
            reply(StatusCode::UNPROCESSABLE_ENTITY, message, None)
        }
        Ok(RegistrationOutcome::Unreachable) => {
            state.metrics.record_registration(RegistrationStatus::Unreachable);
            reply(StatusCode::BAD_GATEWAY, "Failed to connect to router", None)
        }
        Err(e) => {
            tracing::error!("Registration failed: {}", e);
            state.metrics.record_registration(RegistrationStatus::Error);
            reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string(), None)
        }
    }
}

/// The router session is blocking I/O, so it runs off the async workers.
async fn run_registration(
    state: Arc<AppState>,
    account: NewAccount,
) -> Result<RegistrationOutcome, AppError> {
    let worker_state = state.clone();
    let joined = tokio::task::spawn_blocking(move || {
        let config = &worker_state.config;
        let mut client = RouterOsClient::new(config.client.clone());
        let started = Instant::now();
        let outcome = register_account(&mut client, &config.router, &config.hotspot, &account);
        (outcome, started.elapsed(), client.failed_attempts())
    })
    .await
    .map_err(|e| AppError::Task(e.to_string()))?;

    let (outcome, elapsed, failed_attempts) = joined;
    state.metrics.record_connect_failures(failed_attempts);
    if !matches!(outcome, Ok(RegistrationOutcome::Unreachable)) {
        state.metrics.record_session_duration(elapsed);
    }
    outcome.map_err(AppError::from)
}

/// Any method other than POST on `/register`
pub async fn method_not_allowed() -> Response {
    reply(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}
