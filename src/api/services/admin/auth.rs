//! Session endpoints

use actix_web::http::StatusCode;
use actix_web::{Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{info, warn};

use crate::session::Session;

use super::error_code::ErrorCode;
use super::helpers::{error_response, success_response};
use super::types::{LoginCredentials, SessionStatus};

fn status_of(session: &Session) -> SessionStatus {
    SessionStatus {
        authenticated: session.is_authenticated(),
        email: session.current_email(),
    }
}

/// POST /auth/login
pub async fn login(
    credentials: web::Json<LoginCredentials>,
    session: web::Data<Arc<Session>>,
) -> ActixResult<impl Responder> {
    match session.login(&credentials.email, &credentials.password) {
        Ok(()) => Ok(success_response(status_of(&session))),
        Err(e) => {
            warn!("Admin API: login rejected: {}", e.message());
            Ok(error_response(
                StatusCode::BAD_REQUEST,
                ErrorCode::LoginFieldsMissing,
                e.message(),
            ))
        }
    }
}

/// POST /auth/logout
pub async fn logout(session: web::Data<Arc<Session>>) -> ActixResult<impl Responder> {
    if !session.logout() {
        info!("Admin API: logout without an active session");
    }
    Ok(success_response(status_of(&session)))
}

/// GET /auth/status
pub async fn status(session: web::Data<Arc<Session>>) -> ActixResult<impl Responder> {
    Ok(success_response(status_of(&session)))
}
