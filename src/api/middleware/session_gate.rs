use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::{Method, header::CONTENT_TYPE},
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::api::services::admin::{ErrorCode, LoginRedirect};
use crate::api::services::admin::ApiResponse;
use crate::config::get_config;
use crate::navigation::Route;
use crate::session::Session;

/// Answers 401 on every admin route except `/v1/auth/*` while logged out
///
/// Reads the shared [`Session`] from app data. Disabled when
/// `auth.require_login` is false.
#[derive(Clone)]
pub struct SessionGate;

impl<S, B> Transform<S, ServiceRequest> for SessionGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = SessionGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let config = get_config();
        ready(Ok(SessionGateMiddleware {
            service: Rc::new(service),
            auth_prefix: format!("{}/v1/auth", config.routes.admin_prefix),
            require_login: config.auth.require_login,
        }))
    }
}

pub struct SessionGateMiddleware<S> {
    service: Rc<S>,
    auth_prefix: String,
    require_login: bool,
}

impl<S, B> SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    fn is_auth_endpoint(req: &ServiceRequest, auth_prefix: &str) -> bool {
        let path = req.path();
        path == auth_prefix
            || path
                .strip_prefix(auth_prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    fn is_authenticated(req: &ServiceRequest) -> bool {
        req.app_data::<web::Data<Arc<Session>>>()
            .is_some_and(|session| session.is_authenticated())
    }

    fn handle_login_required(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
        debug!("Session gate: {} {} requires login", req.method(), req.path());
        req.into_response(
            HttpResponse::Unauthorized()
                .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
                .json(ApiResponse {
                    code: ErrorCode::LoginRequired as i32,
                    message: "Login required".to_string(),
                    data: Some(LoginRedirect {
                        redirect: Route::Login.to_string(),
                    }),
                })
                .map_into_right_body(),
        )
    }
}

impl<S, B> Service<ServiceRequest> for SessionGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let open = !self.require_login
            || req.method() == Method::OPTIONS
            || Self::is_auth_endpoint(&req, &self.auth_prefix)
            || Self::is_authenticated(&req);

        Box::pin(async move {
            if !open {
                return Ok(Self::handle_login_required(req));
            }
            trace!("Session gate: passing {} {}", req.method(), req.path());
            Ok(srv.call(req).await?.map_into_left_body())
        })
    }
}
