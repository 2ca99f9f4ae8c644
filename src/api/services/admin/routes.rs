//! Admin API routes
//!
//! `/v1` is split into one scope per page of the dashboard.

use actix_web::web;

use super::auth::{login, logout, status};
use super::dashboard::{
    get_account_workload, get_blogs, get_keywords, get_pc_status, get_pc_workload,
    get_place_infos, get_summary,
};
use super::fail_accounts::{batch_delete_fail_accounts, delete_fail_account, get_fail_accounts};
use super::files::{get_files, put_file};
use super::nav::get_nav;
use super::places::{
    delete_place, get_place, get_place_stats, get_places, get_removable, post_place, put_place,
};

/// Session routes `/auth`
///
/// - POST /auth/login
/// - POST /auth/logout
/// - GET /auth/status
pub fn auth_routes() -> actix_web::Scope {
    web::scope("/auth")
        .route("/login", web::post().to(login))
        .route("/logout", web::post().to(logout))
        .route("/status", web::get().to(status))
}

pub fn nav_routes() -> actix_web::Scope {
    web::scope("/nav").route("", web::get().to(get_nav))
}

/// Place listing routes `/places`
///
/// - GET/HEAD /places
/// - POST /places
/// - GET /places/removable
/// - GET /places/{pid}/stats
/// - GET/PUT/DELETE /places/{pid}
pub fn places_routes() -> actix_web::Scope {
    web::scope("/places")
        .route("", web::get().to(get_places))
        .route("", web::head().to(get_places))
        .route("", web::post().to(post_place))
        // Must be before /{pid}
        .route("/removable", web::get().to(get_removable))
        .route("/{pid}/stats", web::get().to(get_place_stats))
        .route("/{pid}", web::get().to(get_place))
        .route("/{pid}", web::put().to(put_place))
        .route("/{pid}", web::delete().to(delete_place))
}

/// Dashboard routes `/dashboard`
pub fn dashboard_routes() -> actix_web::Scope {
    web::scope("/dashboard")
        .route("/summary", web::get().to(get_summary))
        .route("/pcs", web::get().to(get_pc_status))
        .route("/pcs/workload", web::get().to(get_pc_workload))
        .route("/accounts/workload", web::get().to(get_account_workload))
        .route("/blogs", web::get().to(get_blogs))
        .route("/place-infos", web::get().to(get_place_infos))
        .route("/keywords", web::get().to(get_keywords))
}

pub fn fail_accounts_routes() -> actix_web::Scope {
    web::scope("/fail-accounts")
        .route("", web::get().to(get_fail_accounts))
        .route("", web::delete().to(batch_delete_fail_accounts))
        .route("/{id}", web::delete().to(delete_fail_account))
}

/// Edit dialog routes `/files/{kind}`, kind is `keyword` or `account`
pub fn files_routes() -> actix_web::Scope {
    web::scope("/files")
        .route("/{kind}", web::get().to(get_files))
        .route("/{kind}/{id}", web::put().to(put_file))
}

/// Admin API v1
pub fn admin_v1_routes() -> actix_web::Scope {
    web::scope("/v1")
        .service(auth_routes())
        .service(nav_routes())
        .service(places_routes())
        .service(dashboard_routes())
        .service(fail_accounts_routes())
        .service(files_routes())
}
