//! Admin API integration tests
//!
//! Every test builds its own dataset, so edits in one test never leak into
//! another.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use dotplace::api::middleware::SessionGate;
use dotplace::api::services::admin::ErrorCode;
use dotplace::api::services::admin::routes::admin_v1_routes;
use dotplace::api::services::{AppStartTime, health_routes};
use dotplace::services::DashboardService;
use dotplace::session::Session;

// =============================================================================
// Test Setup
// =============================================================================

fn logged_in() -> Arc<Session> {
    Arc::new(Session::logged_in("tester@dotplace.local"))
}

fn fresh_service() -> Arc<DashboardService> {
    Arc::new(DashboardService::default())
}

macro_rules! init_app {
    ($service:expr, $session:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($service.clone()))
                .app_data(web::Data::new($session.clone()))
                .service(
                    web::scope("/admin")
                        .wrap(SessionGate)
                        .service(admin_v1_routes()),
                ),
        )
        .await
    };
}

fn pids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["pid"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Session gate
// =============================================================================

#[actix_rt::test]
async fn test_logged_out_requests_are_redirected_to_login() {
    let session = Arc::new(Session::new());
    let app = init_app!(fresh_service(), session);

    let req = TestRequest::get().uri("/admin/v1/places").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::LoginRequired as i32);
    assert_eq!(body["data"]["redirect"], "/login");
}

#[actix_rt::test]
async fn test_login_opens_the_api_and_logout_closes_it() {
    let session = Arc::new(Session::new());
    let app = init_app!(fresh_service(), session);

    let req = TestRequest::get().uri("/admin/v1/auth/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["authenticated"], false);

    let req = TestRequest::post()
        .uri("/admin/v1/auth/login")
        .set_json(json!({ "email": "ops@dotplace.local", "password": "pw" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["authenticated"], true);
    assert_eq!(body["data"]["email"], "ops@dotplace.local");

    let req = TestRequest::get().uri("/admin/v1/places").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::post().uri("/admin/v1/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(!session.is_authenticated());

    let req = TestRequest::get().uri("/admin/v1/places").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_login_requires_both_fields() {
    let session = Arc::new(Session::new());
    let app = init_app!(fresh_service(), session);

    let req = TestRequest::post()
        .uri("/admin/v1/auth/login")
        .set_json(json!({ "email": "ops@dotplace.local", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::LoginFieldsMissing as i32);
    assert!(!session.is_authenticated());
}

// =============================================================================
// Navigation
// =============================================================================

#[actix_rt::test]
async fn test_nav_actions_per_route() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get().uri("/admin/v1/nav?route=/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body["data"].as_array().unwrap();
    assert_eq!(items.len(), 9);
    assert_eq!(items[0]["action"], "review");
    assert_eq!(items[0]["href"], "/");
    assert_eq!(items[7]["label"], "Check All");
    assert_eq!(items[8]["action"], "logout");

    let req = TestRequest::get()
        .uri("/admin/v1/nav?route=/dashboard")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 8);

    let req = TestRequest::get().uri("/admin/v1/nav?route=/login").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    let req = TestRequest::get().uri("/admin/v1/nav?route=/nowhere").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Places
// =============================================================================

#[actix_rt::test]
async fn test_places_section_filter() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/places?search=P100&section=monthly-guarantee")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(pids(&body), ["P1001", "P1004", "P1005"]);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert!(body["pagination"]["pages"].as_array().unwrap().is_empty());

    let req = TestRequest::get()
        .uri("/admin/v1/places?section=weekly")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::PlaceInvalid as i32);
}

#[actix_rt::test]
async fn test_places_paging() {
    let app = init_app!(fresh_service(), logged_in());

    // 6 catalog rows + 50 generated rows
    let req = TestRequest::get()
        .uri("/admin/v1/places?page=6&page_size=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total"], 56);
    assert_eq!(body["pagination"]["total_pages"], 6);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
    assert_eq!(body["pagination"]["pages"], json!([1, 2, 3, 4, 5, 6]));

    let req = TestRequest::get()
        .uri("/admin/v1/places?page=7&page_size=10")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total"], 56);

    let req = TestRequest::get()
        .uri("/admin/v1/places?page_size=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 56);
    assert!(body["pagination"]["page_size"].is_null());
    assert_eq!(body["pagination"]["total_pages"], 1);
}

#[actix_rt::test]
async fn test_place_add_edit_remove() {
    let service = fresh_service();
    let app = init_app!(service, logged_in());
    let new_place = json!({ "section": "슬롯", "keyword": " 테스트 ", "place": "서울", "pid": "P9001" });

    let req = TestRequest::post()
        .uri("/admin/v1/places")
        .set_json(&new_place)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pid"], "P9001");
    assert_eq!(body["data"]["keyword"], "테스트");
    assert_eq!(body["data"]["stats7d"].as_array().unwrap().len(), 7);

    let req = TestRequest::post()
        .uri("/admin/v1/places")
        .set_json(&new_place)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::PlaceAlreadyExists as i32);

    let req = TestRequest::put()
        .uri("/admin/v1/places/P9001")
        .set_json(json!({ "section": "월보장", "keyword": "수정", "place": "부산", "pid": "P9002" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["pid"], "P9002");
    assert_eq!(body["data"]["section"], "월보장");

    let req = TestRequest::get().uri("/admin/v1/places/P9001").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = TestRequest::delete().uri("/admin/v1/places/P9002").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/admin/v1/places/P9002").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::PlaceNotFound as i32);
    assert_eq!(service.summary().place_rows, 56);
}

#[actix_rt::test]
async fn test_place_without_pid_is_rejected() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::post()
        .uri("/admin/v1/places")
        .set_json(json!({ "section": "미분류", "keyword": "k", "place": "p", "pid": "  " }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::PlaceInvalid as i32);
}

#[actix_rt::test]
async fn test_removable_options_are_searched_by_keyword() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/places/removable?query=%EC%BB%A4%ED%94%BC")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let options = body["data"].as_array().unwrap();
    assert!(!options.is_empty());
    assert_eq!(options[0]["id"], "P1001");
    assert!(
        options
            .iter()
            .all(|o| o["keyword"].as_str().unwrap().contains("커피"))
    );
}

#[actix_rt::test]
async fn test_place_stats_window() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/places/P1001/stats?days=7")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let points = body["data"].as_array().unwrap();
    assert_eq!(points.len(), 7);
    assert_eq!(points[0]["date"], "2025-08-26");
    assert_eq!(points[6]["date"], "2025-09-01");
    assert_eq!(points[0]["rank"], 34);

    let req = TestRequest::get()
        .uri("/admin/v1/places/P1001/stats?start=yesterday")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::InvalidDateFormat as i32);

    // Parses as a date, but the window runs past the last representable day
    let req = TestRequest::get()
        .uri("/admin/v1/places/P1001/stats?start=%2B262142-12-20")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::InvalidDateFormat as i32);

    let req = TestRequest::get()
        .uri("/admin/v1/places/P1001/stats?start=2025-09-01&days=3")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let req = TestRequest::get()
        .uri("/admin/v1/places/NOPE/stats")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Dashboard
// =============================================================================

#[actix_rt::test]
async fn test_pc_status_modes() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/pcs?mode=all&page_size=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total"], 37);

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/pcs?mode=range&date_start=2025-09-01&date_end=2025-09-01&page_size=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let total = body["pagination"]["total"].as_u64().unwrap();
    assert!(total < 37);
    assert!(
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|pc| pc["last_checked_at"].as_str().unwrap().starts_with("2025-09-01"))
    );

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/pcs?mode=all&status=Offline&page_size=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let offline = body["data"].as_array().unwrap();
    assert!(!offline.is_empty());
    assert!(offline.iter().all(|pc| pc["status"] == "오프라인"));

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/pcs?mode=weekly")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_workload_chart_ignores_list_filter() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/pcs/workload?min_count=100")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["chart"].as_array().unwrap().len(), 37);
    let total = body["pagination"]["total"].as_u64().unwrap();
    assert!(total < 37);
    assert!(
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|pc| pc["job_count"].as_u64().unwrap() >= 100)
    );

    // A malformed bound is no bound
    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/pcs/workload?min_count=abc")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total"], 37);

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/accounts/workload?account=user00")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["chart"].as_array().unwrap().len(), 24);
    assert_eq!(body["pagination"]["total"], 9);
}

#[actix_rt::test]
async fn test_job_count_listings() {
    let app = init_app!(fresh_service(), logged_in());

    for (uri, total) in [
        ("/admin/v1/dashboard/blogs", 53),
        ("/admin/v1/dashboard/place-infos", 40),
        ("/admin/v1/dashboard/keywords", 40),
    ] {
        let req = TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["pagination"]["total"], total, "{}", uri);
        assert_eq!(body["data"].as_array().unwrap().len(), 10, "{}", uri);
    }

    let req = TestRequest::get()
        .uri("/admin/v1/dashboard/blogs?url=dotplace001")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total"], 1);
}

// =============================================================================
// Failed logins
// =============================================================================

#[actix_rt::test]
async fn test_fail_accounts_filter_and_remove() {
    let service = fresh_service();
    let app = init_app!(service, logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/fail-accounts?pc=PC-001&page_size=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["pagination"]["total"], 11);

    let req = TestRequest::delete()
        .uri("/admin/v1/fail-accounts/FA-0001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::delete()
        .uri("/admin/v1/fail-accounts/FA-0001")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::FailAccountNotFound as i32);

    let req = TestRequest::delete()
        .uri("/admin/v1/fail-accounts")
        .set_json(json!({ "ids": ["FA-0002", "FA-0003", "nope", "nope"] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["removed"], json!(["FA-0002", "FA-0003"]));
    assert_eq!(body["data"]["not_found"], json!(["nope"]));
    assert_eq!(service.summary().fail_accounts, 124);

    let req = TestRequest::delete()
        .uri("/admin/v1/fail-accounts")
        .set_json(json!({ "ids": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::FailAccountBatchEmpty as i32);
}

// =============================================================================
// Edit dialog files
// =============================================================================

#[actix_rt::test]
async fn test_files_search_and_apply() {
    let app = init_app!(fresh_service(), logged_in());

    let req = TestRequest::get()
        .uri("/admin/v1/files/keyword?query=replace")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let files = body["data"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["id"], "kw-005");

    let req = TestRequest::put()
        .uri("/admin/v1/files/account/ac-003")
        .set_json(json!({ "content": "spam_user" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["content"], "spam_user");

    let req = TestRequest::put()
        .uri("/admin/v1/files/account/ac-999")
        .set_json(json!({ "content": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::FileNotFound as i32);

    let req = TestRequest::get().uri("/admin/v1/files/images").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], ErrorCode::FileKindUnknown as i32);
}

// =============================================================================
// Health
// =============================================================================

#[actix_rt::test]
async fn test_health_endpoints() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(fresh_service()))
            .app_data(web::Data::new(AppStartTime {
                start_datetime: chrono::Utc::now(),
            }))
            .service(web::scope("/health").service(health_routes())),
    )
    .await;

    let req = TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["dataset"]["pcs"], 37);
    assert_eq!(body["data"]["dataset"]["fail_accounts"], 127);

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
