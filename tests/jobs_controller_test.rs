use actix_web::{test, web, App};
use khidma_api::controller;
use khidma_api::service::jobs::JobCatalog;

fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1")
            .app_data(web::Data::new(JobCatalog::with_seed_data()))
            .service(controller::jobs::routes())
            .service(controller::jobs::meta_routes())
            .service(controller::profile::routes()),
    );
}

#[actix_web::test]
async fn listing_jobs_returns_the_seeded_catalog() {
    let app = test::init_service(App::new().configure(app_config)).await;

    let req = test::TestRequest::get().uri("/v1/jobs").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["jobs"].as_array().map_or(false, |jobs| !jobs.is_empty()));
}

#[actix_web::test]
async fn wilaya_query_filters_the_listing() {
    let app = test::init_service(App::new().configure(app_config)).await;

    let req = test::TestRequest::get().uri("/v1/jobs?wilaya=31-Oran").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert!(!jobs.is_empty());
    assert!(jobs.iter().all(|job| job["wilaya"] == "31-Oran"));
}

#[actix_web::test]
async fn featured_endpoint_only_lists_featured_jobs() {
    let app = test::init_service(App::new().configure(app_config)).await;

    let req = test::TestRequest::get().uri("/v1/jobs/featured").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    let jobs = body["jobs"].as_array().expect("jobs array");
    assert!(!jobs.is_empty());
    assert!(jobs.iter().all(|job| job["isFeatured"] == true));
}

#[actix_web::test]
async fn meta_endpoints_expose_reference_lists() {
    let app = test::init_service(App::new().configure(app_config)).await;

    let req = test::TestRequest::get().uri("/v1/meta/wilayas").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["wilayas"].as_array().map_or(false, |w| w.contains(&serde_json::json!("16-Alger"))));

    let req = test::TestRequest::get().uri("/v1/meta/categories").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["categories"].as_array().map_or(false, |c| !c.is_empty()));
}

#[actix_web::test]
async fn profile_returns_the_demo_user() {
    let app = test::init_service(App::new().configure(app_config)).await;

    let req = test::TestRequest::get().uri("/v1/profile").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], "u1");
    assert_eq!(body["role"], "regular");
    assert!(body["skills"].as_array().map_or(false, |s| !s.is_empty()));
}
