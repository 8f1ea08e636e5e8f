use crate::service::jobs::{JobCatalog, WILAYAS};
use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct JobQuery {
    #[serde(default)]
    pub q: String,
    pub wilaya: Option<String>,
}

#[get("")]
pub async fn list_jobs(
    catalog: web::Data<JobCatalog>,
    query: web::Query<JobQuery>,
) -> HttpResponse {
    let jobs = catalog.search(&query.q, query.wilaya.as_deref());
    log::debug!(
        "job search q={:?} wilaya={:?} -> {} results",
        query.q,
        query.wilaya,
        jobs.len()
    );
    HttpResponse::Ok().json(json!({ "jobs": jobs }))
}

#[get("/featured")]
pub async fn featured_jobs(catalog: web::Data<JobCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "jobs": catalog.featured() }))
}

#[get("/wilayas")]
pub async fn list_wilayas() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "wilayas": WILAYAS }))
}

#[get("/categories")]
pub async fn list_categories(catalog: web::Data<JobCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "categories": catalog.categories() }))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/jobs").service(featured_jobs).service(list_jobs)
}

pub fn meta_routes() -> actix_web::Scope {
    web::scope("/meta").service(list_wilayas).service(list_categories)
}
