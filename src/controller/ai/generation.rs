use crate::error::{AppError, ValidationDetails};
use crate::locales::Locales;
use crate::service::ai::AiAssistant;
use actix_web::{post, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct JobDescriptionRequest {
    pub title: String,
    #[serde(default)]
    pub requirements: String,
}

#[derive(Debug, Serialize)]
pub struct JobDescriptionResponse {
    pub description: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileTipsRequest {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileTipsResponse {
    pub tips: String,
    pub created: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[post("/job-description")]
pub async fn generate_job_description(
    assistant: web::Data<AiAssistant>,
    locales: web::Data<Arc<Locales>>,
    lang: web::Query<LangQuery>,
    req: web::Json<JobDescriptionRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();
    let start_time = Utc::now();

    log::info!("[{}] Received job description request for title: {}", request_id, req.title);

    // The facade does not re-validate the title; the boundary does.
    if req.title.trim().is_empty() {
        log::warn!("[{}] Empty title field in request", request_id);
        return Err(AppError::Validation(ValidationDetails {
            field: "title".to_string(),
            message: locales.t_in(lang.lang.as_deref(), "post.title_required"),
        }));
    }

    let description = assistant.generate_job_description(&req.title, &req.requirements).await;

    let duration = Utc::now() - start_time;
    log::info!(
        "[{}] Completed job description request for title: {} in {}ms",
        request_id,
        req.title,
        duration.num_milliseconds()
    );

    Ok(HttpResponse::Ok().json(JobDescriptionResponse { description, created: Utc::now() }))
}

#[post("/profile-tips")]
pub async fn profile_tips(
    assistant: web::Data<AiAssistant>,
    req: web::Json<ProfileTipsRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = Uuid::new_v4();
    let start_time = Utc::now();

    log::info!("[{}] Received profile tips request ({} skills)", request_id, req.skills.len());

    let tips = assistant.analyze_profile(&req.skills, &req.bio).await;

    let duration = Utc::now() - start_time;
    log::info!(
        "[{}] Completed profile tips request in {}ms",
        request_id,
        duration.num_milliseconds()
    );

    Ok(HttpResponse::Ok().json(ProfileTipsResponse { tips, created: Utc::now() }))
}

pub fn routes() -> actix_web::Scope {
    web::scope("/ai").service(generate_job_description).service(profile_tips)
}
