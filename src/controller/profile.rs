use crate::entities::User;
use actix_web::{get, web, HttpResponse};

/// The profile tab shows a single demo account until real authentication
/// lands.
#[get("")]
pub async fn current_profile() -> HttpResponse {
    HttpResponse::Ok().json(User::demo())
}

pub fn routes() -> actix_web::Scope {
    web::scope("/profile").service(current_profile)
}
