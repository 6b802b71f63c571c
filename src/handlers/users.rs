//! 사용자 리소스 핸들러
//!
//! 모든 본문 핸들러는 같은 흐름을 따릅니다.
//!
//! ```text
//! 디코딩 (web::Json) → 검증 (RequestValidator) → 변환 (UserService) → 응답
//!       │ 실패                  │ 실패
//!       ▼                       ▼
//!  400 DecodeError        400 ValidationError
//! ```
//!
//! 조회/삭제 핸들러는 본문 없이 경로 파라미터만 사용하며 항상 성공합니다.
//! 식별자 세그먼트가 비어 있는 경로(`/api/v1/user/`)는 `NormalizePath::trim` 이후
//! `/api/v1/user`가 되므로, 빈 식별자용 핸들러를 따로 둡니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{LoginRequest, UserCreateRequest};
use crate::services::users::UserService;
use crate::validation::RequestValidator;

/// 사용자 생성
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/user \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Asha","email":"asha@example.com","adharcard":"123412341234","age":30,
///        "gender":"female","address":[{"street":"12 MG Road","city":"Pune",
///        "country":"India","phone":"9876543210"}]}'
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<UserCreateRequest>,
    validator: web::Data<RequestValidator>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    validator.validate(&*payload)?;

    let response = service.create_user(&payload);

    Ok(HttpResponse::Created().json(response))
}

#[get("/{userid}")]
pub async fn get_user(
    userid: web::Path<String>,
    service: web::Data<UserService>,
) -> HttpResponse {
    HttpResponse::Ok().json(service.get_user(&userid))
}

#[get("")]
pub async fn get_user_without_id(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(service.get_user(""))
}

/// 사용자 수정
///
/// 저장소가 없으므로 `createdBy`/`createdAt`은 `null`로 응답합니다.
#[put("/{id}")]
pub async fn update_user(
    id: web::Path<String>,
    payload: web::Json<UserCreateRequest>,
    validator: web::Data<RequestValidator>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    validator.validate(&*payload)?;

    let response = service.update_user(&id, &payload);

    Ok(HttpResponse::Created().json(response))
}

#[delete("/{id}")]
pub async fn delete_user(
    id: web::Path<String>,
    service: web::Data<UserService>,
) -> HttpResponse {
    HttpResponse::Ok().json(service.delete_user(&id))
}

#[delete("")]
pub async fn delete_user_without_id(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(service.delete_user(""))
}

/// 로그인
///
/// 자격 증명을 검증하지 않고, 형식이 올바른 요청을 그대로 돌려줍니다.
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    validator: web::Data<RequestValidator>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    validator.validate(&*payload)?;

    Ok(HttpResponse::Created().json(service.login(&payload)))
}
