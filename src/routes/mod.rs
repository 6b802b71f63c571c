//! API 라우트 설정 모듈
//!
//! 사용자 API 엔드포인트와 루트/헬스체크 엔드포인트를 등록합니다.
//!
//! | Method | Path | 성공 코드 | 응답 |
//! |--------|------|-----------|------|
//! | GET | `/` | 200 | `Hello server` (text) |
//! | GET | `/health` | 200 | 상태 JSON |
//! | GET | `/api/v1/user/{userid}` | 200 | `{id, message}` |
//! | GET | `/api/v1/user` | 200 | `{id: "", message}` |
//! | POST | `/api/v1/user` | 201 | `UserResponse` |
//! | POST | `/api/v1/user/login` | 201 | `LoginRequest` 그대로 |
//! | PUT | `/api/v1/user/{id}` | 201 | `UserResponse` |
//! | DELETE | `/api/v1/user/{id}` | 200 | `{id, message}` |
//! | DELETE | `/api/v1/user` | 200 | `{id: "", message}` |
//!
//! 모든 에러 응답은 400과 `{"error": "..."}` JSON 본문입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(RequestValidator::new()))
//!     .app_data(web::Data::new(UserService::new("user")))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 추출기의 에러 처리기도 함께 등록하여, 디코딩 실패가
/// 다른 에러와 같은 JSON 형식의 400 응답이 되도록 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(hello_server);
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/user")
            .service(handlers::users::create_user)
            .service(handlers::users::login)
            .service(handlers::users::get_user_without_id)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user_without_id)
            .service(handlers::users::delete_user),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!("failed to process user request: {}", err);
        AppError::DecodeError(err.to_string()).into()
    })
}

#[get("/")]
async fn hello_server() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello server")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use crate::services::users::UserService;
    use crate::validation::RequestValidator;

    #[actix_web::test]
    async fn test_hello_server() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(body.as_ref(), b"Hello server");
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn test_wrong_content_type_is_decode_error() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RequestValidator::new()))
                .app_data(web::Data::new(UserService::new("user")))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/user/login")
            .insert_header(("content-type", "text/plain"))
            .set_payload(r#"{"UserName":"a","Password":"b"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json["error"].as_str().unwrap().starts_with("Decode error"));
    }
}
