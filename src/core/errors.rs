//! # Application Error Handling System
//!
//! 사용자 API를 위한 통합 에러 처리 시스템입니다.
//! 요청 단위로 발생하는 에러는 두 종류뿐이며, 모두 400 Bad Request로 응답됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `DecodeError` | 400 Bad Request | JSON 본문 파싱 실패, Content-Type 오류 |
//! | `ValidationError` | 400 Bad Request | 선언된 필드 제약 조건 위반 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Validation error: age: 'range' ...; gender: 'oneof' ...",
//!   "violations": [
//!     { "field": "age", "code": "range", "message": "..." }
//!   ]
//! }
//! ```
//!
//! `violations` 배열은 `ValidationError`일 때만 포함됩니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn create_user(
//!     payload: web::Json<UserCreateRequest>,
//!     validator: web::Data<RequestValidator>,
//! ) -> Result<HttpResponse, AppError> {
//!     validator.validate(&payload)?; // 자동으로 400 응답으로 변환됨
//!     // ...
//! }
//! ```

use thiserror::Error;

use crate::validation::Violation;

/// 애플리케이션 전역 에러 타입
///
/// 요청 처리 중 발생할 수 있는 에러를 표현합니다.
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
/// 두 변형 모두 요청 범위에서 끝나며 재시도되거나 상위로 전파되지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 본문 디코딩 에러
    ///
    /// 본문이 JSON으로 해석되지 않거나, 필드 타입이 맞지 않거나,
    /// Content-Type이 `application/json`이 아닐 때 발생합니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// web::JsonConfig::default()
    ///     .error_handler(|err, _req| AppError::DecodeError(err.to_string()).into());
    /// ```
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// 입력값 검증 에러
    ///
    /// 형식은 올바르지만 하나 이상의 필드 제약을 만족하지 않을 때 발생합니다.
    /// 첫 번째 위반만이 아니라 모든 위반 사항을 담습니다.
    #[error("Validation error: {}", join_violations(.0))]
    ValidationError(Vec<Violation>),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::DecodeError(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러 응답은 `error` 필드에 사람이 읽을 수 있는 메시지를 담습니다.
    /// 검증 에러는 `violations` 필드에 구조화된 위반 목록을 추가로 담습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(violations) => serde_json::json!({
                "error": self.to_string(),
                "violations": violations,
            }),
            AppError::DecodeError(_) => serde_json::json!({
                "error": self.to_string(),
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// use crate::core::errors::AppResult;
///
/// fn validate(&self, request: &UserCreateRequest) -> AppResult<()> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
