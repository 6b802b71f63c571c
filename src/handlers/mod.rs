//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 검증과 변환을 직접 수행하지 않고, `web::Data`로 주입된
//! `RequestValidator`와 `UserService`에 위임합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 디코딩, 응답 코드 결정
//! ├─────────────────────────────────────────────┤
//!   Validation - 선언된 필드 규칙 평가
//! ├─────────────────────────────────────────────┤
//!   Services - 요청 → 응답 변환, 감사 필드 부여
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 공유 가변 상태를 갖지 않으므로 요청 간 잠금이나 순서 보장이 필요 없습니다.

pub mod users;
