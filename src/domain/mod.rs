//! # Domain Layer Module
//!
//! API 계약(DTO)과 서버가 부여하는 메타데이터 모델을 담습니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - 요청/응답 객체 (검증 규칙 포함)
//! └── Models  - 감사(audit) 메타데이터
//! ```
//!
//! 영속 엔티티는 없습니다. 이 서비스는 저장소 없이 요청을 검증하고 변환만 합니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
