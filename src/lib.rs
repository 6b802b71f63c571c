//! 사용자 서비스 백엔드
//!
//! 사용자 리소스에 대한 생성/조회/수정/삭제/로그인 엔드포인트를 제공하는
//! 상태 없는 HTTP 서비스입니다. 요청 본문을 JSON으로 디코딩하고, 선언된 필드 규칙으로
//! 검증한 뒤, 서버가 부여한 감사 필드를 덧붙여 돌려줍니다.
//!
//! # Features
//!
//! - **선언적 검증**: `validator` derive 속성 + 시퀀스 원소 단위 dive
//! - **전체 위반 보고**: 첫 번째 위반이 아닌 모든 위반을 400 응답에 포함
//! - **감사 필드**: createdAt/updatedAt, createdBy/updatedBy 자동 부여
//! - **저장소 없음**: 어떤 요청도 상태를 읽거나 쓰지 않음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 디코딩, 응답 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validation    │ ← 필드 규칙 평가
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 요청 → 응답 변환
//! └─────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;
