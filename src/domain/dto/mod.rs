//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 객체를 정의합니다.
//! 요청 DTO는 `validator` derive 속성으로 필드 제약을 선언하고,
//! 응답 DTO는 요청 값을 복사한 뒤 서버가 부여한 감사 필드를 덧붙입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/
//!     ├── request/        # 클라이언트 → 서버
//!     │   ├── create_user.rs     (UserCreateRequest, Address)
//!     │   └── login_request.rs   (LoginRequest)
//!     └── response/       # 서버 → 클라이언트
//!         └── user_response.rs   (UserResponse, UserAcknowledgement)
//! ```
//!
//! ## 생명 주기
//!
//! 모든 DTO는 요청 하나의 범위에서만 존재합니다.
//! 본문 디코딩 시 생성되고 응답 전송 후 소멸하며, 어디에도 저장되지 않습니다.

pub mod users;

pub use users::*;
