//! # Request Validation Module
//!
//! 요청 DTO에 선언된 제약 조건을 평가하여 위반 목록을 만드는 규칙 엔진입니다.
//!
//! ## 지원 규칙
//!
//! | 규칙 | 선언 방법 | 의미 |
//! |------|-----------|------|
//! | `required` | `length(min = 1, code = "required")` | 빈 문자열, 빈 시퀀스 금지 |
//! | `range` | `range(min = 1, max = 130)` | 숫자 범위 (양 끝 포함) |
//! | `oneof` | `custom(function = "...")` | 허용된 값 중 하나와 정확히 일치 |
//! | `len` | `custom(function = "...")` | 정확한 문자 수 |
//! | dive | [`NestedRules`] + [`dive`] | 시퀀스의 각 원소가 존재하고 스스로 유효해야 함 |
//!
//! 필드 단위 규칙은 `validator` derive 속성으로 DTO에 선언하고,
//! 원소 단위 규칙은 `NestedRules` 구현에서 [`dive`]로 선언합니다.
//! 핸들러는 규칙을 직접 검사하지 않고 [`RequestValidator`]에 위임합니다.
//!
//! ## 예제
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct UserCreateRequest {
//!     #[validate(range(min = 1, max = 130))]
//!     pub age: u16,
//!
//!     #[validate(length(min = 1, code = "required"))]
//!     pub addresses: Vec<Option<Address>>,
//! }
//!
//! impl NestedRules for UserCreateRequest {
//!     fn nested_violations(&self) -> Vec<Violation> {
//!         dive("address", &self.addresses)
//!     }
//! }
//!
//! RequestValidator::new().validate(&request)?;
//! ```

pub mod dive;
pub mod request_validator;
pub mod violation;

pub use dive::{dive, NestedRules};
pub use request_validator::RequestValidator;
pub use violation::Violation;
