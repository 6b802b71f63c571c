//! 사용자 관련 요청 DTO

pub mod create_user;
pub mod login_request;

pub use create_user::{Address, UserCreateRequest};
pub use login_request::LoginRequest;
