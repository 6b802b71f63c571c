//! # User Service
//!
//! 검증을 통과한 요청을 응답으로 변환하는 서비스입니다.
//! 저장소가 없으므로 어떤 상태도 읽거나 쓰지 않으며, 모든 연산은 순수한 변환입니다.
//!
//! ## 연산
//!
//! | 메서드 | 동작 |
//! |--------|------|
//! | `create_user` | 필드 복사 + created/updated 감사 필드 부여 |
//! | `update_user` | 필드 복사 + updated 감사 필드만 부여 |
//! | `login` | 요청을 그대로 반환 (자격 증명 검증 없음) |
//! | `get_user` | 식별자와 고정 메시지 반환 |
//! | `delete_user` | 식별자와 고정 메시지 반환 |

use chrono::Utc;
use log::debug;

use crate::domain::dto::users::{
    request::{LoginRequest, UserCreateRequest},
    response::{UserAcknowledgement, UserResponse},
};
use crate::domain::models::AuditStamp;

pub const WELCOME_MESSAGE: &str = "Welcome user";
pub const DELETED_MESSAGE: &str = "User deleted";

/// 사용자 요청 변환 서비스
///
/// 감사 필드에 기록할 행위자 이름만 가지며, 시작 시 한 번 생성되어 핸들러에 주입됩니다.
#[derive(Debug, Clone)]
pub struct UserService {
    actor: String,
}

impl UserService {
    pub fn new(actor: impl Into<String>) -> Self {
        Self {
            actor: actor.into(),
        }
    }

    pub fn create_user(&self, request: &UserCreateRequest) -> UserResponse {
        UserResponse::from_request(request, AuditStamp::created(&self.actor, Utc::now()))
    }

    pub fn update_user(&self, id: &str, request: &UserCreateRequest) -> UserResponse {
        debug!("사용자 수정 요청: id={}", id);
        UserResponse::from_request(request, AuditStamp::updated(&self.actor, Utc::now()))
    }

    // 자격 증명 저장소가 연동되면 여기서 검증한다
    pub fn login(&self, request: &LoginRequest) -> LoginRequest {
        LoginRequest {
            username: request.username.clone(),
            password: request.password.clone(),
        }
    }

    pub fn get_user(&self, id: &str) -> UserAcknowledgement {
        UserAcknowledgement::new(id, WELCOME_MESSAGE)
    }

    pub fn delete_user(&self, id: &str) -> UserAcknowledgement {
        UserAcknowledgement::new(id, DELETED_MESSAGE)
    }
}
