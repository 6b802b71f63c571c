use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::serde_utils::null_as_default;
use crate::validation::NestedRules;

/// 로그인 요청
///
/// 자격 증명 검증은 수행하지 않으며 응답은 요청을 그대로 돌려줍니다.
/// 자격 증명 저장소가 연동되기 전까지의 경계 역할만 합니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(rename = "UserName", deserialize_with = "null_as_default")]
    #[validate(length(min = 1, code = "required", message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[serde(rename = "Password", deserialize_with = "null_as_default")]
    #[validate(length(min = 1, code = "required", message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl NestedRules for LoginRequest {}
