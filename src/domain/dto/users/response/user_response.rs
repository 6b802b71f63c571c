use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::{Address, UserCreateRequest};
use crate::domain::models::AuditStamp;

/// 사용자 생성/수정 응답
///
/// 요청 필드를 그대로 복사하고 서버가 부여한 감사 필드를 덧붙입니다.
/// 수정 응답의 `createdBy`/`createdAt`은 알 수 없으므로 `null`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub name: String,
    pub email: String,

    #[serde(rename = "adharcard")]
    pub national_id: String,

    pub age: u16,
    pub gender: String,

    #[serde(rename = "address")]
    pub addresses: Vec<Address>,

    pub created_by: Option<String>,
    pub updated_by: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl UserResponse {
    /// 검증을 통과한 요청으로부터 응답을 만듭니다.
    ///
    /// 주소 목록은 요청과 저장 공간을 공유하지 않는 새 벡터로 복사됩니다.
    /// 검증을 통과한 요청에는 빈 원소가 없으므로 `None`은 건너뜁니다.
    pub fn from_request(request: &UserCreateRequest, stamp: AuditStamp) -> Self {
        let mut addresses = Vec::with_capacity(request.addresses.len());
        addresses.extend(request.addresses.iter().flatten().cloned());

        let AuditStamp {
            created_by,
            created_at,
            updated_by,
            updated_at,
        } = stamp;

        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            national_id: request.national_id.clone(),
            age: request.age,
            gender: request.gender.clone(),
            addresses,
            created_by,
            updated_by,
            created_at,
            updated_at,
        }
    }
}

/// 조회/삭제 확인 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAcknowledgement {
    pub id: String,
    pub message: String,
}

impl UserAcknowledgement {
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> UserCreateRequest {
        UserCreateRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            national_id: "123412341234".to_string(),
            age: 30,
            gender: "female".to_string(),
            addresses: vec![Some(Address {
                street: "12 MG Road".to_string(),
                city: "Pune".to_string(),
                country: "India".to_string(),
                phone: "9876543210".to_string(),
            })],
        }
    }

    #[test]
    fn test_from_request_copies_fields() {
        let req = request();
        let now = Utc::now();

        let res = UserResponse::from_request(&req, AuditStamp::created("user", now));

        assert_eq!(res.name, req.name);
        assert_eq!(res.email, req.email);
        assert_eq!(res.national_id, req.national_id);
        assert_eq!(res.age, req.age);
        assert_eq!(res.gender, req.gender);
        assert_eq!(res.addresses.len(), 1);
        assert_eq!(Some(res.addresses[0].clone()), req.addresses[0]);
        assert_eq!(res.created_at, Some(now));
    }

    #[test]
    fn test_response_addresses_do_not_alias_request() {
        let req = request();
        let mut res = UserResponse::from_request(&req, AuditStamp::created("user", Utc::now()));

        res.addresses[0].city = "Mumbai".to_string();
        res.addresses.push(Address::default());

        assert_eq!(req.addresses.len(), 1);
        assert_eq!(req.addresses[0].as_ref().unwrap().city, "Pune");
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let res = UserResponse::from_request(&request(), AuditStamp::updated("user", Utc::now()));

        let json = serde_json::to_value(&res).unwrap();

        assert_eq!(json["adharcard"], "123412341234");
        assert_eq!(json["address"][0]["phone"], "9876543210");
        assert_eq!(json["updatedBy"], "user");
        assert!(json["updatedAt"].is_string());
        assert!(json["createdBy"].is_null());
        assert!(json["createdAt"].is_null());
    }
}
