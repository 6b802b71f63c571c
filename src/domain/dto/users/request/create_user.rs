//! 사용자 생성/수정 요청 DTO
//!
//! `POST /api/v1/user`와 `PUT /api/v1/user/{id}`가 같은 본문 형식을 사용합니다.
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `age` | 1 이상 130 이하 |
//! | `gender` | `male`, `female`, `prefer_not_to` 중 하나 |
//! | `address` | 비어 있지 않아야 하며, 모든 원소가 존재하고 스스로 유효해야 함 |
//! | `address[].street`, `city`, `country` | 필수 |
//! | `address[].phone` | 필수, 정확히 10자 |
//!
//! 누락되거나 `null`인 필드는 빈 값으로 디코딩되어 디코딩 에러가 아닌 `required` 위반으로 보고됩니다.
//! `age`는 `u16` 범위로 포화되므로 음수나 아주 큰 값도 `age`의 `range` 위반이 됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::serde_utils::{null_as_default, saturating_u16};
use crate::validation::{dive, NestedRules, Violation};

/// 허용되는 성별 값
pub const GENDERS: [&str; 3] = ["male", "female", "prefer_not_to"];

/// 전화번호 문자 수
pub const PHONE_LEN: usize = 10;

/// 주소 정보
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Address {
    #[validate(length(min = 1, code = "required", message = "도로명은 필수입니다"))]
    #[serde(deserialize_with = "null_as_default")]
    pub street: String,

    #[validate(length(min = 1, code = "required", message = "도시는 필수입니다"))]
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,

    #[validate(length(min = 1, code = "required", message = "국가는 필수입니다"))]
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,

    #[validate(length(min = 1, code = "required", message = "전화번호는 필수입니다"))]
    #[validate(custom(function = "validate_phone_len"))]
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
}

/// 사용자 생성/수정 요청
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserCreateRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(rename = "adharcard", deserialize_with = "null_as_default")]
    pub national_id: String,

    #[serde(deserialize_with = "saturating_u16")]
    #[validate(range(min = 1, max = 130, message = "나이는 1-130 사이여야 합니다"))]
    pub age: u16,

    #[serde(deserialize_with = "null_as_default")]
    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[serde(rename = "address", alias = "addresses", deserialize_with = "null_as_default")]
    #[validate(length(min = 1, code = "required", message = "주소는 최소 1개 이상 필요합니다"))]
    pub addresses: Vec<Option<Address>>,
}

impl NestedRules for UserCreateRequest {
    fn nested_violations(&self) -> Vec<Violation> {
        dive("address", &self.addresses)
    }
}

fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    if !GENDERS.contains(&gender) {
        return Err(ValidationError::new("oneof")
            .with_message("성별은 male, female, prefer_not_to 중 하나여야 합니다".into()));
    }
    Ok(())
}

fn validate_phone_len(phone: &str) -> Result<(), ValidationError> {
    // 빈 값은 required 규칙이 보고한다
    if !phone.is_empty() && phone.chars().count() != PHONE_LEN {
        return Err(ValidationError::new("len")
            .with_message("전화번호는 정확히 10자여야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            country: "India".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_address_valid() {
        assert!(address().validate().is_ok());
    }

    #[test]
    fn test_address_empty_phone_reports_required_only() {
        let mut addr = address();
        addr.phone = String::new();

        let errors = addr.validate().unwrap_err();
        let field_errors = errors.field_errors();
        let phone = field_errors["phone"];

        assert_eq!(phone.len(), 1);
        assert_eq!(phone[0].code, "required");
    }

    #[test]
    fn test_address_phone_length_counts_characters() {
        let mut addr = address();
        addr.phone = "987654321".to_string();
        assert!(addr.validate().is_err());

        addr.phone = "०१२३४५६७८९".to_string();
        assert!(addr.validate().is_ok());
    }

    #[test]
    fn test_gender_rule() {
        for gender in GENDERS {
            assert!(validate_gender(gender).is_ok());
        }

        let err = validate_gender("other").unwrap_err();
        assert_eq!(err.code, "oneof");
        assert!(validate_gender("Male").is_err());
        assert!(validate_gender("").is_err());
    }

    #[test]
    fn test_deserialize_uses_wire_names() {
        let json = r#"{
            "name": "Asha",
            "email": "asha@example.com",
            "adharcard": "123412341234",
            "age": 30,
            "gender": "female",
            "address": [
                {"street": "12 MG Road", "city": "Pune", "country": "India", "phone": "9876543210"},
                null
            ]
        }"#;

        let request: UserCreateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.national_id, "123412341234");
        assert_eq!(request.age, 30);
        assert_eq!(request.addresses.len(), 2);
        assert_eq!(request.addresses[0], Some(address()));
        assert_eq!(request.addresses[1], None);
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let request: UserCreateRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(request, UserCreateRequest::default());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deserialize_accepts_addresses_alias() {
        let json = r#"{"addresses": [{"street": "s", "city": "c", "country": "k", "phone": "0123456789"}]}"#;

        let request: UserCreateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.addresses.len(), 1);
    }

    #[test]
    fn test_deserialize_nulls_and_out_of_range_age_reach_validation() {
        let json = r#"{"name": null, "age": 70000, "gender": null, "address": null}"#;

        let request: UserCreateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name, "");
        assert_eq!(request.age, u16::MAX);
        assert_eq!(request.gender, "");
        assert!(request.addresses.is_empty());

        let request: UserCreateRequest =
            serde_json::from_str(r#"{"age": -1, "address": [{"phone": null}]}"#).unwrap();
        assert_eq!(request.age, 0);
        assert_eq!(request.addresses[0].as_ref().unwrap().phone, "");
    }
}
