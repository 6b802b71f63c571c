//! 요청 DTO용 역직렬화 헬퍼
//!
//! `null`이나 범위를 벗어난 숫자가 디코딩 에러로 끝나지 않고
//! 검증 단계까지 도달하도록 값을 정규화합니다.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// `null`을 타입의 기본값(빈 문자열, 빈 벡터 등)으로 디코딩합니다.
///
/// ```rust,ignore
/// #[serde(deserialize_with = "null_as_default")]
/// pub name: String,
/// ```
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 정수를 `u16` 범위로 포화시켜 디코딩합니다.
///
/// - `null` → 0
/// - 음수 → 0
/// - `u16::MAX`보다 큰 값 → `u16::MAX`
///
/// 포화된 값은 실제 허용 범위(예: 1-130) 밖이므로 `range` 규칙 위반으로 보고됩니다.
/// 정수가 아닌 값(소수, 문자열)은 디코딩 에러입니다.
pub fn saturating_u16<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<serde_json::Number>::deserialize(deserializer)? {
        Some(number) => number,
        None => return Ok(0),
    };

    if let Some(value) = number.as_u64() {
        return Ok(u16::try_from(value).unwrap_or(u16::MAX));
    }
    if number.as_i64().is_some() {
        return Ok(0);
    }

    Err(D::Error::custom(format!("expected an integer, got {}", number)))
}
