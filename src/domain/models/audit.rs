use chrono::{DateTime, Utc};

/// 서버가 부여하는 감사(audit) 메타데이터
///
/// 생성 시에는 created/updated 필드를 모두 채우고,
/// 수정 시에는 원래 생성 정보를 알 수 있는 저장소가 없으므로 updated 필드만 채웁니다.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditStamp {
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
}

impl AuditStamp {
    pub fn created(actor: &str, now: DateTime<Utc>) -> Self {
        Self {
            created_by: Some(actor.to_string()),
            created_at: Some(now),
            updated_by: actor.to_string(),
            updated_at: now,
        }
    }

    // TODO: 사용자 저장소가 생기면 기존 created_by/created_at을 조회해서 채운다
    pub fn updated(actor: &str, now: DateTime<Utc>) -> Self {
        Self {
            created_by: None,
            created_at: None,
            updated_by: actor.to_string(),
            updated_at: now,
        }
    }
}
