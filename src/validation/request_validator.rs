use log::debug;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};

use super::dive::NestedRules;
use super::violation::{flatten, Violation};

/// 요청 DTO 검증기
///
/// 프로세스 시작 시 한 번 생성되어 `web::Data`로 각 핸들러에 주입됩니다.
/// 상태를 갖지 않으며, 입력을 변경하지 않고, 같은 입력에 대해 항상 같은 결과를 냅니다.
///
/// # Examples
///
/// ```rust,ignore
/// let validator = web::Data::new(RequestValidator::new());
/// App::new().app_data(validator.clone());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestValidator;

impl RequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// 요청의 모든 위반 사항을 수집합니다.
    ///
    /// 필드 규칙 위반은 필드 경로, 규칙 코드 순으로 정렬되며
    /// 시퀀스 원소 위반은 그 뒤에 원소 순서대로 이어집니다.
    pub fn violations<T>(&self, request: &T) -> Vec<Violation>
    where
        T: Validate + NestedRules,
    {
        let mut violations = match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => flatten(None, &errors),
        };
        violations.extend(request.nested_violations());
        violations
    }

    /// 요청을 검증하고, 위반이 있으면 전체 목록을 담은 `AppError::ValidationError`를 반환합니다.
    pub fn validate<T>(&self, request: &T) -> AppResult<()>
    where
        T: Validate + NestedRules,
    {
        let violations = self.violations(request);
        if violations.is_empty() {
            return Ok(());
        }

        debug!("요청 검증 실패: {}개 위반", violations.len());
        Err(AppError::ValidationError(violations))
    }
}
