use std::fmt;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// 단일 규칙 위반
///
/// 위반한 필드의 경로(`address[1].phone` 형태), 규칙 코드(`required`, `oneof`, `len` 등),
/// 사람이 읽을 수 있는 메시지를 담습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl Violation {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    fn from_error(field: String, error: &ValidationError) -> Self {
        let message = match &error.message {
            Some(message) => message.to_string(),
            None => format!("'{}' 규칙을 만족하지 않습니다", error.code),
        };

        Self {
            field,
            code: error.code.to_string(),
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}' {}", self.field, self.code, self.message)
    }
}

/// `validator`가 만든 중첩 에러 트리를 평탄한 위반 목록으로 변환합니다.
///
/// `ValidationErrors`는 내부적으로 해시맵이므로, 결과는 필드 경로와 규칙 코드 순으로
/// 정렬하여 같은 입력에 대해 항상 같은 순서를 보장합니다.
pub fn flatten(prefix: Option<&str>, errors: &ValidationErrors) -> Vec<Violation> {
    let mut violations = Vec::new();
    collect(prefix, errors, &mut violations);
    violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    violations
}

fn collect(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(
                    field_errors
                        .iter()
                        .map(|error| Violation::from_error(path.clone(), error)),
                );
            }
            ValidationErrorsKind::Struct(inner) => collect(Some(&path), inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(Some(&format!("{}[{}]", path, index)), inner, out);
                }
            }
        }
    }
}
