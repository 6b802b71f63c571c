use validator::Validate;

use super::violation::{flatten, Violation};

/// 시퀀스 필드의 원소 단위 검증이 필요한 타입
///
/// `validator` derive는 필드 단위 규칙만 표현하므로, `Option` 원소를 가진
/// 시퀀스로 내려가는 검증(dive)은 이 trait으로 선언합니다.
/// 중첩 시퀀스가 없는 타입은 기본 구현을 그대로 사용합니다.
pub trait NestedRules {
    fn nested_violations(&self) -> Vec<Violation> {
        Vec::new()
    }
}

/// 시퀀스의 각 원소로 내려가 검증합니다.
///
/// - 비어 있는 원소(`None`)는 `field[i]` 경로의 `required` 위반을 만듭니다.
/// - 존재하는 원소는 자신의 규칙으로 검증되며, 위반은 `field[i].child` 경로로 보고됩니다.
///
/// 시퀀스 자체가 비어 있는지는 필드의 `length(min = 1)` 규칙이 담당하므로,
/// 빈 시퀀스에 대해서는 아무 것도 보고하지 않습니다. 결과는 원소 순서를 따릅니다.
pub fn dive<T: Validate>(field: &str, items: &[Option<T>]) -> Vec<Violation> {
    items
        .iter()
        .enumerate()
        .flat_map(|(index, item)| {
            let path = format!("{}[{}]", field, index);
            match item {
                None => vec![Violation::new(path, "required", "항목이 비어 있습니다")],
                Some(item) => match item.validate() {
                    Ok(()) => Vec::new(),
                    Err(errors) => flatten(Some(&path), &errors),
                },
            }
        })
        .collect()
}
