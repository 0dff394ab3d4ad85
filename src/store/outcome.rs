use serde::Serialize;

/// 장바구니/위시리스트 변경 결과
/// 알림 여부와 방식은 표시 계층에서 결정한다
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum MutationOutcome {
    Added,
    AlreadyPresent,
    Removed,
    NotFound,
    Cleared { count: usize },
}

impl MutationOutcome {
    /// 컬렉션이 실제로 변경되었는지 여부
    pub fn changed(&self) -> bool {
        match self {
            MutationOutcome::Added | MutationOutcome::Removed => true,
            MutationOutcome::Cleared { count } => *count > 0,
            MutationOutcome::AlreadyPresent | MutationOutcome::NotFound => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_an_empty_collection_is_not_a_change() {
        assert!(!MutationOutcome::Cleared { count: 0 }.changed());
        assert!(MutationOutcome::Cleared { count: 2 }.changed());
        assert!(!MutationOutcome::AlreadyPresent.changed());
    }
}
