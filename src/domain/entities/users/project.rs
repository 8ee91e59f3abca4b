//! Project Entity Implementation
//!
//! 사용자에게 소속된 프로젝트 엔티티입니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 프로젝트 엔티티
///
/// 자체 식별자를 가지며 정확히 한 명의 `User`에게 속합니다.
/// 소유자 역참조(`user_id`)는 메모리와 저장소에서만 유지되고 직렬화되지 않으므로
/// `User → projects → User` 형태의 순환 확장이 생기지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    /// 소유 사용자 ID (외래 키)
    #[serde(skip)]
    pub user_id: Option<i64>,
}

impl Project {
    /// 아직 저장되지 않은 새 프로젝트 생성
    pub fn new(title: Option<String>, description: Option<String>, link: Option<String>) -> Self {
        Self {
            id: None,
            title,
            description,
            link,
            user_id: None,
        }
    }

    /// 소유 사용자 ID
    pub fn owner_id(&self) -> Option<i64> {
        self.user_id
    }

    pub(crate) fn assign_owner(&mut self, user_id: i64) {
        self.user_id = Some(user_id);
    }
}
