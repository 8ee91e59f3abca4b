//! User Entity Implementation
//!
//! 포트폴리오 프로필의 집합 루트(aggregate root)인 사용자 엔티티입니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use super::project::Project;
use super::values::{Certification, Education, Skill, WorkExperience};

/// 사용자 엔티티
///
/// 스칼라 프로필 필드와 소유 컬렉션(값 객체 5종, `Project` 엔티티)을 가집니다.
/// 소유 컬렉션의 생명주기는 사용자에게 종속되며, 저장 시 통째로 교체됩니다.
///
/// `technical_skills`, `professional_skills`, `work_experience`, `certifications`는
/// 제출 시 생략되면 `None`으로 남고, `education`, `projects`는 항상 존재합니다.
///
/// `email`에는 유니크 제약이 없습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub template: Option<String>,
    pub phone: Option<String>,
    pub tagline: Option<String>,
    pub gender: Option<String>,
    /// 프로필 사진 (긴 텍스트, 보통 base64)
    pub profile_photo: Option<String>,
    pub highest_qualification: Option<String>,
    /// 예: "Fresher", "2 years"
    pub experience: Option<String>,
    pub freelance_available: Option<bool>,
    /// 이력서 (긴 텍스트, base64 문자열 또는 URL)
    pub resume: Option<String>,

    #[sqlx(skip)]
    #[serde(default)]
    pub projects: Vec<Project>,
    #[sqlx(skip)]
    pub technical_skills: Option<Vec<Skill>>,
    #[sqlx(skip)]
    pub professional_skills: Option<Vec<Skill>>,
    #[sqlx(skip)]
    pub work_experience: Option<Vec<WorkExperience>>,
    #[sqlx(skip)]
    pub certifications: Option<Vec<Certification>>,
    #[sqlx(skip)]
    #[serde(default)]
    pub education: Vec<Education>,
}

impl User {
    /// 저장소가 부여한 ID를 설정하고 모든 프로젝트의 소유자 역참조를 갱신합니다.
    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
        for project in &mut self.projects {
            project.assign_owner(id);
        }
    }

    /// 저장된 적이 있는지 여부
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_id_sets_project_back_references() {
        let mut user = User {
            projects: vec![
                Project::new(Some("Engine".to_string()), None, None),
                Project::new(Some("Loom".to_string()), None, None),
            ],
            ..Default::default()
        };

        assert!(!user.is_persisted());
        user.assign_id(12);

        assert!(user.is_persisted());
        assert!(user.projects.iter().all(|p| p.owner_id() == Some(12)));
    }

    #[test]
    fn test_serialization_is_camel_case_without_cycles() {
        let mut user = User {
            name: Some("Ada".to_string()),
            profile_photo: Some("data:image/png;base64,AAAA".to_string()),
            freelance_available: Some(true),
            projects: vec![Project::new(Some("Engine".to_string()), None, None)],
            ..Default::default()
        };
        user.assign_id(1);

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["profilePhoto"], "data:image/png;base64,AAAA");
        assert_eq!(value["freelanceAvailable"], true);
        assert!(value["technicalSkills"].is_null());
        assert_eq!(value["education"], serde_json::json!([]));
        assert!(value["projects"][0].get("user").is_none());
        assert!(value["projects"][0].get("user_id").is_none());
    }
}
