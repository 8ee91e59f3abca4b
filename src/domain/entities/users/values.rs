//! 사용자 프로필 값 객체
//!
//! 자체 식별자가 없는 값 객체들입니다. 소유한 `User` 컬렉션 안에서의 위치로만
//! 구분되며, 저장 시 사용자 단위로 통째로 교체됩니다.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 기술/전문 역량 (`level`은 0-100 퍼센트, 범위 검증 없음)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Skill {
    pub name: Option<String>,
    pub level: Option<i32>,
}

/// 학력 항목
///
/// 날짜는 문자열 그대로 저장하며 형식을 검증하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub grade: Option<String>,
    pub location: Option<String>,
}

/// 경력 항목
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub role: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub company_website: Option<String>,
}

/// 자격증 항목
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Certification {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}
