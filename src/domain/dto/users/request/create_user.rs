//! # 사용자 프로필 제출 요청 DTO
//!
//! `POST /api/users` 본문을 표현하는 전송용 타입입니다.
//! `User` 집합과 같은 모양이지만 저장소 관련 속성(ID, 소유자 역참조)이 없고,
//! 엔티티 타입과 분리되어 있어 전송 표현과 영속 표현이 서로를 공유하지 않습니다.
//!
//! 모든 필드는 생략 가능하며 값 검증은 하지 않습니다. 빈 문자열, 잘못된 날짜,
//! 범위를 벗어난 역량 수치, 잘못된 URL 모두 그대로 받아들입니다.
//!
//! 프론트엔드 폼은 역량 수치(`level`)를 문자열로 보냅니다 (`"80"`, 입력 전에는 `""`).
//! [`deserialize_optional_level`]이 정수, 숫자 문자열, 빈 문자열, `null`을 모두 받습니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "Ada",
//!   "email": "ada@x.com",
//!   "technicalSkills": [{ "name": "C++", "level": 90 }],
//!   "education": [{
//!     "school": "MIT", "degree": "BS", "field": "CS",
//!     "startDate": "2000", "endDate": "2004", "grade": "A", "location": "Cambridge"
//!   }],
//!   "projects": [{ "title": "Engine", "description": "Analytical engine", "link": "http://x" }]
//! }
//! ```

use serde::{de, Deserialize, Deserializer, Serialize};

/// 사용자 프로필 제출 요청
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    // 기본 인적 사항
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
    pub profile_photo: Option<String>,
    pub highest_qualification: Option<String>,
    pub experience: Option<String>,
    pub freelance_available: Option<bool>,
    pub gender: Option<String>,
    pub resume: Option<String>,

    pub technical_skills: Option<Vec<SkillRequest>>,
    pub professional_skills: Option<Vec<SkillRequest>>,
    pub work_experience: Option<Vec<WorkExperienceRequest>>,
    pub certifications: Option<Vec<CertificationRequest>>,
    pub education: Option<Vec<EducationRequest>>,
    pub projects: Option<Vec<ProjectRequest>>,
}

/// 프로젝트 항목 (ID, 소유자 없음)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_level")]
    pub level: Option<i32>,
}

/// 역량 수치를 위한 serde deserializer
///
/// # 반환값
/// * `Ok(Some(n))` - 정수 또는 숫자 문자열 (앞뒤 공백 제거 후 파싱, 실수는 소수점 이하 버림)
/// * `Ok(None)` - `null`, 빈 문자열, 공백만 있는 문자열
/// * `Err(D::Error)` - 숫자로 해석할 수 없는 문자열
///
/// # 예제
/// ```rust,ignore
/// // JSON: {"level": 80}   → Some(80)
/// // JSON: {"level": "80"} → Some(80)
/// // JSON: {"level": ""}   → None
/// // JSON: {"level": null} → None
/// ```
pub fn deserialize_optional_level<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Level {
        Int(i32),
        Float(f64),
        Text(String),
    }

    match Option::<Level>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Level::Int(n)) => Ok(Some(n)),
        Some(Level::Float(f)) => Ok(Some(f as i32)),
        Some(Level::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid skill level: {:?}", s)))
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub grade: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceRequest {
    pub role: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub company_website: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificationRequest {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub link: Option<String>,
}
