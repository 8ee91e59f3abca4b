//! # 프로필 제출 → 사용자 집합 변환
//!
//! 외부 제출 데이터(`CreateUserRequest`)를 저장 가능한 `User` 집합으로 바꿉니다.
//! 저장소에는 접근하지 않고 객체 생성만 수행합니다.
//!
//! ## 변환 규칙
//!
//! - 스칼라 필드는 값 그대로 복사 (검증 없음)
//! - 모든 값 객체는 필드 단위로 새 인스턴스를 생성
//! - `education`, `projects`가 생략되면 빈 컬렉션
//! - `technicalSkills`, `professionalSkills`, `workExperience`, `certifications`가
//!   생략되면 `None` 유지
//! - 새 프로젝트는 ID가 없음
//!
//! ## 프로젝트 소유자
//!
//! 변환 결과에서 각 프로젝트의 소유자는 그 프로젝트를 담고 있는 `User`이며,
//! `user.projects`에 들어 있는 것으로 표현됩니다. 소유자 ID(`Project::owner_id`)는
//! 사용자 ID가 생기는 시점, 즉 리포지토리 저장 중 `User::assign_id`에서 채워집니다.
//! 그 전까지 `owner_id()`는 `None`입니다.

use crate::domain::dto::users::request::{
    CertificationRequest, CreateUserRequest, EducationRequest, ProjectRequest, SkillRequest,
    WorkExperienceRequest,
};
use crate::domain::entities::users::{
    Certification, Education, Project, Skill, User, WorkExperience,
};

/// 제출 요청을 새 `User` 집합으로 변환합니다.
pub fn to_user(request: CreateUserRequest) -> User {
    let CreateUserRequest {
        name,
        email,
        headline,
        location,
        github,
        linkedin,
        portfolio,
        template,
        phone,
        tagline,
        profile_photo,
        highest_qualification,
        experience,
        freelance_available,
        gender,
        resume,
        technical_skills,
        professional_skills,
        work_experience,
        certifications,
        education,
        projects,
    } = request;

    User {
        id: None,
        name,
        email,
        headline,
        location,
        github,
        linkedin,
        portfolio,
        template,
        phone,
        tagline,
        gender,
        profile_photo,
        highest_qualification,
        experience,
        freelance_available,
        resume,
        technical_skills: technical_skills.map(|skills| map_all(skills, to_skill)),
        professional_skills: professional_skills.map(|skills| map_all(skills, to_skill)),
        work_experience: work_experience.map(|entries| map_all(entries, to_work_experience)),
        certifications: certifications.map(|entries| map_all(entries, to_certification)),
        education: map_all(education.unwrap_or_default(), to_education),
        projects: map_all(projects.unwrap_or_default(), to_project),
    }
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        to_user(request)
    }
}

fn map_all<T, U>(items: Vec<T>, f: fn(T) -> U) -> Vec<U> {
    items.into_iter().map(f).collect()
}

fn to_skill(skill: SkillRequest) -> Skill {
    Skill {
        name: skill.name,
        level: skill.level,
    }
}

fn to_education(edu: EducationRequest) -> Education {
    Education {
        school: edu.school,
        degree: edu.degree,
        field: edu.field,
        start_date: edu.start_date,
        end_date: edu.end_date,
        grade: edu.grade,
        location: edu.location,
    }
}

fn to_work_experience(exp: WorkExperienceRequest) -> WorkExperience {
    WorkExperience {
        role: exp.role,
        company: exp.company,
        duration: exp.duration,
        description: exp.description,
        company_website: exp.company_website,
    }
}

fn to_certification(cert: CertificationRequest) -> Certification {
    Certification {
        title: cert.title,
        issuer: cert.issuer,
        date: cert.date,
        link: cert.link,
    }
}

fn to_project(project: ProjectRequest) -> Project {
    Project::new(project.title, project.description, project.link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_scalars_are_copied_as_is() {
        let user = to_user(request(json!({
            "name": "Ada",
            "email": "ada@x.com",
            "headline": "",
            "template": "neon-grid",
            "profilePhoto": "data:image/png;base64,AAAA",
            "highestQualification": "BS",
            "experience": "Fresher",
            "freelanceAvailable": false,
            "resume": "https://example.com/cv.pdf"
        })));

        assert_eq!(user.id, None);
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.email.as_deref(), Some("ada@x.com"));
        assert_eq!(user.headline.as_deref(), Some(""));
        assert_eq!(user.template.as_deref(), Some("neon-grid"));
        assert_eq!(user.profile_photo.as_deref(), Some("data:image/png;base64,AAAA"));
        assert_eq!(user.highest_qualification.as_deref(), Some("BS"));
        assert_eq!(user.experience.as_deref(), Some("Fresher"));
        assert_eq!(user.freelance_available, Some(false));
        assert_eq!(user.resume.as_deref(), Some("https://example.com/cv.pdf"));
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_missing_education_and_projects_become_empty() {
        let user = to_user(request(json!({ "name": "Ada" })));

        assert!(user.education.is_empty());
        assert!(user.projects.is_empty());
    }

    #[test]
    fn test_missing_skill_experience_and_certifications_stay_absent() {
        let user = to_user(request(json!({ "name": "Ada" })));

        assert_eq!(user.technical_skills, None);
        assert_eq!(user.professional_skills, None);
        assert_eq!(user.work_experience, None);
        assert_eq!(user.certifications, None);
    }

    #[test]
    fn test_collections_are_copied_field_by_field() {
        let user = to_user(request(json!({
            "technicalSkills": [{ "name": "C++", "level": 90 }],
            "professionalSkills": [],
            "workExperience": [{
                "role": "Engineer",
                "company": "ABC Corp",
                "duration": "Jan 2022 – Dec 2023",
                "description": "Built things",
                "companyWebsite": "https://abc.com"
            }],
            "certifications": [{ "title": "CKA", "issuer": "CNCF", "date": "2023", "link": "http://c" }],
            "education": [{
                "school": "MIT", "degree": "BS", "field": "CS",
                "startDate": "2000", "endDate": "2004", "grade": "A", "location": "Cambridge"
            }]
        })));

        assert_eq!(
            user.technical_skills,
            Some(vec![Skill { name: Some("C++".to_string()), level: Some(90) }])
        );
        assert_eq!(user.professional_skills, Some(vec![]));

        let experience = &user.work_experience.as_ref().unwrap()[0];
        assert_eq!(experience.role.as_deref(), Some("Engineer"));
        assert_eq!(experience.company_website.as_deref(), Some("https://abc.com"));

        let cert = &user.certifications.as_ref().unwrap()[0];
        assert_eq!(cert.issuer.as_deref(), Some("CNCF"));

        assert_eq!(
            user.education,
            vec![Education {
                school: Some("MIT".to_string()),
                degree: Some("BS".to_string()),
                field: Some("CS".to_string()),
                start_date: Some("2000".to_string()),
                end_date: Some("2004".to_string()),
                grade: Some("A".to_string()),
                location: Some("Cambridge".to_string()),
            }]
        );
    }

    #[test]
    fn test_projects_are_new_and_unowned_until_saved() {
        let user: User = request(json!({
            "projects": [
                { "title": "Engine", "description": "Analytical engine", "link": "http://x" },
                { "title": "Loom" }
            ]
        }))
        .into();

        assert_eq!(user.projects.len(), 2);
        assert_eq!(user.projects[0].title.as_deref(), Some("Engine"));
        assert_eq!(user.projects[0].link.as_deref(), Some("http://x"));
        assert_eq!(user.projects[1].description, None);
        assert!(user.projects.iter().all(|p| p.id.is_none() && p.owner_id().is_none()));
    }

    #[test]
    fn test_mapped_projects_follow_their_user_id() {
        let mut user = to_user(request(json!({
            "projects": [{ "title": "Engine" }, { "title": "Loom" }]
        })));

        user.assign_id(3);

        assert!(user.projects.iter().all(|p| p.owner_id() == Some(3)));
    }

    #[test]
    fn test_submission_order_is_preserved() {
        let user = to_user(request(json!({
            "technicalSkills": [
                { "name": "Rust", "level": 80 },
                { "name": "Go", "level": 60 },
                { "name": "C", "level": 70 }
            ]
        })));

        let names: Vec<_> = user
            .technical_skills
            .unwrap()
            .into_iter()
            .map(|s| s.name.unwrap())
            .collect();
        assert_eq!(names, vec!["Rust", "Go", "C"]);
    }
}
