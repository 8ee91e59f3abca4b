//! # 사용자 리포지토리 구현
//!
//! 사용자 집합(User + 소유 컬렉션)의 영속화를 담당하는 리포지토리입니다.
//! 관계형 저장소(SQLite)를 사용하며, 집합 하나가 여러 테이블에 정규화되어 저장됩니다.
//!
//! ## 테이블 구성
//!
//! | 테이블 | 내용 |
//! |--------|------|
//! | `users` | 스칼라 프로필 필드 |
//! | `projects` | 프로젝트 (`user_id` 외래 키, 자체 ID) |
//! | `user_technical_skills` | 기술 역량 값 객체 |
//! | `user_professional_skills` | 전문 역량 값 객체 |
//! | `user_education` | 학력 값 객체 |
//! | `user_work_experience` | 경력 값 객체 |
//! | `user_certifications` | 자격증 값 객체 |
//!
//! 값 객체 테이블은 `(user_id, position)`만 키로 가지며, 저장할 때마다 전부
//! 지우고 다시 씁니다. 부분 병합은 없습니다.

use async_trait::async_trait;
use log::debug;
use sqlx::{SqliteConnection, SqlitePool};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{
    Certification, Education, Project, Skill, User, WorkExperience,
};

const TECHNICAL_SKILLS_TABLE: &str = "user_technical_skills";
const PROFESSIONAL_SKILLS_TABLE: &str = "user_professional_skills";

/// 사용자 집합 영속화 게이트웨이
///
/// 서비스 계층은 이 trait에만 의존하며, 구현체는 생성자 주입으로 전달됩니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 사용자 집합 저장
    ///
    /// ID가 없으면 새로 삽입하고, 있으면 해당 행을 갱신(없으면 그 ID로 삽입)합니다.
    /// 소유 컬렉션은 전달된 내용과 정확히 일치하도록 교체됩니다.
    /// 반환값은 전달된 집합에 부여된 ID(사용자, 프로젝트)와 소유자 역참조를 채운 것입니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// ID로 사용자 집합 전체를 조회합니다. 없으면 `Ok(None)`.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 이메일로 사용자 집합을 조회합니다.
    ///
    /// 이메일은 유니크하지 않으므로 일치하는 사용자 중 하나(가장 먼저 생성된 것)를
    /// 반환합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// `sqlx` 기반 SQLite 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = SqlUserRepository::new(database.pool().clone());
///
/// let saved = repo.save(user).await?;
/// let loaded = repo.find_by_id(saved.id.unwrap()).await?;
/// ```
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: SqlitePool,
}

impl SqlUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut tx = self.pool.begin().await?;

        let user_id = upsert_user_row(&mut tx, &user).await?;
        user.assign_id(user_id);

        save_projects(&mut tx, user_id, &mut user.projects).await?;
        replace_skills(&mut tx, TECHNICAL_SKILLS_TABLE, user_id, user.technical_skills.as_deref()).await?;
        replace_skills(&mut tx, PROFESSIONAL_SKILLS_TABLE, user_id, user.professional_skills.as_deref()).await?;
        replace_education(&mut tx, user_id, &user.education).await?;
        replace_work_experience(&mut tx, user_id, user.work_experience.as_deref()).await?;
        replace_certifications(&mut tx, user_id, user.certifications.as_deref()).await?;

        tx.commit().await?;

        debug!("사용자 저장 완료: id={}, projects={}", user_id, user.projects.len());

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let mut tx = self.pool.begin().await?;
        let user = load_user(&mut tx, id).await?;
        tx.commit().await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let mut tx = self.pool.begin().await?;

        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email = ? ORDER BY id LIMIT 1")
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;

        let user = match id {
            Some(id) => load_user(&mut tx, id).await?,
            None => None,
        };
        tx.commit().await?;

        Ok(user)
    }
}

/// 사용자 행을 삽입 또는 갱신하고 ID를 반환합니다.
async fn upsert_user_row(conn: &mut SqliteConnection, user: &User) -> AppResult<i64> {
    let result = sqlx::query(
        r#"INSERT INTO users (
            id, name, email, headline, location, github, linkedin, portfolio, template,
            phone, tagline, gender, profile_photo, highest_qualification, experience,
            freelance_available, resume
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT (id) DO UPDATE SET
            name = excluded.name,
            email = excluded.email,
            headline = excluded.headline,
            location = excluded.location,
            github = excluded.github,
            linkedin = excluded.linkedin,
            portfolio = excluded.portfolio,
            template = excluded.template,
            phone = excluded.phone,
            tagline = excluded.tagline,
            gender = excluded.gender,
            profile_photo = excluded.profile_photo,
            highest_qualification = excluded.highest_qualification,
            experience = excluded.experience,
            freelance_available = excluded.freelance_available,
            resume = excluded.resume"#,
    )
    .bind(user.id)
    .bind(user.name.as_deref())
    .bind(user.email.as_deref())
    .bind(user.headline.as_deref())
    .bind(user.location.as_deref())
    .bind(user.github.as_deref())
    .bind(user.linkedin.as_deref())
    .bind(user.portfolio.as_deref())
    .bind(user.template.as_deref())
    .bind(user.phone.as_deref())
    .bind(user.tagline.as_deref())
    .bind(user.gender.as_deref())
    .bind(user.profile_photo.as_deref())
    .bind(user.highest_qualification.as_deref())
    .bind(user.experience.as_deref())
    .bind(user.freelance_available)
    .bind(user.resume.as_deref())
    .execute(&mut *conn)
    .await?;

    // upsert 가 UPDATE 로 끝나면 last_insert_rowid 는 의미가 없다
    Ok(user.id.unwrap_or_else(|| result.last_insert_rowid()))
}

/// 프로젝트를 삽입/갱신하고, 전달되지 않은 기존 프로젝트는 삭제합니다.
///
/// 프로젝트는 한 사용자에게만 속하므로, 다른 사용자가 소유한 프로젝트 ID가 들어오면
/// `AppError::ValidationError`를 반환하고 트랜잭션 전체가 롤백됩니다.
async fn save_projects(conn: &mut SqliteConnection, user_id: i64, projects: &mut [Project]) -> AppResult<()> {
    let mut kept = Vec::with_capacity(projects.len());

    for project in projects.iter_mut() {
        let id = match project.id {
            Some(id) => {
                // 다른 사용자의 프로젝트 ID 면 갱신되지 않고 영향 행이 0 이 된다
                let affected = sqlx::query(
                    r#"INSERT INTO projects (id, user_id, title, description, link)
                    VALUES (?, ?, ?, ?, ?)
                    ON CONFLICT (id) DO UPDATE SET
                        title = excluded.title,
                        description = excluded.description,
                        link = excluded.link
                    WHERE projects.user_id = excluded.user_id"#,
                )
                .bind(id)
                .bind(user_id)
                .bind(project.title.as_deref())
                .bind(project.description.as_deref())
                .bind(project.link.as_deref())
                .execute(&mut *conn)
                .await?
                .rows_affected();

                if affected == 0 {
                    return Err(AppError::ValidationError(format!(
                        "프로젝트 {}는 다른 사용자의 소유입니다",
                        id
                    )));
                }
                id
            }
            None => sqlx::query("INSERT INTO projects (user_id, title, description, link) VALUES (?, ?, ?, ?)")
                .bind(user_id)
                .bind(project.title.as_deref())
                .bind(project.description.as_deref())
                .bind(project.link.as_deref())
                .execute(&mut *conn)
                .await?
                .last_insert_rowid(),
        };

        project.id = Some(id);
        project.assign_owner(user_id);
        kept.push(id);
    }

    let existing: Vec<i64> = sqlx::query_scalar("SELECT id FROM projects WHERE user_id = ?")
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await?;

    for stale in existing.into_iter().filter(|id| !kept.contains(id)) {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(stale)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

async fn clear_collection(conn: &mut SqliteConnection, table: &str, user_id: i64) -> AppResult<()> {
    sqlx::query(&format!("DELETE FROM {} WHERE user_id = ?", table))
        .bind(user_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

async fn replace_skills(
    conn: &mut SqliteConnection,
    table: &str,
    user_id: i64,
    skills: Option<&[Skill]>,
) -> AppResult<()> {
    clear_collection(conn, table, user_id).await?;

    let insert = format!("INSERT INTO {} (user_id, position, name, level) VALUES (?, ?, ?, ?)", table);
    for (position, skill) in skills.unwrap_or_default().iter().enumerate() {
        sqlx::query(&insert)
            .bind(user_id)
            .bind(position as i64)
            .bind(skill.name.as_deref())
            .bind(skill.level)
            .execute(&mut *conn)
            .await?;
    }

    Ok(())
}

async fn replace_education(conn: &mut SqliteConnection, user_id: i64, education: &[Education]) -> AppResult<()> {
    clear_collection(conn, "user_education", user_id).await?;

    for (position, edu) in education.iter().enumerate() {
        sqlx::query(
            r#"INSERT INTO user_education
                (user_id, position, school, degree, field, start_date, end_date, grade, location)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(user_id)
        .bind(position as i64)
        .bind(edu.school.as_deref())
        .bind(edu.degree.as_deref())
        .bind(edu.field.as_deref())
        .bind(edu.start_date.as_deref())
        .bind(edu.end_date.as_deref())
        .bind(edu.grade.as_deref())
        .bind(edu.location.as_deref())
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn replace_work_experience(
    conn: &mut SqliteConnection,
    user_id: i64,
    entries: Option<&[WorkExperience]>,
) -> AppResult<()> {
    clear_collection(conn, "user_work_experience", user_id).await?;

    for (position, exp) in entries.unwrap_or_default().iter().enumerate() {
        sqlx::query(
            r#"INSERT INTO user_work_experience
                (user_id, position, role, company, duration, description, company_website)
            VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(user_id)
        .bind(position as i64)
        .bind(exp.role.as_deref())
        .bind(exp.company.as_deref())
        .bind(exp.duration.as_deref())
        .bind(exp.description.as_deref())
        .bind(exp.company_website.as_deref())
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn replace_certifications(
    conn: &mut SqliteConnection,
    user_id: i64,
    entries: Option<&[Certification]>,
) -> AppResult<()> {
    clear_collection(conn, "user_certifications", user_id).await?;

    for (position, cert) in entries.unwrap_or_default().iter().enumerate() {
        sqlx::query(
            "INSERT INTO user_certifications (user_id, position, title, issuer, date, link) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(position as i64)
        .bind(cert.title.as_deref())
        .bind(cert.issuer.as_deref())
        .bind(cert.date.as_deref())
        .bind(cert.link.as_deref())
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// 사용자 행과 모든 소유 컬렉션을 읽어 집합을 구성합니다.
///
/// 관계형 저장소에는 "컬렉션 없음"을 따로 표현하지 않으므로, 값 객체 컬렉션은
/// 행이 없으면 빈 목록으로 읽힙니다.
async fn load_user(conn: &mut SqliteConnection, id: i64) -> AppResult<Option<User>> {
    let Some(mut user) = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };

    user.projects = sqlx::query_as::<_, Project>(
        "SELECT id, title, description, link, user_id FROM projects WHERE user_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    user.technical_skills = Some(load_skills(conn, TECHNICAL_SKILLS_TABLE, id).await?);
    user.professional_skills = Some(load_skills(conn, PROFESSIONAL_SKILLS_TABLE, id).await?);

    user.education = sqlx::query_as::<_, Education>(
        r#"SELECT school, degree, field, start_date, end_date, grade, location
        FROM user_education WHERE user_id = ? ORDER BY position"#,
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    user.work_experience = Some(
        sqlx::query_as::<_, WorkExperience>(
            r#"SELECT role, company, duration, description, company_website
            FROM user_work_experience WHERE user_id = ? ORDER BY position"#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?,
    );

    user.certifications = Some(
        sqlx::query_as::<_, Certification>(
            "SELECT title, issuer, date, link FROM user_certifications WHERE user_id = ? ORDER BY position",
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?,
    );

    Ok(Some(user))
}

async fn load_skills(conn: &mut SqliteConnection, table: &str, user_id: i64) -> AppResult<Vec<Skill>> {
    let skills = sqlx::query_as::<_, Skill>(&format!(
        "SELECT name, level FROM {} WHERE user_id = ? ORDER BY position",
        table
    ))
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(skills)
}
