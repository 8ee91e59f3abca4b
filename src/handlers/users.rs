//! # User Profile HTTP Handlers
//!
//! 사용자 프로필 생성/조회 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `POST` | `/api/users` | 프로필 제출 → 사용자 생성 | 200 + 사용자 JSON | 500 (빈 본문) |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 + 사용자 JSON | 404 (빈 본문) |
//!
//! 실패 응답에는 본문이 없습니다. 프론트엔드는 상태 코드만 확인합니다.
//! JSON 형식 자체가 잘못된 요청은 [`json_config`]의 에러 핸들러가 400으로 응답합니다.
//!
//! ## 요청 예제
//!
//! ```bash
//! curl -X POST http://localhost:8081/api/users \
//!   -H "Content-Type: application/json" \
//!   -d '{"name":"Ada","email":"ada@x.com","projects":[{"title":"Engine"}]}'
//!
//! curl http://localhost:8081/api/users/1
//! ```

use actix_web::{error::JsonPayloadError, get, post, web, HttpRequest, HttpResponse};
use log::{error, warn};
use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::services::users::UserService;

/// 사용자 생성 핸들러
///
/// 제출된 프로필을 사용자 집합으로 저장하고, ID가 부여된 집합을 그대로 반환합니다.
/// 어떤 오류든 로그만 남기고 `500 Internal Server Error`(빈 본문)로 응답합니다.
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> HttpResponse {
    match service.create_user(payload.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => {
            error!("사용자 생성 실패: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// 사용자 조회 핸들러
///
/// 존재하지 않는 ID는 `404 Not Found`(빈 본문)로 응답합니다.
/// 숫자가 아닌 ID는 경로 추출 단계에서 404가 됩니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> HttpResponse {
    match service.get_user_by_id(user_id.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().finish(),
        Err(e) => {
            error!("사용자 조회 실패: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// JSON 본문 추출 설정
///
/// 프로필 사진/이력서가 base64로 실려 오므로 본문 크기 제한을 설정값으로 받습니다.
/// 파싱 실패는 `AppError::ValidationError`(400)로 변환됩니다.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("잘못된 JSON 요청: {} {} - {}", req.method(), req.path(), err);
    AppError::ValidationError(err.to_string()).into()
}
