//! API 라우트 설정 모듈
//!
//! 사용자 프로필 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `POST /api/users` - 프로필 제출 (사용자 생성)
//! - `GET /api/users/{id}` - 사용자 조회
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 핸들러는 `web::Data<UserService>`를 요구하므로, 서비스는 `App`에
/// 미리 등록되어 있어야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8081/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Ada","email":"ada@x.com"}'
///
/// curl http://localhost:8081/api/users/1
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "portfolio_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "SQLite",
///     "dependency_injection": "Constructor Injection"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "SQLite",
            "dependency_injection": "Constructor Injection"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::db::Database;
    use crate::repositories::users::SqlUserRepository;
    use crate::services::users::UserService;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["features"]["database"], "SQLite");
    }

    #[actix_web::test]
    async fn test_user_routes_are_mounted() {
        let database = Database::in_memory().await.expect("in-memory database");
        let service = UserService::new(Arc::new(SqlUserRepository::new(database.pool().clone())));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({ "name": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/users/42").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
