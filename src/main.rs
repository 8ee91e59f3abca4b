//! 포트폴리오 프로필 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! SQLite 연결과 마이그레이션을 마친 뒤 리포지토리와 서비스를 조립해 핸들러에 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use portfolio_backend::config::{CorsConfig, PayloadConfig, ServerConfig};
use portfolio_backend::db::Database;
use portfolio_backend::handlers::users::json_config;
use portfolio_backend::repositories::users::SqlUserRepository;
use portfolio_backend::routes::configure_all_routes;
use portfolio_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화 (RUST_LOG 가 .env 에 있을 수 있으므로 파일 먼저)
    let env_file = load_env_file();
    init_logging();

    match &env_file {
        Ok(file) => info!("{} 파일 로드 됨", file),
        Err(e) => error!("환경 파일 로드 실패: {}", e),
    }

    info!("🚀 포트폴리오 백엔드 시작중... (v{})", env!("CARGO_PKG_VERSION"));

    let database = initialize_database().await?;

    // 리포지토리 → 서비스 조립
    let user_repo = Arc::new(SqlUserRepository::new(database.pool().clone()));
    let user_service = web::Data::new(UserService::new(user_repo));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어와 JSON 본문 크기 제한을 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let json_limit = PayloadConfig::json_limit();
    let allowed_origin = CorsConfig::allowed_origin();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/users", bind_address);
    info!("🔓 CORS 허용 Origin: {}", allowed_origin);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors(&allowed_origin))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(user_service.clone())
            .app_data(json_config(json_limit))

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로드한 파일 이름을 반환합니다. 로거 초기화 전에 호출되므로 결과 로그는 호출자가 남깁니다.
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=portfolio_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// SQLite 연결과 스키마 마이그레이션을 수행합니다
///
/// 실패하면 서버를 띄우지 않고 종료합니다.
async fn initialize_database() -> std::io::Result<Database> {
    info!("📡 데이터베이스 연결 중...");

    Database::new().await.map_err(|e| {
        error!("❌ 데이터베이스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })
}

/// CORS 설정을 구성합니다
///
/// 프론트엔드 단일 Origin만 허용합니다.
fn configure_cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
