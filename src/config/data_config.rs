//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, CORS, 요청 크기 관련 설정을 환경 변수에서 읽어옵니다.

use std::env;

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8081)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8081".to_string())
            .parse()
            .unwrap_or(8081)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// HTTP 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(4)
    }
}

/// 관계형 저장소 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 데이터베이스 연결 URL
    ///
    /// # Environment Variables
    ///
    /// - `DATABASE_URL`: SQLite 연결 URL (기본값: "sqlite://portfolio.db?mode=rwc")
    pub fn url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://portfolio.db?mode=rwc".to_string())
    }

    /// 커넥션 풀 최대 크기 (`DATABASE_MAX_CONNECTIONS`, 기본값: 5)
    pub fn max_connections() -> u32 {
        env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n: &u32| *n > 0)
            .unwrap_or(5)
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    /// 교차 출처 요청을 허용할 단일 Origin
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGIN`: 프론트엔드 Origin (기본값: "http://localhost:3000")
    pub fn allowed_origin() -> String {
        env::var("CORS_ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

/// 요청 본문 크기 설정
pub struct PayloadConfig;

impl PayloadConfig {
    pub const DEFAULT_JSON_LIMIT: usize = 20 * 1024 * 1024;

    /// JSON 요청 본문 최대 크기 (바이트)
    ///
    /// `profilePhoto`, `resume` 필드가 base64 문자열을 담기 때문에
    /// actix 기본값(2MiB)보다 크게 잡습니다.
    ///
    /// # Environment Variables
    ///
    /// - `JSON_PAYLOAD_LIMIT`: 최대 바이트 수 (기본값: 20MiB)
    pub fn json_limit() -> usize {
        env::var("JSON_PAYLOAD_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Self::DEFAULT_JSON_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8081);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("PORT").is_err() && env::var("HOST").is_err() {
            assert_eq!(ServerConfig::bind_address(), "127.0.0.1:8081");
        }
    }

    #[test]
    fn test_database_and_cors_defaults() {
        if env::var("DATABASE_URL").is_err() {
            assert!(DatabaseConfig::url().starts_with("sqlite:"));
        }

        if env::var("CORS_ALLOWED_ORIGIN").is_err() {
            assert_eq!(CorsConfig::allowed_origin(), "http://localhost:3000");
        }
    }

    #[test]
    fn test_payload_limit_default() {
        if env::var("JSON_PAYLOAD_LIMIT").is_err() {
            assert_eq!(PayloadConfig::json_limit(), PayloadConfig::DEFAULT_JSON_LIMIT);
        }
    }
}
