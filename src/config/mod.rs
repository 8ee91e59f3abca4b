//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, CORS, 요청 크기, 실행 환경 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8081"
//! export WORKERS="4"
//!
//! # 데이터베이스
//! export DATABASE_URL="sqlite://portfolio.db?mode=rwc"
//! export DATABASE_MAX_CONNECTIONS="5"
//!
//! # 프론트엔드 Origin
//! export CORS_ALLOWED_ORIGIN="http://localhost:3000"
//!
//! # 요청 본문 최대 크기 (바이트)
//! export JSON_PAYLOAD_LIMIT="20971520"
//! ```
//!
//! `.env.dev` / `.env.prod` 파일은 `PROFILE` 값에 따라 `main.rs`에서 로드됩니다.

pub mod data_config;

pub use data_config::*;
