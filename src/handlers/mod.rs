//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크 기반이며, 서비스는 `web::Data`로 주입받습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (포트폴리오 프론트엔드)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 제출 변환, 조회                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - SQLite 영속화                  ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - User 집합                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 프로필 엔드포인트
//!   - 사용자 생성 (`POST /api/users`)
//!   - 사용자 조회 (`GET /api/users/{id}`)

pub mod users;
