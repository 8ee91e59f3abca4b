//! 포트폴리오 프로필 백엔드
//!
//! 포트폴리오 생성기 프론트엔드가 제출한 사용자 프로필을 저장하고,
//! 저장된 프로필을 ID로 돌려주는 REST 서비스입니다.
//!
//! # Features
//!
//! - **프로필 제출**: 스칼라 필드와 소유 컬렉션(프로젝트, 역량, 학력, 경력, 자격증)을 한 번에 저장
//! - **프로필 조회**: ID로 사용자 집합 전체 조회
//! - **SQLite**: `sqlx` 기반 관계형 저장, 시작 시 마이그레이션 적용
//! - **생성자 주입**: 리포지토리 → 서비스 → 핸들러 순으로 명시적 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 제출 변환, 조회
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     SQLite      │ ← 저장소
//! └─────────────────┘
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
