//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 엔티티와 전송 타입을 분리해서, 저장소 관련 필드(ID, 소유자 역참조)가
//! 클라이언트 입력으로 들어오지 않도록 합니다.
//!
//! ```text
//! dto/
//! └── users/
//!     └── request/
//!         └── create_user.rs   # POST /api/users 본문
//! ```

pub mod users;

pub use users::*;
