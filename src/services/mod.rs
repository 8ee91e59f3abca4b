//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 생성자로 주입받고, 핸들러에는 `web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(user_repo));
//! ```

pub mod users;
