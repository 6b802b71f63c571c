//! # Services Module
//!
//! 핸들러가 위임하는 요청 변환 로직을 담습니다.
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 주입되는 불변 객체입니다.

pub mod users;
