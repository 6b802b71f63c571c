//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 에러 타입을 제공합니다.

pub mod errors;

pub use errors::*;
