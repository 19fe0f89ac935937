//! 핵심 계산 로직(지반계수 조회, 설계 스펙트럼 작성)을 라이브러리로 분리하여
//! CLI 외의 호출자도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod error;
pub mod hazard;
pub mod site;
pub mod spectrum;
pub mod ui_cli;

pub use error::SpectrumError;
