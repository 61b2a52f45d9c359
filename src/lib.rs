//! 핵심 계산 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 모델을 쓰게 한다.
//!
//! 흐름: 가열량 환산(`heating`) → 보일러/히트펌프/냉각 비용(`savings`) → 표와 내보내기(`report`).

pub mod app;
pub mod config;
pub mod errors;
pub mod fuel_db;
pub mod heating;
pub mod i18n;
pub mod report;
pub mod savings;
pub mod steam;
pub mod ui_cli;
pub mod units;
