//! 증기 물성 관련 모듈. 가열량 환산에 쓰는 포화 증기 엔탈피 표와 IF97 보조 계산을 담는다.

pub mod if97;
pub mod steam_tables;

pub use steam_tables::*;
