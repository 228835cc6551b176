pub mod calculator;
pub mod plan_service;
pub mod summary_service;
