// crates/domain/src/analytics.rs
pub mod frequency;
pub mod sort;
pub mod statistics;
