// crates/domain/src/numeric.rs
pub mod radix;
pub mod sqrt;
