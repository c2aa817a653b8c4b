// crates/domain/src/text.rs
pub mod counter;
pub mod tokenizer;
