pub mod basic;
pub mod fluent;
