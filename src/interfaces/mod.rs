pub mod container;
pub mod injection;
