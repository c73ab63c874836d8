pub mod demo;
pub mod sort;
