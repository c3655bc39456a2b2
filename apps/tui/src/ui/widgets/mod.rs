pub mod help;
pub mod tables;
