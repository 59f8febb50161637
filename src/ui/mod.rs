pub mod board;
pub mod components;
