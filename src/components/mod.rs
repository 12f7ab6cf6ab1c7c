pub mod board;
pub mod toolbar;
