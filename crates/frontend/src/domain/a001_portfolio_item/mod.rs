pub mod hook;
pub mod ui;
