pub mod core;
pub mod game;
pub mod session;
pub mod ui;
