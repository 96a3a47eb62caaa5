pub mod config;
pub mod fs_utils;
pub mod game;
pub mod installer;
