#![allow(non_snake_case)]

pub mod app;
pub mod config;
#[cfg(feature = "desktop")]
pub mod launcher;

pub use app::{AnimationScreen, LaneKind};
pub use config::ScreenConfig;
#[cfg(feature = "desktop")]
pub use launcher::AppLauncher;
