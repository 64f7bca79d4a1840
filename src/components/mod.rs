//! Shared components for the WaveOn shell.

mod app;
mod app_view;
mod audio;
mod icons;
mod navigation;
mod player;
mod sidebar;
mod study_overlay;
mod toast;
mod toolbar;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use audio::*;
pub use icons::*;
pub use navigation::*;
pub use player::*;
pub use sidebar::*;
pub use study_overlay::*;
pub use toast::*;
pub use toolbar::*;
