//! UI screens.

mod app;
mod kiosk_screen;

pub use app::App;
pub use kiosk_screen::{KioskScreen, KioskScreenState, ScreenCommand};
