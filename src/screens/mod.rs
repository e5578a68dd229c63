//! Screens
//!
//! One component per navigation destination.

mod home;
mod profile;
mod settings;

pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use settings::SettingScreen;
