//! Robot components, one responsibility each
//!
//! Authorization and settings change for unrelated reasons, so they live in
//! separate types that share no state.

use log::info;

/// Message reported when authorization starts
pub const AUTHORIZATION_MESSAGE: &str = "Authorization in progress...";

/// Message reported when settings are applied
pub const SETTINGS_MESSAGE: &str = "Settings updated successfully.";

/// Handles robot authorization only
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotAuth;

impl RobotAuth {
    pub fn new() -> Self {
        Self
    }

    pub fn authorize(&self) -> &'static str {
        info!("{AUTHORIZATION_MESSAGE}");
        AUTHORIZATION_MESSAGE
    }
}

/// Handles robot settings only
#[derive(Debug, Default, Clone, Copy)]
pub struct RobotSettings;

impl RobotSettings {
    pub fn new() -> Self {
        Self
    }

    pub fn update_settings(&self) -> &'static str {
        info!("{SETTINGS_MESSAGE}");
        SETTINGS_MESSAGE
    }
}
