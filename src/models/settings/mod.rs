// Settings module
// User configuration for the job administration screens

use crate::models::select_option::PLACEHOLDER_TEXT;
use serde::{Deserialize, Serialize};

/// Whether the assignment screen picks one contact or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssignMode {
    Single,
    #[default]
    Multiple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Text of the blank option at the top of cascaded child lists
    pub placeholder_text: String,
    /// Populate child lists straight away when the parent already has a value
    pub update_on_create: bool,
    pub assign_mode: AssignMode,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            placeholder_text: PLACEHOLDER_TEXT.to_string(),
            update_on_create: false,
            assign_mode: AssignMode::Multiple,
            window_width: 960.0,
            window_height: 640.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.window_width < 320.0 || self.window_height < 240.0 {
            return Err("Window must be at least 320x240".to_string());
        }
        Ok(())
    }
}
