use serde::{Deserialize, Serialize};

use crate::appliance::Command;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub keyboard_mapping: KeyboardMapping,
}

/// 配置檔中的按鍵名稱，每個操作一個
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardMapping {
    pub open_door: String,
    pub close_door: String,
    pub start_cooking: String,
    pub stop_cooking: String,
}

impl KeyboardMapping {
    pub fn key_name(&self, command: Command) -> &str {
        match command {
            Command::OpenDoor => &self.open_door,
            Command::CloseDoor => &self.close_door,
            Command::StartCooking => &self.start_cooking,
            Command::StopCooking => &self.stop_cooking,
        }
    }
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        Self {
            open_door: "O".to_string(),
            close_door: "C".to_string(),
            start_cooking: "S".to_string(),
            stop_cooking: "X".to_string(),
        }
    }
}
