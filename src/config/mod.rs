pub mod input;
pub mod system;
pub mod video;

pub use input::{InputConfig, KeyboardMapping};
pub use system::{LogLevel, SystemConfig};
pub use video::VideoConfig;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// 視窗邊長上限 (像素)，畫面緩衝區最多 4096x4096
pub const MAX_WINDOW_SIDE: usize = 4096;
pub const MAX_TARGET_FPS: usize = 1000;

/// 全局配置結構
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub system: SystemConfig,
    pub video: VideoConfig,
    pub input: InputConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// 讀取 JSON 配置檔，缺少的區段與欄位使用預設值
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 按鍵名稱留待建立按鍵映射時檢查
    pub fn validate(&self) -> Result<()> {
        let video = &self.video;
        if video.width == 0 || video.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "視窗大小 {}x{} 為空",
                video.width, video.height
            )));
        }
        if video.width > MAX_WINDOW_SIDE || video.height > MAX_WINDOW_SIDE {
            return Err(Error::InvalidConfig(format!(
                "視窗大小 {}x{} 超過上限 {}x{}",
                video.width, video.height, MAX_WINDOW_SIDE, MAX_WINDOW_SIDE
            )));
        }
        if !matches!(video.scale, 1 | 2 | 4 | 8) {
            return Err(Error::InvalidConfig(format!(
                "縮放比例 {} 不是 1、2、4、8 之一",
                video.scale
            )));
        }
        if video.target_fps == 0 || video.target_fps > MAX_TARGET_FPS {
            return Err(Error::InvalidConfig(format!(
                "target_fps {} 必須介於 1 與 {} 之間",
                video.target_fps, MAX_TARGET_FPS
            )));
        }
        Ok(())
    }
}

/// 配置構建器
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn system_config(mut self, config: SystemConfig) -> Self {
        self.config.system = config;
        self
    }

    pub fn video_config(mut self, config: VideoConfig) -> Self {
        self.config.video = config;
        self
    }

    pub fn input_config(mut self, config: InputConfig) -> Self {
        self.config.input = config;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
