use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 視窗與繪製相關配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub title: String,
    /// 邏輯畫面大小 (像素)
    pub width: usize,
    pub height: usize,
    /// 視窗縮放比例：1、2、4 或 8
    pub scale: u32,
    pub target_fps: usize,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            title: String::from("Microwave"),
            width: 320,
            height: 200,
            scale: 2,
            target_fps: 60,
        }
    }
}

impl VideoConfig {
    /// 每幀的最短間隔，交給 `Window::limit_update_rate`
    /// target_fps 為 0 時視為 1，實際數值由 `Config::validate` 檢查
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps.max(1) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        let mut video = VideoConfig::default();
        assert_eq!(video.frame_interval(), Duration::from_micros(16_666));

        video.target_fps = 30;
        assert_eq!(video.frame_interval(), Duration::from_micros(33_333));

        video.target_fps = 0;
        assert_eq!(video.frame_interval(), Duration::from_secs(1));
    }
}
