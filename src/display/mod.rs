pub mod framebuffer;
pub mod panel;

pub use framebuffer::Framebuffer;
pub use panel::Panel;

use minifb::Scale;

/// 將配置中的整數縮放比例轉為 minifb 的縮放模式
/// 驗證不通過的值一律退回 FitScreen
pub fn window_scale(scale: u32) -> Scale {
    match scale {
        1 => Scale::X1,
        2 => Scale::X2,
        4 => Scale::X4,
        8 => Scale::X8,
        _ => Scale::FitScreen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_scale() {
        assert!(matches!(window_scale(1), Scale::X1));
        assert!(matches!(window_scale(4), Scale::X4));
        assert!(matches!(window_scale(3), Scale::FitScreen));
    }
}
