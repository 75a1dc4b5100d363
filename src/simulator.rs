use log::{debug, info};
use minifb::Key;
use std::convert::Infallible;

use crate::appliance::{ApplianceState, Command};
use crate::config::Config;
use crate::display::panel::{door_label, status_label};
use crate::display::{Framebuffer, Panel};
use crate::error::Result;
use crate::input::{key_name, Keymap};

/// 視窗關閉時報告的計數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub commands: u64,
    /// 因爐門打開而被忽略的 start_cooking 次數
    pub refused_starts: u64,
}

/// 微波爐模擬器核心
///
/// 持有電器狀態與視窗迴圈所需的一切，
/// 迴圈先傳入按下的按鍵，再取得一幀畫面
pub struct Simulator {
    appliance: ApplianceState,
    keymap: Keymap,
    panel: Panel,
    frame: Framebuffer,
    title: String,
    stats: SessionStats,
}

impl Simulator {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let keymap = Keymap::from_mapping(&config.input.keyboard_mapping)?;
        let panel = Panel::new(keymap.help_line());
        info!("按鍵綁定: {}", panel.help_line());

        Ok(Self {
            appliance: ApplianceState::new(),
            keymap,
            panel,
            frame: Framebuffer::new(config.video.width, config.video.height),
            title: config.video.title.clone(),
            stats: SessionStats::default(),
        })
    }

    pub fn appliance(&self) -> &ApplianceState {
        &self.appliance
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// 依序套用每個按鍵綁定的操作，未綁定的按鍵直接忽略
    pub fn handle_keys(&mut self, keys: &[Key]) {
        for &key in keys {
            match self.keymap.resolve(key) {
                Some(command) => self.apply(command),
                None => debug!("按鍵 {} ({:?}) 未綁定", key_name(key), key),
            }
        }
    }

    pub fn apply(&mut self, command: Command) {
        let before = self.appliance;
        self.appliance.apply(command);
        self.stats.commands += 1;

        if self.appliance != before {
            info!(
                "{}: {} -> {}",
                command,
                before.phase(),
                self.appliance.phase()
            );
        } else if command == Command::StartCooking && before.door_open() {
            self.stats.refused_starts += 1;
            debug!("爐門打開中，忽略開始加熱");
        } else {
            debug!("{}: 狀態未變 ({})", command, before.phase());
        }
    }

    /// 重新繪製面板並回傳給視窗的像素
    pub fn render(&mut self) -> &[u32] {
        self.panel
            .draw(&self.appliance, &mut self.frame)
            .unwrap_or_else(|never: Infallible| match never {});
        self.stats.frames += 1;
        self.frame.buffer()
    }

    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn window_title(&self) -> String {
        format!(
            "{} - {} / door {}",
            self.title,
            status_label(&self.appliance),
            door_label(&self.appliance)
        )
    }

    pub fn status_report(&self) -> String {
        format!(
            "================================================================================\n\
            微波爐執行報告\n\
            ================================================================================\n\
            \n\
            最終狀態: {}\n\
            繪製幀數: {}\n\
            處理操作數: {}\n\
            被拒絕的加熱 (爐門打開): {}\n\
            \n\
            ================================================================================\n",
            self.appliance.phase(),
            self.stats.frames,
            self.stats.commands,
            self.stats.refused_starts,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appliance::Phase;

    fn simulator() -> Simulator {
        Simulator::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_new_simulator_is_idle() {
        let sim = simulator();
        assert_eq!(sim.appliance().phase(), Phase::IdleClosed);
        assert_eq!(sim.stats(), SessionStats::default());
        assert_eq!(sim.window_title(), "Microwave - IDLE / door CLOSED");
    }

    #[test]
    fn test_keys_drive_the_appliance() {
        let mut sim = simulator();
        sim.handle_keys(&[Key::S]);
        assert!(sim.appliance().is_cooking());
        sim.handle_keys(&[Key::O]);
        assert_eq!(sim.appliance().phase(), Phase::CookingOpen);
        sim.handle_keys(&[Key::X, Key::C]);
        assert_eq!(sim.appliance().phase(), Phase::IdleClosed);
        assert_eq!(sim.stats().commands, 4);
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut sim = simulator();
        sim.handle_keys(&[Key::A, Key::Space, Key::Escape]);
        assert_eq!(sim.appliance().phase(), Phase::IdleClosed);
        assert_eq!(sim.stats().commands, 0);
    }

    #[test]
    fn test_refused_start_is_counted() {
        let mut sim = simulator();
        sim.apply(Command::OpenDoor);
        sim.apply(Command::StartCooking);
        sim.apply(Command::StartCooking);
        assert!(!sim.appliance().is_cooking());
        assert_eq!(sim.stats().refused_starts, 2);

        sim.apply(Command::CloseDoor);
        sim.apply(Command::StartCooking);
        assert!(sim.appliance().is_cooking());
        assert_eq!(sim.stats().refused_starts, 2);
        assert_eq!(sim.stats().commands, 5);
    }

    #[test]
    fn test_render_counts_frames() {
        let mut sim = simulator();
        let len = sim.render().len();
        assert_eq!(len, 320 * 200);
        sim.render();
        assert_eq!(sim.stats().frames, 2);
    }

    #[test]
    fn test_status_report() {
        let mut sim = simulator();
        sim.handle_keys(&[Key::O, Key::S]);
        sim.render();
        let report = sim.status_report();
        assert!(report.contains("最終狀態: idle, door open"));
        assert!(report.contains("繪製幀數: 1"));
        assert!(report.contains("處理操作數: 2"));
        assert!(report.contains("被拒絕的加熱 (爐門打開): 1"));
    }

    #[test]
    fn test_title_tracks_state() {
        let mut sim = simulator();
        sim.apply(Command::StartCooking);
        sim.apply(Command::OpenDoor);
        assert_eq!(sim.window_title(), "Microwave - COOKING / door OPEN");
    }
}
