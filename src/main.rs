// 微波爐模擬器 - 主程式

use anyhow::{Context, Result};
use log::{error, info};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

use microwave_simulator::cli::{parse_args, CliAction, USAGE};
use microwave_simulator::display::window_scale;
use microwave_simulator::{Config, Logger, Simulator};

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // 處理命令行參數
    let action = match parse_args(std::env::args().skip(1)) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", USAGE);
            std::process::exit(2);
        }
    };

    let config = match action {
        CliAction::DumpConfig => {
            println!("{}", Config::default().to_json()?);
            return Ok(());
        }
        CliAction::Run {
            config_path: Some(path),
        } => Config::load(&path)
            .with_context(|| format!("無法載入配置檔 '{}'", path.display()))?,
        CliAction::Run { config_path: None } => Config::default(),
    };

    let logger = Logger::new(&config.system).context("無法開啟日誌檔")?;
    if let Some(path) = logger.path() {
        println!("📝 日誌檔: {}", path.display());
    }
    logger.init()?;

    let mut simulator = Simulator::new(&config)?;
    let video = &config.video;

    info!("🪟 正在創建 {}x{} 顯示窗口", video.width, video.height);
    let mut window = Window::new(
        &simulator.window_title(),
        video.width,
        video.height,
        WindowOptions {
            scale: window_scale(video.scale),
            ..WindowOptions::default()
        },
    )
    .map_err(microwave_simulator::Error::from)
    .context("窗口創建失敗")?;
    window.limit_update_rate(Some(video.frame_interval()));

    let mut title = simulator.window_title();
    while window.is_open() && !window.is_key_down(Key::Escape) {
        let pressed = window.get_keys_pressed(KeyRepeat::No);
        simulator.handle_keys(&pressed);

        let next_title = simulator.window_title();
        if next_title != title {
            window.set_title(&next_title);
            title = next_title;
        }

        let frame = simulator.render();
        window
            .update_with_buffer(frame, video.width, video.height)
            .map_err(microwave_simulator::Error::from)?;
    }

    info!("窗口已關閉\n{}", simulator.status_report());
    log::logger().flush();
    Ok(())
}
