use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::SystemConfig;
use crate::error::Result;

/// 日誌記錄器
///
/// 每行都輸出到 stderr；啟用 `log_to_file` 時同時附加到
/// `<log_dir>/microwave_<時間戳>.log`
#[derive(Debug)]
pub struct Logger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    path: Option<PathBuf>,
}

impl Logger {
    pub fn new(config: &SystemConfig) -> Result<Self> {
        let level = LevelFilter::from(config.log_level);
        if !config.log_to_file {
            return Ok(Logger {
                level,
                file: None,
                path: None,
            });
        }

        // 確保日誌目錄存在
        fs::create_dir_all(&config.log_dir)?;

        // 使用當前時間作為日誌檔名
        let filename = format!("microwave_{}.log", Local::now().format("%Y%m%d_%H%M%S"));
        let path = config.log_dir.join(filename);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Logger {
            level,
            file: Some(Mutex::new(file)),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// 安裝為 `log` 巨集的後端，每個行程只有第一次呼叫會成功
    pub fn init(self) -> Result<()> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    /// 其他執行緒持鎖時 panic 不影響後續寫入
    fn log_file(&self) -> Option<MutexGuard<'_, File>> {
        self.file
            .as_ref()
            .map(|file| file.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn format_record(record: &Record) -> String {
        format!(
            "[{} {:<5}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = Self::format_record(record);
        eprintln!("{}", line);

        if let Some(mut file) = self.log_file() {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("無法寫入日誌: {}", e);
            }
        }
    }

    fn flush(&self) {
        if let Some(mut file) = self.log_file() {
            if let Err(e) = file.flush() {
                eprintln!("無法刷新日誌: {}", e);
            }
        }
    }
}
