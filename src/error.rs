use std::io;
use thiserror::Error;

use crate::appliance::Command;

/// 微波爐模擬器的錯誤類型
#[derive(Error, Debug)]
pub enum Error {
    /// IO 錯誤
    #[error("IO 錯誤: {0}")]
    IO(#[from] io::Error),

    /// 配置檔無法解析或寫入
    #[error("配置錯誤: {0}")]
    Config(#[from] serde_json::Error),

    /// 配置可解析但數值無法使用
    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    /// 按鍵表中沒有的按鍵名稱
    #[error("未知的按鍵名稱: {0}")]
    UnknownKey(String),

    #[error("按鍵 {key} 同時綁定了 {first} 與 {second}")]
    DuplicateBinding {
        key: String,
        first: Command,
        second: Command,
    },

    /// Escape 固定用於關閉視窗
    #[error("按鍵 {0} 已保留給視窗")]
    ReservedKey(String),

    #[error("視窗錯誤: {0}")]
    Window(String),

    #[error("日誌錯誤: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// 命令行參數錯誤
    #[error("{0}")]
    Usage(String),
}

impl From<minifb::Error> for Error {
    fn from(err: minifb::Error) -> Self {
        Error::Window(err.to_string())
    }
}

/// 模擬器結果類型
pub type Result<T> = std::result::Result<T, Error>;
