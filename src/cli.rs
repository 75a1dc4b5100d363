use std::path::PathBuf;

use crate::error::{Error, Result};

pub const USAGE: &str = "用法: microwave_simulator [配置檔.json] | --dump-config";

/// 命令行要求的動作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// 印出預設配置後結束
    DumpConfig,
    /// 開啟視窗，未指定配置檔時使用預設配置
    Run { config_path: Option<PathBuf> },
}

/// 解析命令行參數 (不含程式名稱)
pub fn parse_args<I>(args: I) -> Result<CliAction>
where
    I: IntoIterator<Item = String>,
{
    let mut config_path = None;
    for arg in args {
        if arg == "--dump-config" {
            return Ok(CliAction::DumpConfig);
        }
        if arg.starts_with('-') {
            return Err(Error::Usage(format!("未知的參數 '{}'", arg)));
        }
        if config_path.is_some() {
            return Err(Error::Usage(format!("多餘的參數 '{}'", arg)));
        }
        config_path = Some(PathBuf::from(arg));
    }
    Ok(CliAction::Run { config_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliAction> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_no_arguments_runs_with_defaults() {
        assert_eq!(parse(&[]).unwrap(), CliAction::Run { config_path: None });
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            parse(&["oven.json"]).unwrap(),
            CliAction::Run {
                config_path: Some(PathBuf::from("oven.json"))
            }
        );
    }

    #[test]
    fn test_dump_config() {
        assert_eq!(parse(&["--dump-config"]).unwrap(), CliAction::DumpConfig);
        assert_eq!(
            parse(&["oven.json", "--dump-config"]).unwrap(),
            CliAction::DumpConfig
        );
    }

    #[test]
    fn test_mistyped_flag_is_rejected() {
        match parse(&["--dump-confg"]) {
            Err(Error::Usage(message)) => assert!(message.contains("--dump-confg")),
            other => panic!("expected usage error, got {:?}", other),
        }
        assert!(matches!(parse(&["-h"]), Err(Error::Usage(_))));
    }

    #[test]
    fn test_second_path_is_rejected() {
        assert!(matches!(
            parse(&["a.json", "b.json"]),
            Err(Error::Usage(_))
        ));
    }
}
