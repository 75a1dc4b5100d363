// 鍵盤輸入模組

pub mod keymap;

pub use keymap::{key_name, parse_key, Keymap};
