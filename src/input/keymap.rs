/*
================================================================================
微波爐模擬器 - 按鍵映射模組
================================================================================
靜態按鍵表，以及由配置建立的按鍵 -> 操作綁定

功能：
- 按鍵名稱不分大小寫 ("o", "Space", "Return")
- 每個操作一個按鍵，同一按鍵不可綁定兩次
- Escape 保留給關閉視窗

================================================================================
*/

use minifb::Key;

use crate::appliance::Command;
use crate::config::KeyboardMapping;
use crate::error::{Error, Result};

/// 名稱 -> 按鍵對照表，每個按鍵第一個名稱為顯示名稱
static KEY_TABLE: &[(&str, Key)] = &[
    ("A", Key::A),
    ("B", Key::B),
    ("C", Key::C),
    ("D", Key::D),
    ("E", Key::E),
    ("F", Key::F),
    ("G", Key::G),
    ("H", Key::H),
    ("I", Key::I),
    ("J", Key::J),
    ("K", Key::K),
    ("L", Key::L),
    ("M", Key::M),
    ("N", Key::N),
    ("O", Key::O),
    ("P", Key::P),
    ("Q", Key::Q),
    ("R", Key::R),
    ("S", Key::S),
    ("T", Key::T),
    ("U", Key::U),
    ("V", Key::V),
    ("W", Key::W),
    ("X", Key::X),
    ("Y", Key::Y),
    ("Z", Key::Z),
    ("0", Key::Key0),
    ("1", Key::Key1),
    ("2", Key::Key2),
    ("3", Key::Key3),
    ("4", Key::Key4),
    ("5", Key::Key5),
    ("6", Key::Key6),
    ("7", Key::Key7),
    ("8", Key::Key8),
    ("9", Key::Key9),
    ("Space", Key::Space),
    ("Enter", Key::Enter),
    ("Return", Key::Enter),
    ("Tab", Key::Tab),
    ("Backspace", Key::Backspace),
    ("Up", Key::Up),
    ("Down", Key::Down),
    ("Left", Key::Left),
    ("Right", Key::Right),
    ("Escape", Key::Escape),
];

pub fn parse_key(name: &str) -> Result<Key> {
    let name = name.trim();
    KEY_TABLE
        .iter()
        .find(|(entry, _)| entry.eq_ignore_ascii_case(name))
        .map(|&(_, key)| key)
        .ok_or_else(|| Error::UnknownKey(name.to_string()))
}

pub fn key_name(key: Key) -> &'static str {
    KEY_TABLE
        .iter()
        .find(|&&(_, entry)| entry == key)
        .map(|&(name, _)| name)
        .unwrap_or("?")
}

/// 已解析的綁定，順序同 `Command::ALL`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    bindings: [(Key, Command); 4],
}

impl Keymap {
    pub fn from_mapping(mapping: &KeyboardMapping) -> Result<Self> {
        let mut bindings = [(Key::Unknown, Command::OpenDoor); 4];
        for (slot, command) in Command::ALL.into_iter().enumerate() {
            let name = mapping.key_name(command);
            let key = parse_key(name)?;
            if key == Key::Escape {
                return Err(Error::ReservedKey(key_name(key).to_string()));
            }
            if let Some(&(_, first)) = bindings[..slot].iter().find(|(bound, _)| *bound == key) {
                return Err(Error::DuplicateBinding {
                    key: key_name(key).to_string(),
                    first,
                    second: command,
                });
            }
            bindings[slot] = (key, command);
        }
        Ok(Self { bindings })
    }

    pub fn resolve(&self, key: Key) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, command)| command)
    }

    pub fn key_for(&self, command: Command) -> Key {
        self.bindings
            .iter()
            .find(|(_, bound)| *bound == command)
            .map(|&(key, _)| key)
            .unwrap_or(Key::Unknown)
    }

    /// 例如 "O:OPEN C:CLOSE S:START X:STOP"
    pub fn help_line(&self) -> String {
        self.bindings
            .iter()
            .map(|&(key, command)| format!("{}:{}", key_name(key), command.label()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            bindings: [
                (Key::O, Command::OpenDoor),
                (Key::C, Command::CloseDoor),
                (Key::S, Command::StartCooking),
                (Key::X, Command::StopCooking),
            ],
        }
    }
}
