/*
================================================================================
微波爐模擬器 - 電器狀態模組
================================================================================
爐門與加熱兩個旗標，以及驅動它們的四個操作

說明：
- 加熱中打開爐門不會改變加熱旗標
- 爐門打開時 start_cooking 直接忽略

================================================================================
*/

use std::fmt;

/// 外部迴圈可要求的四個操作之一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    OpenDoor,
    CloseDoor,
    StartCooking,
    StopCooking,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::OpenDoor,
        Command::CloseDoor,
        Command::StartCooking,
        Command::StopCooking,
    ];

    /// 按鍵說明列使用的短標籤
    pub fn label(&self) -> &'static str {
        match self {
            Command::OpenDoor => "OPEN",
            Command::CloseDoor => "CLOSE",
            Command::StartCooking => "START",
            Command::StopCooking => "STOP",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::OpenDoor => "open door",
            Command::CloseDoor => "close door",
            Command::StartCooking => "start cooking",
            Command::StopCooking => "stop cooking",
        };
        f.write_str(name)
    }
}

/// 兩個旗標的組合檢視
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    IdleClosed,
    IdleOpen,
    CookingClosed,
    /// 加熱中打開爐門才會到達
    CookingOpen,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::IdleClosed => "idle, door closed",
            Phase::IdleOpen => "idle, door open",
            Phase::CookingClosed => "cooking, door closed",
            Phase::CookingOpen => "cooking, door open",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplianceState {
    door_open: bool,
    is_cooking: bool,
}

impl ApplianceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn door_open(&self) -> bool {
        self.door_open
    }

    pub fn is_cooking(&self) -> bool {
        self.is_cooking
    }

    pub fn open_door(&mut self) {
        self.door_open = true;
    }

    pub fn close_door(&mut self) {
        self.door_open = false;
    }

    /// 爐門打開時不做任何事
    pub fn start_cooking(&mut self) {
        if !self.door_open {
            self.is_cooking = true;
        }
    }

    pub fn stop_cooking(&mut self) {
        self.is_cooking = false;
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::OpenDoor => self.open_door(),
            Command::CloseDoor => self.close_door(),
            Command::StartCooking => self.start_cooking(),
            Command::StopCooking => self.stop_cooking(),
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.is_cooking, self.door_open) {
            (false, false) => Phase::IdleClosed,
            (false, true) => Phase::IdleOpen,
            (true, false) => Phase::CookingClosed,
            (true, true) => Phase::CookingOpen,
        }
    }
}
