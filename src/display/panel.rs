/*
================================================================================
微波爐模擬器 - 面板繪製模組
================================================================================
依唯讀的狀態快照繪製微波爐

版面 (320x200，緩衝區較大時置中)：
- 左側為爐門，右側為控制面板
- 關門顯示玻璃窗，開門顯示爐腔與打開的爐門
- 加熱時玻璃窗/爐腔亮起
- 底部為按鍵說明列

================================================================================
*/

use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::appliance::ApplianceState;

pub const LAYOUT_WIDTH: u32 = 320;
pub const LAYOUT_HEIGHT: u32 = 200;

pub const BACKGROUND: Rgb888 = Rgb888::new(0x20, 0x24, 0x2A);
pub const BODY: Rgb888 = Rgb888::new(0xC8, 0xC8, 0xC8);
pub const OUTLINE: Rgb888 = Rgb888::new(0x40, 0x40, 0x40);
pub const DOOR: Rgb888 = Rgb888::new(0x50, 0x50, 0x58);
pub const GLASS_OFF: Rgb888 = Rgb888::new(0x10, 0x18, 0x20);
pub const GLASS_LIT: Rgb888 = Rgb888::new(0xE8, 0xC0, 0x40);
pub const CAVITY_OFF: Rgb888 = Rgb888::new(0x38, 0x38, 0x38);
pub const CAVITY_LIT: Rgb888 = Rgb888::new(0xF0, 0xD0, 0x60);
pub const CONTROL: Rgb888 = Rgb888::new(0x30, 0x30, 0x30);
pub const LAMP_OFF: Rgb888 = Rgb888::new(0x50, 0x10, 0x10);
pub const LAMP_ON: Rgb888 = Rgb888::new(0xFF, 0x30, 0x20);
pub const LABEL: Rgb888 = Rgb888::new(0xF0, 0xF0, 0xF0);
pub const VALUE_ACTIVE: Rgb888 = Rgb888::new(0xFF, 0xB0, 0x30);
pub const VALUE_IDLE: Rgb888 = Rgb888::new(0x70, 0xD0, 0x70);

// 以下座標皆相對於版面原點
const BODY_AREA: (i32, i32, u32, u32) = (20, 20, 280, 150);
const DOOR_AREA: (i32, i32, u32, u32) = (30, 30, 180, 130);
const GLASS_AREA: (i32, i32, u32, u32) = (45, 45, 150, 100);
const HANDLE_AREA: (i32, i32, u32, u32) = (200, 70, 6, 50);
const SWUNG_DOOR_AREA: (i32, i32, u32, u32) = (2, 26, 18, 138);
const CONTROL_AREA: (i32, i32, u32, u32) = (220, 30, 70, 130);
const LAMP_TOP_LEFT: (i32, i32) = (236, 115);
const LAMP_DIAMETER: u32 = 16;
const TEXT_X: i32 = 226;
const FOOTER: (i32, i32) = (20, 180);

/// 控制面板上的爐門標籤
pub fn door_label(state: &ApplianceState) -> &'static str {
    if state.door_open() {
        "OPEN"
    } else {
        "CLOSED"
    }
}

/// 控制面板上的狀態標籤
pub fn status_label(state: &ApplianceState) -> &'static str {
    if state.is_cooking() {
        "COOKING"
    } else {
        "IDLE"
    }
}

#[derive(Debug, Clone)]
pub struct Panel {
    help_line: String,
}

impl Panel {
    pub fn new(help_line: impl Into<String>) -> Self {
        Self {
            help_line: help_line.into(),
        }
    }

    pub fn help_line(&self) -> &str {
        &self.help_line
    }

    /// 指定大小畫布中版面的左上角
    pub fn origin(size: Size) -> Point {
        let x = (size.width.saturating_sub(LAYOUT_WIDTH) / 2) as i32;
        let y = (size.height.saturating_sub(LAYOUT_HEIGHT) / 2) as i32;
        Point::new(x, y)
    }

    pub fn draw<D>(&self, state: &ApplianceState, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let origin = Self::origin(target.bounding_box().size);
        target.clear(BACKGROUND)?;

        let body_style = PrimitiveStyleBuilder::new()
            .fill_color(BODY)
            .stroke_color(OUTLINE)
            .stroke_width(2)
            .build();
        area(origin, BODY_AREA).into_styled(body_style).draw(target)?;

        if state.door_open() {
            self.draw_open_door(origin, state, target)?;
        } else {
            self.draw_closed_door(origin, state, target)?;
        }

        self.draw_controls(origin, state, target)?;

        Text::with_baseline(
            &self.help_line,
            origin + Point::new(FOOTER.0, FOOTER.1),
            MonoTextStyle::new(&FONT_6X10, LABEL),
            Baseline::Top,
        )
        .draw(target)?;

        Ok(())
    }

    fn draw_closed_door<D>(
        &self,
        origin: Point,
        state: &ApplianceState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let glass = if state.is_cooking() { GLASS_LIT } else { GLASS_OFF };

        area(origin, DOOR_AREA)
            .into_styled(PrimitiveStyle::with_fill(DOOR))
            .draw(target)?;
        area(origin, GLASS_AREA)
            .into_styled(PrimitiveStyle::with_fill(glass))
            .draw(target)?;
        area(origin, HANDLE_AREA)
            .into_styled(PrimitiveStyle::with_fill(OUTLINE))
            .draw(target)?;
        Ok(())
    }

    fn draw_open_door<D>(
        &self,
        origin: Point,
        state: &ApplianceState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let cavity = if state.is_cooking() { CAVITY_LIT } else { CAVITY_OFF };

        area(origin, DOOR_AREA)
            .into_styled(PrimitiveStyle::with_fill(cavity))
            .draw(target)?;
        area(origin, SWUNG_DOOR_AREA)
            .into_styled(PrimitiveStyle::with_fill(DOOR))
            .draw(target)?;
        Ok(())
    }

    fn draw_controls<D>(
        &self,
        origin: Point,
        state: &ApplianceState,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        area(origin, CONTROL_AREA)
            .into_styled(PrimitiveStyle::with_fill(CONTROL))
            .draw(target)?;

        let label_style = MonoTextStyle::new(&FONT_6X10, LABEL);
        let door_style = MonoTextStyle::new(
            &FONT_6X10,
            if state.door_open() { VALUE_ACTIVE } else { VALUE_IDLE },
        );
        let status_style = MonoTextStyle::new(
            &FONT_6X10,
            if state.is_cooking() { VALUE_ACTIVE } else { VALUE_IDLE },
        );

        let lines = [
            ("DOOR", 38, label_style),
            (door_label(state), 50, door_style),
            ("STATUS", 80, label_style),
            (status_label(state), 92, status_style),
        ];
        for (text, y, style) in lines {
            Text::with_baseline(text, origin + Point::new(TEXT_X, y), style, Baseline::Top)
                .draw(target)?;
        }

        let lamp = if state.is_cooking() { LAMP_ON } else { LAMP_OFF };
        Circle::new(
            origin + Point::new(LAMP_TOP_LEFT.0, LAMP_TOP_LEFT.1),
            LAMP_DIAMETER,
        )
        .into_styled(PrimitiveStyle::with_fill(lamp))
        .draw(target)?;

        Ok(())
    }
}

fn area(origin: Point, (x, y, width, height): (i32, i32, u32, u32)) -> Rectangle {
    Rectangle::new(origin + Point::new(x, y), Size::new(width, height))
}
