pub mod handler;

use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

pub fn pulse_symbol(active: bool) -> &'static str {
    if !active {
        return "■";
    }

    const FRAME_STEP_MS: u128 = 250;
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    match (now / FRAME_STEP_MS) % 4 {
        0 => "·",
        1 | 3 => "•",
        _ => "●",
    }
}

pub fn centered_x(area: Rect, text: &str) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    area.x + area.width.saturating_sub(width) / 2
}
