use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ui::util::centered_x;

pub struct Spinner {
    style: Style,
    label: Option<String>,
}

impl Spinner {
    pub fn new() -> Self {
        Self {
            style: Style::default(),
            label: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let spinner_chars = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let symbol = spinner_chars[(now / 100) as usize % spinner_chars.len()];

        let text = match self.label {
            Some(label) => format!("{symbol} {label}"),
            None => symbol.to_string(),
        };

        let x = centered_x(area, &text);
        let y = area.y + area.height / 2;
        buf.set_stringn(x, y, &text, area.width as usize, self.style);
    }
}
