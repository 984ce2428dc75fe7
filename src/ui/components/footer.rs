use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Paragraph, Widget},
};

use crate::util::colors::{self, Palette};

const KEY_HINTS: &str = "[1-6] sekcja  [Tab] dalej  [spacja] rotacja  [d] motyw  [r] odśwież  [q] wyjście";

pub struct Footer<'a> {
    note: &'a str,
    dark_mode: bool,
    palette: Palette,
}

impl<'a> Footer<'a> {
    pub fn new(note: &'a str, dark_mode: bool, palette: Palette) -> Self {
        Self {
            note,
            dark_mode,
            palette,
        }
    }

    pub fn theme_label(&self) -> &'static str {
        if self.dark_mode {
            "☀ Tryb jasny"
        } else {
            "☾ Tryb ciemny"
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.palette.grid))
            .style(Style::new().bg(self.palette.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let [note_area, hints_area, theme_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Length(16),
        ])
        .areas(inner);

        Paragraph::new(format!(" {}", self.note))
            .style(Style::new().fg(self.palette.muted))
            .render(note_area, buf);
        Paragraph::new(KEY_HINTS)
            .style(Style::new().fg(self.palette.muted))
            .alignment(Alignment::Center)
            .render(hints_area, buf);
        Paragraph::new(self.theme_label())
            .style(Style::new().fg(colors::PRIMARY))
            .alignment(Alignment::Right)
            .render(theme_area, buf);
    }
}
