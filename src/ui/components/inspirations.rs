use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Text},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::{
    http::models::Inspiration,
    util::colors::{self, Palette},
};

const CARD_MIN_WIDTH: u16 = 30;
const MAX_COLUMNS: usize = 3;

pub struct InspirationsView<'a> {
    inspirations: &'a [Inspiration],
    palette: Palette,
}

impl<'a> InspirationsView<'a> {
    pub fn new(inspirations: &'a [Inspiration], palette: Palette) -> Self {
        Self {
            inspirations,
            palette,
        }
    }

    fn columns(&self, width: u16) -> usize {
        ((width / CARD_MIN_WIDTH) as usize).clamp(1, MAX_COLUMNS)
    }

    fn card(&self, inspiration: &'a Inspiration) -> Paragraph<'a> {
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.palette.grid))
            .title(format!(" {} ", inspiration.title))
            .title_style(
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );

        let mut text = Text::from(inspiration.description.as_str());
        text.style = Style::new().fg(self.palette.text);
        if !inspiration.image_url.is_empty() {
            text.push_line(Line::default());
            text.push_line(Line::styled(
                inspiration.image_url.as_str(),
                Style::new()
                    .fg(self.palette.muted)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        Paragraph::new(text).block(block).wrap(Wrap { trim: true })
    }
}

impl Widget for InspirationsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.inspirations.is_empty() {
            Paragraph::new("Brak inspiracji do wyświetlenia.")
                .style(Style::new().fg(self.palette.muted))
                .centered()
                .render(area, buf);
            return;
        }

        let columns = self.columns(area.width);
        let rows = self.inspirations.len().div_ceil(columns);
        let row_areas = Layout::vertical(vec![Constraint::Fill(1); rows]).split(area);

        for (row, chunk) in self.inspirations.chunks(columns).enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Fill(1); columns]).split(row_areas[row]);
            for (inspiration, cell) in chunk.iter().zip(cells.iter()) {
                self.card(inspiration).render(*cell, buf);
            }
        }
    }
}
