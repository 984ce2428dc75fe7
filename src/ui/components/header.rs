use std::fmt::Display;

use chrono::{DateTime, Locale, TimeZone};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::{
    kiosk::rotator::Rotator,
    ui::util::pulse_symbol,
    util::colors::{self, Palette},
};

pub fn clock_text<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format_localized("%A, %-d %B %Y, %H:%M:%S", Locale::pl_PL)
        .to_string()
}

pub struct HeaderWidget<'a> {
    title: &'a str,
    clock: String,
    rotator: &'a Rotator,
    palette: Palette,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(title: &'a str, clock: String, rotator: &'a Rotator, palette: Palette) -> Self {
        Self {
            title,
            clock,
            rotator,
            palette,
        }
    }

    fn rotation_line(&self) -> Line<'static> {
        if self.rotator.is_paused() {
            Line::from(vec![
                Span::styled(pulse_symbol(false), Style::new().fg(colors::IDLE)),
                Span::raw(" Rotacja wstrzymana "),
            ])
        } else {
            Line::from(vec![
                Span::styled(pulse_symbol(true), Style::new().fg(colors::SUCCESS)),
                Span::raw(format!(" Następna sekcja za {}s ", self.rotator.countdown())),
            ])
        }
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.palette.grid))
            .style(Style::new().bg(self.palette.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        let [title_area, clock_area, rotation_area] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .areas(inner);

        Paragraph::new(format!(" {}", self.title))
            .style(
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_area, buf);
        Paragraph::new(self.clock.as_str())
            .style(Style::new().fg(self.palette.muted))
            .alignment(Alignment::Center)
            .render(clock_area, buf);
        Paragraph::new(self.rotation_line())
            .style(Style::new().fg(self.palette.text))
            .alignment(Alignment::Right)
            .render(rotation_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn clock_shows_date_and_seconds() {
        let now = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 18, 9, 5, 7)
            .unwrap();
        let text = clock_text(&now);

        assert!(text.contains("18"));
        assert!(text.contains("2026"));
        assert!(text.ends_with("09:05:07"));
    }
}
