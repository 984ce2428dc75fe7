use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, List, ListItem, Widget},
};

use crate::{
    kiosk::{section::Section, visibility::VisibilityMap},
    util::colors::{self, Palette},
};

pub struct Sidebar<'a> {
    visibility: &'a VisibilityMap,
    active: Section,
    palette: Palette,
}

impl<'a> Sidebar<'a> {
    pub fn new(visibility: &'a VisibilityMap, active: Section, palette: Palette) -> Self {
        Self {
            visibility,
            active,
            palette,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .visibility
            .nav_entries()
            .enumerate()
            .filter(|(_, (_, shown))| *shown)
            .map(|(key, (section, _))| {
                let style = if section == self.active {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(self.palette.text)
                };
                ListItem::new(format!(" {} {}  {}", key + 1, section.icon(), section.label()))
                    .style(style)
            })
            .collect();

        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.palette.grid))
            .style(Style::new().bg(self.palette.surface));

        List::new(items).block(block).render(area, buf);
    }
}
