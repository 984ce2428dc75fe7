use chrono::Local;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Widget},
};

use crate::{
    kiosk::section::Section,
    ui::{
        app::App,
        components::{
            charts::ChartsView,
            footer::Footer,
            header::{HeaderWidget, clock_text},
            inspirations::InspirationsView,
            page::PageView,
            sidebar::Sidebar,
            slideshow::SlideshowView,
        },
    },
    util::colors,
};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let palette = colors::palette(self.preferences.dark_mode);
        buf.set_style(area, Style::new().bg(palette.background).fg(palette.text));

        let [header_area, main_area, footer_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(area);
        let [sidebar_area, content_area] =
            Layout::horizontal([Constraint::Length(22), Constraint::Min(1)]).areas(main_area);

        HeaderWidget::new(
            self.content.header_title(),
            clock_text(&Local::now()),
            self.kiosk.rotator(),
            palette,
        )
        .render(header_area, buf);

        let current = self.kiosk.current();
        Sidebar::new(self.kiosk.visibility(), current, palette).render(sidebar_area, buf);

        let content_block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(palette.grid))
            .title(format!(" {} ", current.label()))
            .title_style(
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::new().bg(palette.surface));
        let content_inner = content_block.inner(content_area);
        content_block.render(content_area, buf);

        match current {
            Section::Wykresy => {
                ChartsView::new(&self.content.charts, palette).render(content_inner, buf)
            }
            Section::Inspiracje => {
                InspirationsView::new(&self.content.inspirations, palette).render(content_inner, buf)
            }
            Section::Zdjecia => {
                SlideshowView::new(self.kiosk.slideshow(), palette).render(content_inner, buf)
            }
            Section::ONas | Section::PowerBi | Section::Quiz => {
                PageView::new(current, self.content.about_text(), palette)
                    .render(content_inner, buf)
            }
        }

        Footer::new(self.content.footer_note(), self.preferences.dark_mode, palette)
            .render(footer_area, buf);
    }
}
