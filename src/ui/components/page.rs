use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    kiosk::section::Section,
    util::colors::{self, Palette},
};

pub struct PageView<'a> {
    section: Section,
    about_text: &'a str,
    palette: Palette,
}

impl<'a> PageView<'a> {
    pub fn new(section: Section, about_text: &'a str, palette: Palette) -> Self {
        Self {
            section,
            about_text,
            palette,
        }
    }

    fn body(&self) -> (&'static str, &'a str) {
        match self.section {
            Section::ONas if !self.about_text.trim().is_empty() => ("O naszej firmie", self.about_text),
            Section::ONas => ("O naszej firmie", "Opis firmy nie został jeszcze dodany."),
            Section::PowerBi => (
                "Raport Power BI",
                "Aktualne wskaźniki produkcji są publikowane w raporcie Power BI dostępnym w sieci firmowej.",
            ),
            Section::Quiz => (
                "Quiz tygodnia",
                "Odpowiedz na pytanie tygodnia przy stanowisku kiosku i sprawdź swoją wiedzę.",
            ),
            _ => ("", ""),
        }
    }
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (heading, body) = self.body();
        let text = Text::from(vec![
            Line::styled(
                heading,
                Style::new()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(body, Style::new().fg(self.palette.text)),
        ]);

        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .centered()
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_page_uses_backend_text() {
        let page = PageView::new(Section::ONas, "Od 1989 roku produkujemy", colors::LIGHT);

        assert_eq!(page.body().1, "Od 1989 roku produkujemy");
    }

    #[test]
    fn about_page_has_placeholder() {
        let page = PageView::new(Section::ONas, "  ", colors::LIGHT);

        assert_eq!(page.body().1, "Opis firmy nie został jeszcze dodany.");
    }
}
