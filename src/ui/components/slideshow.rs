use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::{
    kiosk::slideshow::Slideshow,
    ui::util::centered_x,
    util::colors::{self, Palette},
};

pub struct SlideshowView<'a> {
    slideshow: &'a Slideshow,
    palette: Palette,
}

impl<'a> SlideshowView<'a> {
    pub fn new(slideshow: &'a Slideshow, palette: Palette) -> Self {
        Self { slideshow, palette }
    }

    pub fn dots(&self) -> Line<'static> {
        let spans: Vec<Span> = (0..self.slideshow.slides().len())
            .flat_map(|i| {
                let dot = if self.slideshow.active_dot() == Some(i) {
                    Span::styled("●", Style::new().fg(colors::PRIMARY))
                } else {
                    Span::styled("○", Style::new().fg(self.palette.muted))
                };
                [dot, Span::raw(" ")]
            })
            .collect();
        Line::from(spans).centered()
    }
}

impl Widget for SlideshowView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [image_area, dots_area, hint_area] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let slide = self
            .slideshow
            .displayed()
            .or_else(|| self.slideshow.slides().get(self.slideshow.index()));

        let mut image_style = Style::new().fg(self.palette.text);
        if self.slideshow.is_fading() {
            image_style = image_style.fg(self.palette.muted).add_modifier(Modifier::DIM);
        }

        let frame = Block::bordered()
            .border_set(border::THICK)
            .border_style(image_style)
            .title(
                slide
                    .map(|s| format!(" {} ", s.display_name))
                    .unwrap_or_default(),
            )
            .title_alignment(ratatui::layout::Alignment::Center);
        let inner = frame.inner(image_area);
        frame.render(image_area, buf);

        if let Some(slide) = slide {
            let y = inner.y + inner.height / 2;
            if inner.height > 0 && inner.width > 0 {
                let name = slide.display_name.as_str();
                buf.set_stringn(
                    centered_x(inner, name),
                    y,
                    name,
                    inner.width as usize,
                    image_style.add_modifier(Modifier::BOLD),
                );
                if y + 1 < inner.y + inner.height {
                    let url = slide.image_url.as_str();
                    buf.set_stringn(
                        centered_x(inner, url),
                        y + 1,
                        url,
                        inner.width as usize,
                        image_style.add_modifier(Modifier::ITALIC),
                    );
                }
            }
        }

        Paragraph::new(self.dots()).render(dots_area, buf);
        Paragraph::new("←/→ poprzednie/następne   Alt+1..9 wybór zdjęcia")
            .style(Style::new().fg(self.palette.muted))
            .centered()
            .render(hint_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn active_dot_is_filled() {
        let mut slideshow = Slideshow::new(Duration::from_secs(5), Duration::from_millis(400));
        slideshow.on_swap(2);
        let dots = SlideshowView::new(&slideshow, colors::DARK).dots().to_string();

        assert_eq!(dots.trim_end(), "○ ○ ●");
    }

    #[test]
    fn renders_displayed_slide() {
        let mut slideshow = Slideshow::new(Duration::from_secs(5), Duration::from_millis(400));
        slideshow.on_swap(1);
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        SlideshowView::new(&slideshow, colors::DARK).render(area, &mut buf);
        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("Slajd 2"));
        assert!(text.contains("/static/images/slides/slide2.jpg"));
    }
}
