use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::{self, border},
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::{
    kiosk::charts::{ChartModel, ChartsState},
    ui::components::spinner::Spinner,
    util::colors::{self, Palette},
};

fn series_color(hex: &str) -> Color {
    colors::parse_hex(hex).unwrap_or(colors::PRIMARY)
}

pub struct ChartsView<'a> {
    charts: &'a ChartsState,
    palette: Palette,
}

impl<'a> ChartsView<'a> {
    pub fn new(charts: &'a ChartsState, palette: Palette) -> Self {
        Self { charts, palette }
    }

    fn toolbar(&self) -> Line<'a> {
        let machine = self
            .charts
            .selected_machine()
            .map(|m| m.label.as_str())
            .filter(|label| !label.is_empty())
            .or_else(|| self.charts.selected_machine().map(|m| m.kod.as_str()))
            .unwrap_or("brak maszyn");

        Line::from(vec![
            Span::styled(" Maszyna: ", Style::new().fg(self.palette.muted)),
            Span::styled(
                machine.to_string(),
                Style::new().fg(self.palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [↑/↓]   ", Style::new().fg(self.palette.muted)),
            Span::styled(
                self.charts.day_range_label(),
                Style::new().fg(self.palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" [←/→]", Style::new().fg(self.palette.muted)),
        ])
    }

    fn block(&self, title: &'static str) -> Block<'static> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::new().fg(self.palette.grid))
            .title(title)
    }

    fn render_bars(&self, model: &ChartModel, area: Rect, buf: &mut Buffer) {
        let mut chart = BarChart::default()
            .block(self.block(" Produkcja dzienna "))
            .bar_width(4)
            .bar_gap(0)
            .group_gap(2)
            .value_style(Style::new().fg(self.palette.text))
            .label_style(Style::new().fg(self.palette.muted))
            .max(model.max_value.max(1.0) as u64);

        for (i, day) in model.days.iter().enumerate() {
            let bars: Vec<Bar> = model
                .bars
                .iter()
                .map(|series| {
                    let value = series.values[i].max(0.0);
                    Bar::default()
                        .value(value.round() as u64)
                        .text_value(format!("{value:.0}"))
                        .style(Style::new().fg(series_color(&series.color)))
                })
                .collect();
            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(format!("Dzień {day}")))
                    .bars(&bars),
            );
        }

        chart.render(area, buf);
    }

    fn render_lines(&self, model: &ChartModel, area: Rect, buf: &mut Buffer) {
        let points: Vec<Vec<(f64, f64)>> = model
            .lines
            .iter()
            .map(|series| {
                series
                    .values
                    .iter()
                    .enumerate()
                    .filter_map(|(i, value)| value.map(|v| (i as f64, v)))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = model
            .lines
            .iter()
            .zip(&points)
            .map(|(series, data)| {
                Dataset::default()
                    .name(series.name.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::new().fg(series_color(&series.color)))
                    .data(data)
            })
            .collect();

        let labels = model.day_labels();
        let x_labels: Vec<String> = match (labels.first(), labels.last()) {
            (Some(first), Some(last)) if labels.len() > 1 => vec![first.clone(), last.clone()],
            (Some(only), _) => vec![only.clone()],
            _ => Vec::new(),
        };
        let max = model.max_value.max(1.0);

        Chart::new(datasets)
            .block(self.block(" Produkcja narastająca "))
            .x_axis(
                Axis::default()
                    .style(Style::new().fg(self.palette.muted))
                    .bounds([0.0, model.days.len().saturating_sub(1).max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::new().fg(self.palette.muted))
                    .bounds([0.0, max])
                    .labels(vec!["0".to_string(), format!("{max:.0}")]),
            )
            .render(area, buf);
    }
}

impl Widget for ChartsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [toolbar_area, chart_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);
        Paragraph::new(self.toolbar()).render(toolbar_area, buf);

        let Some(model) = self.charts.model() else {
            Spinner::new()
                .with_style(Style::new().fg(self.palette.muted))
                .with_label("Ładowanie danych produkcji…")
                .render(chart_area, buf);
            return;
        };

        let [bars_area, lines_area] =
            Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(chart_area);
        self.render_bars(model, bars_area, buf);
        self.render_lines(model, lines_area, buf);
    }
}
