use std::collections::{BTreeSet, HashMap};

use crate::http::{
    fetch::ChartQuery,
    models::{ChartData, Machine, Series, SeriesKind},
};

pub const FIRST_START_DAY: u32 = 1;
pub const LAST_START_DAY: u32 = 25;
pub const WINDOW_DAYS: u32 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub days: Vec<u32>,
    pub bars: Vec<BarSeries>,
    pub lines: Vec<LineSeries>,
    pub max_value: f64,
}

impl ChartModel {
    pub fn from_series(series: &[Series]) -> Self {
        let days: Vec<u32> = series
            .iter()
            .flat_map(|s| s.x.iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let by_day = |s: &Series| -> HashMap<u32, f64> {
            s.x.iter().copied().zip(s.y.iter().copied()).collect()
        };

        let bars = series
            .iter()
            .filter(|s| s.kind == SeriesKind::Bar)
            .map(|s| {
                let values = by_day(s);
                BarSeries {
                    name: s.name.clone(),
                    color: s.color.clone(),
                    values: days
                        .iter()
                        .map(|d| values.get(d).copied().unwrap_or(0.0))
                        .collect(),
                }
            })
            .collect();

        let lines = series
            .iter()
            .filter(|s| s.kind == SeriesKind::Line)
            .map(|s| {
                let values = by_day(s);
                LineSeries {
                    name: s.name.clone(),
                    color: s.color.clone(),
                    values: days.iter().map(|d| values.get(d).copied()).collect(),
                }
            })
            .collect();

        let max = series
            .iter()
            .flat_map(|s| s.y.iter().copied())
            .fold(0.0_f64, f64::max);

        Self {
            days,
            bars,
            lines,
            max_value: (max * 1.1).ceil(),
        }
    }

    pub fn day_labels(&self) -> Vec<String> {
        self.days.iter().map(|d| format!("Dzień {d}")).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartsState {
    machines: Vec<Machine>,
    selected: usize,
    start_day: u32,
    model: Option<ChartModel>,
}

impl Default for ChartsState {
    fn default() -> Self {
        Self {
            machines: Vec::new(),
            selected: 0,
            start_day: FIRST_START_DAY,
            model: None,
        }
    }
}

impl ChartsState {
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    pub fn selected_machine(&self) -> Option<&Machine> {
        self.machines.get(self.selected)
    }

    pub fn start_day(&self) -> u32 {
        self.start_day
    }

    pub fn model(&self) -> Option<&ChartModel> {
        self.model.as_ref()
    }

    pub fn day_range_label(&self) -> String {
        format!(
            "Dni {}-{}",
            self.start_day,
            self.start_day + WINDOW_DAYS - 1
        )
    }

    pub fn query(&self) -> Option<ChartQuery> {
        self.selected_machine().map(|machine| ChartQuery {
            kod: machine.kod.clone(),
            start_day: self.start_day,
        })
    }

    pub fn set_machines(&mut self, machines: Vec<Machine>) -> Option<ChartQuery> {
        if machines.is_empty() {
            return None;
        }
        self.machines = machines;
        self.selected = 0;
        self.query()
    }

    pub fn select_next(&mut self) -> Option<ChartQuery> {
        if self.machines.is_empty() {
            return None;
        }
        self.selected = (self.selected + 1) % self.machines.len();
        self.query()
    }

    pub fn select_previous(&mut self) -> Option<ChartQuery> {
        if self.machines.is_empty() {
            return None;
        }
        self.selected = (self.selected + self.machines.len() - 1) % self.machines.len();
        self.query()
    }

    pub fn shift_start_day(&mut self, delta: i32) -> Option<ChartQuery> {
        let shifted = self
            .start_day
            .saturating_add_signed(delta)
            .clamp(FIRST_START_DAY, LAST_START_DAY);
        if shifted == self.start_day {
            return None;
        }
        self.start_day = shifted;
        self.query()
    }

    pub fn apply(&mut self, data: &ChartData) {
        if data.series.is_empty() {
            return;
        }
        self.model = Some(ChartModel::from_series(&data.series));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(kind: SeriesKind, name: &str, x: &[u32], y: &[f64]) -> Series {
        Series {
            name: name.to_string(),
            kind,
            color: "#0ea5e9".to_string(),
            x: x.to_vec(),
            y: y.to_vec(),
        }
    }

    fn machines() -> Vec<Machine> {
        ["1310", "1420"]
            .into_iter()
            .map(|kod| Machine {
                kod: kod.to_string(),
                label: format!("{kod} Linia"),
            })
            .collect()
    }

    #[test]
    fn model_aligns_series_on_day_union() {
        let model = ChartModel::from_series(&[
            series(SeriesKind::Bar, "A", &[2, 1], &[20.0, 10.0]),
            series(SeriesKind::Bar, "B", &[3], &[30.0]),
            series(SeriesKind::Line, "Narastająco A", &[1, 2], &[10.0, 30.0]),
        ]);

        assert_eq!(model.days, vec![1, 2, 3]);
        assert_eq!(model.bars[0].values, vec![10.0, 20.0, 0.0]);
        assert_eq!(model.bars[1].values, vec![0.0, 0.0, 30.0]);
        assert_eq!(model.lines[0].values, vec![Some(10.0), Some(30.0), None]);
        assert_eq!(model.max_value, 33.0);
        assert_eq!(model.day_labels()[0], "Dzień 1");
    }

    #[test]
    fn empty_response_keeps_previous_chart() {
        let mut charts = ChartsState::default();
        charts.apply(&ChartData {
            series: vec![series(SeriesKind::Bar, "A", &[1], &[5.0])],
        });
        charts.apply(&ChartData::default());

        assert_eq!(charts.model().map(|m| m.days.clone()), Some(vec![1]));
    }

    #[test]
    fn machines_select_first_and_cycle() {
        let mut charts = ChartsState::default();
        assert_eq!(charts.query(), None);

        let first = charts.set_machines(machines()).unwrap();
        assert_eq!(first.kod, "1310");
        assert_eq!(charts.select_next().unwrap().kod, "1420");
        assert_eq!(charts.select_next().unwrap().kod, "1310");
        assert_eq!(charts.select_previous().unwrap().kod, "1420");
    }

    #[test]
    fn empty_machine_list_is_ignored() {
        let mut charts = ChartsState::default();
        charts.set_machines(machines());

        assert_eq!(charts.set_machines(vec![]), None);
        assert_eq!(charts.machines().len(), 2);
    }

    #[test]
    fn day_window_is_clamped() {
        let mut charts = ChartsState::default();
        charts.set_machines(machines());

        assert_eq!(charts.shift_start_day(-1), None);
        assert_eq!(charts.shift_start_day(3).unwrap().start_day, 4);
        assert_eq!(charts.day_range_label(), "Dni 4-10");
        assert_eq!(charts.shift_start_day(100).unwrap().start_day, LAST_START_DAY);
        assert_eq!(charts.shift_start_day(1), None);
    }
}
