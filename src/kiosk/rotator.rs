use std::time::Duration;

use super::section::Section;

#[derive(Debug, Clone, PartialEq)]
pub struct Rotator {
    current: Section,
    visible: Vec<Section>,
    countdown: u32,
    paused: bool,
    period: Duration,
}

impl Rotator {
    pub fn new(period: Duration, visible: Vec<Section>) -> Self {
        let mut rotator = Self {
            current: Section::Wykresy,
            visible,
            countdown: 0,
            paused: false,
            period,
        };
        rotator.reset_countdown();
        rotator
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn visible(&self) -> &[Section] {
        &self.visible
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub(super) fn set_current(&mut self, section: Section) {
        self.current = section;
    }

    pub(super) fn set_visible(&mut self, visible: Vec<Section>) {
        self.visible = visible;
    }

    pub(super) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn period_secs(&self) -> u32 {
        u32::try_from(self.period.as_secs()).unwrap_or(u32::MAX).max(1)
    }

    pub fn reset_countdown(&mut self) {
        self.countdown = self.period_secs();
    }

    // wraps below zero to `period - 1`
    pub fn tick_countdown(&mut self) {
        if self.paused {
            return;
        }
        self.countdown = self
            .countdown
            .checked_sub(1)
            .unwrap_or(self.period_secs() - 1);
    }

    pub fn next_section(&self) -> Option<Section> {
        self.step(1)
    }

    pub fn previous_section(&self) -> Option<Section> {
        self.step(self.visible.len().saturating_sub(1))
    }

    fn step(&self, offset: usize) -> Option<Section> {
        let len = self.visible.len();
        if len < 2 {
            return None;
        }
        let next = match self.visible.iter().position(|s| *s == self.current) {
            Some(index) => (index + offset) % len,
            None => 0,
        };
        Some(self.visible[next])
    }
}
