use std::time::Duration;

use tracing::debug;

pub use crate::http::models::Slide;

use super::scheduler::{SLIDE_FADE_TIMER, SLIDESHOW_TIMER, Scheduler};
use crate::event::events::Event;

pub fn fallback_slides() -> Vec<Slide> {
    (1..=3)
        .map(|n| Slide {
            image_url: format!("/static/images/slides/slide{n}.jpg"),
            display_name: format!("Slajd {n}"),
        })
        .collect()
}

// `index` moves at once; the image and `active_dot` follow on `SlideSwap`
#[derive(Debug, Clone, PartialEq)]
pub struct Slideshow {
    slides: Vec<Slide>,
    index: usize,
    running: bool,
    active_dot: Option<usize>,
    fading: bool,
    generation: u64,
    period: Duration,
    fade: Duration,
}

impl Slideshow {
    pub fn new(period: Duration, fade: Duration) -> Self {
        Self {
            slides: fallback_slides(),
            index: 0,
            running: false,
            active_dot: None,
            fading: false,
            generation: 0,
            period,
            fade,
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn active_dot(&self) -> Option<usize> {
        self.active_dot
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn displayed(&self) -> Option<&Slide> {
        self.active_dot.and_then(|i| self.slides.get(i))
    }

    pub fn replace(&mut self, slides: Vec<Slide>) {
        self.slides = if slides.is_empty() {
            fallback_slides()
        } else {
            slides
        };
        if self.index >= self.slides.len() {
            self.index = 0;
        }
        if self.active_dot.is_some_and(|dot| dot >= self.slides.len()) {
            self.active_dot = None;
        }
    }

    pub fn start(&mut self, timers: &mut Scheduler) {
        if self.slides.is_empty() {
            return;
        }
        self.index = 0;
        self.render(0, timers);
        self.schedule(timers);
    }

    pub fn stop(&mut self, timers: &mut Scheduler) {
        timers.cancel(SLIDESHOW_TIMER);
        self.running = false;
    }

    pub fn go_to(&mut self, index: usize, timers: &mut Scheduler) {
        if index >= self.slides.len() {
            return;
        }
        self.stop(timers);
        self.index = index;
        self.render(index, timers);
        self.schedule(timers);
    }

    pub fn render(&mut self, index: usize, timers: &mut Scheduler) {
        if index >= self.slides.len() {
            return;
        }
        self.fading = true;
        timers.after(SLIDE_FADE_TIMER, self.fade, Event::SlideSwap(index));
    }

    pub fn on_tick(&mut self, generation: u64, timers: &mut Scheduler) {
        // ticks queued by a timer that has since been replaced
        if generation != self.generation {
            return;
        }
        if !self.running || self.slides.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.slides.len();
        self.render(self.index, timers);
    }

    pub fn on_swap(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        debug!(index, "slide_shown");
        self.active_dot = Some(index);
        self.fading = false;
    }

    fn schedule(&mut self, timers: &mut Scheduler) {
        self.generation += 1;
        timers.every(
            SLIDESHOW_TIMER,
            self.period,
            Event::SlideTick(self.generation),
        );
        self.running = true;
    }
}
