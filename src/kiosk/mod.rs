pub mod charts;
pub mod rotator;
pub mod scheduler;
pub mod section;
pub mod slideshow;
pub mod theme;
pub mod visibility;

use std::time::Duration;

use flume::Sender;
use tracing::{info, warn};

use crate::{config::KioskConfig, event::events::Event};

use self::{
    rotator::Rotator,
    scheduler::{COUNTDOWN_TIMER, ROTATION_TIMER, Scheduler},
    section::Section,
    slideshow::{Slide, Slideshow},
    visibility::VisibilityMap,
};

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

pub struct Kiosk {
    rotator: Rotator,
    slideshow: Slideshow,
    visibility: VisibilityMap,
    timers: Scheduler,
}

impl Kiosk {
    pub fn new(config: &KioskConfig, event_tx: Sender<Event>) -> Self {
        let visibility = VisibilityMap::default();
        Self {
            rotator: Rotator::new(config.rotation_interval, visibility.visible_sections()),
            slideshow: Slideshow::new(config.slide_interval, config.fade_delay),
            visibility,
            timers: Scheduler::new(event_tx),
        }
    }

    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    pub fn current(&self) -> Section {
        self.rotator.current()
    }

    pub fn is_rotation_scheduled(&self) -> bool {
        self.timers.is_scheduled(ROTATION_TIMER) && self.timers.is_scheduled(COUNTDOWN_TIMER)
    }

    pub fn is_slideshow_scheduled(&self) -> bool {
        self.timers.is_scheduled(scheduler::SLIDESHOW_TIMER)
    }

    pub fn activate(&mut self, section: Section) -> bool {
        if self.visibility.is_hidden(section) {
            warn!(section = %section, "section_hidden");
            return false;
        }

        info!(section = %section, "section_activated");
        self.rotator.set_current(section);
        self.rotator.reset_countdown();

        if section == Section::PHOTOS {
            self.start_slideshow();
        } else {
            self.stop_slideshow();
        }
        true
    }

    pub fn advance(&mut self) {
        if let Some(next) = self.rotator.next_section() {
            self.activate(next);
        }
    }

    pub fn previous(&mut self) {
        if let Some(previous) = self.rotator.previous_section() {
            self.activate(previous);
        }
    }

    pub fn start_rotation(&mut self) {
        self.stop_rotation();
        self.timers
            .every(ROTATION_TIMER, self.rotator.period(), Event::RotationTick);
        self.rotator.reset_countdown();
        self.timers
            .every(COUNTDOWN_TIMER, COUNTDOWN_STEP, Event::CountdownTick);
    }

    pub fn stop_rotation(&mut self) {
        self.timers.cancel(ROTATION_TIMER);
        self.timers.cancel(COUNTDOWN_TIMER);
    }

    pub fn toggle_pause(&mut self) {
        if self.rotator.is_paused() {
            self.rotator.set_paused(false);
            self.start_rotation();
            info!("rotation_resumed");
        } else {
            self.rotator.set_paused(true);
            self.stop_rotation();
            info!("rotation_paused");
        }
    }

    pub fn apply_visibility(&mut self, visibility: VisibilityMap) {
        let visible = visibility.visible_sections();
        self.visibility = visibility;
        self.rotator.set_visible(visible);

        let current = self.rotator.current();
        if !self.rotator.visible().contains(&current) {
            if let Some(first) = self.rotator.visible().first().copied() {
                info!(from = %current, to = %first, "hidden_section_left");
                self.activate(first);
            }
        }
    }

    pub fn replace_slides(&mut self, slides: Vec<Slide>) {
        self.slideshow.replace(slides);
    }

    pub fn start_slideshow(&mut self) {
        self.slideshow.start(&mut self.timers);
    }

    pub fn stop_slideshow(&mut self) {
        self.slideshow.stop(&mut self.timers);
    }

    // photo section only
    pub fn go_to_slide(&mut self, index: usize) {
        if self.current() != Section::PHOTOS {
            return;
        }
        self.slideshow.go_to(index, &mut self.timers);
    }

    pub fn step_slide(&mut self, offset: isize) {
        let len = self.slideshow.slides().len();
        if self.current() != Section::PHOTOS || len == 0 {
            return;
        }
        let index = (self.slideshow.index() as isize + offset).rem_euclid(len as isize);
        self.go_to_slide(index as usize);
    }

    pub fn on_timer(&mut self, event: &Event) {
        match event {
            Event::RotationTick => {
                if !self.rotator.is_paused() {
                    self.advance();
                }
            }
            Event::CountdownTick => self.rotator.tick_countdown(),
            Event::SlideTick(generation) => {
                self.slideshow.on_tick(*generation, &mut self.timers)
            }
            Event::SlideSwap(index) => self.slideshow.on_swap(*index),
            _ => {}
        }
    }

    pub fn shutdown(&mut self) {
        self.timers.cancel_all();
    }
}
