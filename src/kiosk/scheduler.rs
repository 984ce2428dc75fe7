use std::time::Duration;

use flume::Sender;
use tokio::time::{Instant, MissedTickBehavior};

use crate::{event::events::Event, util::task::TaskManager};

pub const ROTATION_TIMER: &str = "rotation";
pub const COUNTDOWN_TIMER: &str = "countdown";
pub const SLIDESHOW_TIMER: &str = "slideshow";
pub const SLIDE_FADE_TIMER: &str = "slide_fade";
pub const REFRESH_TIMER: &str = "refresh";

pub struct Scheduler {
    tasks: TaskManager,
    event_tx: Sender<Event>,
}

impl Scheduler {
    pub fn new(event_tx: Sender<Event>) -> Self {
        Self {
            tasks: TaskManager::new(),
            event_tx,
        }
    }

    pub fn every(&mut self, key: &str, period: Duration, event: Event) {
        let tx = self.event_tx.clone();
        self.tasks.spawn(
            key,
            tokio::spawn(async move {
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                loop {
                    interval.tick().await;
                    if tx.send_async(event.clone()).await.is_err() {
                        break;
                    }
                }
            }),
        );
    }

    pub fn after(&mut self, key: &str, delay: Duration, event: Event) {
        let tx = self.event_tx.clone();
        self.tasks.spawn(
            key,
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                let _ = tx.send_async(event).await;
            }),
        );
    }

    pub fn cancel(&mut self, key: &str) {
        self.tasks.abort(key);
    }

    pub fn is_scheduled(&self, key: &str) -> bool {
        self.tasks.is_running(key)
    }

    pub fn cancel_all(&mut self) {
        self.tasks.abort_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn periodic_timer_waits_one_period_before_first_fire() {
        let (tx, rx) = flume::unbounded();
        let mut scheduler = Scheduler::new(tx);
        scheduler.every(ROTATION_TIMER, Duration::from_secs(30), Event::RotationTick);

        tokio::time::sleep(Duration::from_secs(29)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(rx.try_recv(), Ok(Event::RotationTick));

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(rx.try_recv(), Ok(Event::RotationTick));
        assert!(scheduler.is_scheduled(ROTATION_TIMER));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_timer_stops_firing() {
        let (tx, rx) = flume::unbounded();
        let mut scheduler = Scheduler::new(tx);
        scheduler.every(COUNTDOWN_TIMER, Duration::from_secs(1), Event::CountdownTick);
        scheduler.cancel(COUNTDOWN_TIMER);
        scheduler.cancel(COUNTDOWN_TIMER);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
        assert!(!scheduler.is_scheduled(COUNTDOWN_TIMER));
    }

    #[tokio::test(start_paused = true)]
    async fn one_shot_fires_once() {
        let (tx, rx) = flume::unbounded();
        let mut scheduler = Scheduler::new(tx);
        scheduler.after(SLIDE_FADE_TIMER, Duration::from_millis(400), Event::SlideSwap(1));

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![Event::SlideSwap(1)]);
        assert!(!scheduler.is_scheduled(SLIDE_FADE_TIMER));
    }
}
