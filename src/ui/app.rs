use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{info, warn};

use crate::{
    config::KioskConfig,
    event::events::Event,
    http::{
        ApiService, CONTENT, ContentSource, INSPIRATIONS, MACHINES, SLIDES,
        fetch::{self, ChartQuery, logged},
        models::Content,
    },
    kiosk::{
        Kiosk,
        scheduler::{REFRESH_TIMER, Scheduler},
        section::Section,
        theme::Preferences,
    },
    util::task::TaskManager,
};

use super::{
    message::AppMessage,
    state::ContentState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

const CHART_FETCH: &str = "chart_fetch";
const REFRESH_FETCH: &str = "refresh_fetch";

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub api: Arc<dyn ContentSource>,
    pub config: KioskConfig,
    pub kiosk: Kiosk,
    pub content: ContentState,
    pub preferences: Preferences,
    pub refresh_timer: Scheduler,
    pub task_manager: TaskManager,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: KioskConfig) -> color_eyre::Result<Self> {
        let api = Arc::new(ApiService::new(&config.api_url)?);
        Ok(Self::with_source(config, api))
    }

    pub fn with_source(config: KioskConfig, api: Arc<dyn ContentSource>) -> Self {
        let (event_tx, event_rx) = flume::unbounded();
        let preferences = Preferences::load_from(&config.data_dir);

        Self {
            kiosk: Kiosk::new(&config, event_tx.clone()),
            refresh_timer: Scheduler::new(event_tx.clone()),
            event_rx,
            event_tx,
            api,
            config,
            content: ContentState::default(),
            preferences,
            task_manager: TaskManager::new(),
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.shutdown();
        tui.exit()?;
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            frame.render_widget(self, frame.area());
        }
    }

    pub async fn bootstrap(&mut self) {
        let api = self.api.clone();
        info!(api = self.config.api_url.as_str(), "bootstrap");

        if let Some(content) = logged(CONTENT, api.fetch_content()).await {
            EventHandler::handle_action(self, Event::ContentFetched(content)).await;
        }
        if let Some(machines) = logged(MACHINES, api.fetch_machines()).await {
            EventHandler::handle_action(self, Event::MachinesFetched(machines)).await;
        }
        if let Some(inspirations) = logged(INSPIRATIONS, api.fetch_inspirations()).await {
            EventHandler::handle_action(self, Event::InspirationsFetched(inspirations)).await;
        }
        if let Some(slides) = logged(SLIDES, api.fetch_slides()).await {
            EventHandler::handle_action(self, Event::SlidesFetched(slides)).await;
        }

        self.kiosk.start_rotation();
        let first = self
            .kiosk
            .rotator()
            .visible()
            .first()
            .copied()
            .unwrap_or(Section::Wykresy);
        self.kiosk.activate(first);

        self.refresh_timer.every(
            REFRESH_TIMER,
            self.config.refresh_interval,
            Event::RefreshTick,
        );
    }

    pub fn apply_content(&mut self, content: Content) {
        if let Some(settings) = content.settings {
            self.content.settings = settings;
        }
        if let Some(visibility) = content.visibility {
            self.kiosk.apply_visibility(visibility);
        }
        info!(visible = ?self.kiosk.rotator().visible(), "content_loaded");
    }

    pub fn fetch_chart(&mut self, query: ChartQuery) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        self.task_manager.spawn(
            CHART_FETCH,
            tokio::spawn(async move {
                fetch::fetch_chart(api.as_ref(), &query, &tx).await;
            }),
        );
    }

    pub fn refresh(&mut self) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();
        let chart = self.content.charts.query();
        self.task_manager.spawn(
            REFRESH_FETCH,
            tokio::spawn(fetch::refresh_all(api, chart, tx)),
        );
    }

    pub async fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::Refresh => self.refresh(),
            AppMessage::ToggleDarkMode => {
                let dark = self.preferences.toggle_dark_mode();
                info!(dark, "theme_toggled");
                if let Err(e) = self.preferences.save_to(&self.config.data_dir) {
                    warn!(error = %e, "preferences_save_failed");
                }
            }
            AppMessage::ActivateSection(section) => {
                self.kiosk.activate(section);
            }
            AppMessage::NextSection => self.kiosk.advance(),
            AppMessage::PreviousSection => self.kiosk.previous(),
            AppMessage::ToggleRotation => self.kiosk.toggle_pause(),
            AppMessage::GoToSlide(index) => self.kiosk.go_to_slide(index),
            AppMessage::NextSlide => self.kiosk.step_slide(1),
            AppMessage::PreviousSlide => self.kiosk.step_slide(-1),
            AppMessage::NextMachine => {
                if let Some(query) = self.content.charts.select_next() {
                    self.fetch_chart(query);
                }
            }
            AppMessage::PreviousMachine => {
                if let Some(query) = self.content.charts.select_previous() {
                    self.fetch_chart(query);
                }
            }
            AppMessage::ShiftStartDay(delta) => {
                if let Some(query) = self.content.charts.shift_start_day(delta) {
                    self.fetch_chart(query);
                }
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.kiosk.shutdown();
        self.refresh_timer.cancel_all();
        self.task_manager.abort_all();
    }
}
