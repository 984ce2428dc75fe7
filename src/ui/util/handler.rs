use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.bootstrap().await,
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
            TerminalEvent::Tick => {
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    pub async fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::RotationTick
            | Event::CountdownTick
            | Event::SlideTick(_)
            | Event::SlideSwap(_) => {
                app.kiosk.on_timer(&evt);
            }
            Event::RefreshTick => app.refresh(),
            Event::ContentFetched(content) => app.apply_content(content),
            Event::MachinesFetched(machines) => {
                debug!(count = machines.len(), "machines_fetched");
                if let Some(query) = app.content.charts.set_machines(machines) {
                    app.fetch_chart(query);
                }
            }
            Event::ChartDataFetched(data) => app.content.charts.apply(&data),
            Event::InspirationsFetched(inspirations) => {
                debug!(count = inspirations.len(), "inspirations_fetched");
                app.content.inspirations = inspirations;
            }
            Event::SlidesFetched(slides) => {
                debug!(count = slides.len(), "slides_fetched");
                app.kiosk.replace_slides(slides);
            }
        }
    }

    async fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if evt.kind != KeyEventKind::Press {
            return;
        }
        if evt.code == KeyCode::Char('c') && evt.modifiers == KeyModifiers::CONTROL {
            app.update(AppMessage::Quit).await;
            return;
        }

        if let Some(msg) = InputHandler::handle_key(evt, app.kiosk.current()) {
            app.update(msg).await;
        }
    }
}
