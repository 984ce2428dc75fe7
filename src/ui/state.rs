use crate::{
    http::models::{Inspiration, Settings},
    kiosk::charts::ChartsState,
};

#[derive(Debug, Clone, Default)]
pub struct ContentState {
    pub settings: Settings,
    pub inspirations: Vec<Inspiration>,
    pub charts: ChartsState,
}

impl ContentState {
    pub fn header_title(&self) -> &str {
        self.settings
            .header_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or("Firmowy Kiosk")
    }

    pub fn footer_note(&self) -> &str {
        self.settings.footer_note.as_deref().unwrap_or_default()
    }

    pub fn about_text(&self) -> &str {
        self.settings.about_text.as_deref().unwrap_or_default()
    }
}
