use crate::{
    kiosk::section::Section,
    ui::message::AppMessage,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, section: Section) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(AppMessage::Quit),
            (KeyCode::Char(c @ '1'..='6'), m) if !m.contains(KeyModifiers::ALT) => {
                Section::ALL
                    .get(digit(c) - 1)
                    .copied()
                    .map(AppMessage::ActivateSection)
            }
            (KeyCode::Tab, _) => Some(AppMessage::NextSection),
            (KeyCode::BackTab, _) => Some(AppMessage::PreviousSection),
            (KeyCode::Char(' '), _) | (KeyCode::Char('p'), _) => Some(AppMessage::ToggleRotation),
            (KeyCode::Char('d'), _) => Some(AppMessage::ToggleDarkMode),
            (KeyCode::Char('r'), _) => Some(AppMessage::Refresh),
            (code, modifiers) => Self::handle_section_key(code, modifiers, section),
        }
    }

    fn handle_section_key(
        code: KeyCode,
        modifiers: KeyModifiers,
        section: Section,
    ) -> Option<AppMessage> {
        match (section, code) {
            (Section::Zdjecia, KeyCode::Char(c @ '1'..='9'))
                if modifiers.contains(KeyModifiers::ALT) =>
            {
                Some(AppMessage::GoToSlide(digit(c) - 1))
            }
            (Section::Zdjecia, KeyCode::Right) => Some(AppMessage::NextSlide),
            (Section::Zdjecia, KeyCode::Left) => Some(AppMessage::PreviousSlide),
            (Section::Wykresy, KeyCode::Down) => Some(AppMessage::NextMachine),
            (Section::Wykresy, KeyCode::Up) => Some(AppMessage::PreviousMachine),
            (Section::Wykresy, KeyCode::Right) => Some(AppMessage::ShiftStartDay(1)),
            (Section::Wykresy, KeyCode::Left) => Some(AppMessage::ShiftStartDay(-1)),
            _ => None,
        }
    }
}

fn digit(c: char) -> usize {
    c.to_digit(10).unwrap_or(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_activate_sections_in_master_order() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('3')), Section::Wykresy),
            Some(AppMessage::ActivateSection(Section::Zdjecia))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('6')), Section::Wykresy),
            Some(AppMessage::ActivateSection(Section::Quiz))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('7')), Section::Wykresy),
            None
        );
    }

    #[test]
    fn alt_digits_jump_to_slides() {
        let alt_two = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT);

        assert_eq!(
            InputHandler::handle_key(alt_two, Section::Zdjecia),
            Some(AppMessage::GoToSlide(1))
        );
    }

    #[test]
    fn alt_digits_do_nothing_outside_photos() {
        let alt_two = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT);

        assert_eq!(InputHandler::handle_key(alt_two, Section::Wykresy), None);
        assert_eq!(InputHandler::handle_key(alt_two, Section::Quiz), None);
    }

    #[test]
    fn arrows_depend_on_section() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Right), Section::Zdjecia),
            Some(AppMessage::NextSlide)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Right), Section::Wykresy),
            Some(AppMessage::ShiftStartDay(1))
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Right), Section::ONas),
            None
        );
    }

    #[test]
    fn global_controls() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert_eq!(
            InputHandler::handle_key(ctrl_c, Section::Quiz),
            Some(AppMessage::Quit)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' ')), Section::Quiz),
            Some(AppMessage::ToggleRotation)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('d')), Section::Quiz),
            Some(AppMessage::ToggleDarkMode)
        );
    }
}
