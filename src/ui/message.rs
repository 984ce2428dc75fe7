use crate::kiosk::section::Section;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    Quit,
    Refresh,
    ToggleDarkMode,

    // Rotation
    ActivateSection(Section),
    NextSection,
    PreviousSection,
    ToggleRotation,

    // Slideshow
    GoToSlide(usize),
    NextSlide,
    PreviousSlide,

    // Charts
    NextMachine,
    PreviousMachine,
    ShiftStartDay(i32),
}
