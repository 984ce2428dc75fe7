use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Wykresy,
    Inspiracje,
    Zdjecia,
    ONas,
    PowerBi,
    Quiz,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Wykresy,
        Section::Inspiracje,
        Section::Zdjecia,
        Section::ONas,
        Section::PowerBi,
        Section::Quiz,
    ];

    pub const PHOTOS: Section = Section::Zdjecia;

    pub fn slug(self) -> &'static str {
        match self {
            Section::Wykresy => "wykresy",
            Section::Inspiracje => "inspiracje",
            Section::Zdjecia => "zdjecia",
            Section::ONas => "o-nas",
            Section::PowerBi => "powerbi",
            Section::Quiz => "quiz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Wykresy => "Wykresy",
            Section::Inspiracje => "Inspiracje",
            Section::Zdjecia => "Zdjęcia",
            Section::ONas => "O nas",
            Section::PowerBi => "Power BI",
            Section::Quiz => "Quiz",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Wykresy => "▤",
            Section::Inspiracje => "✦",
            Section::Zdjecia => "▣",
            Section::ONas => "◉",
            Section::PowerBi => "▦",
            Section::Quiz => "?",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
