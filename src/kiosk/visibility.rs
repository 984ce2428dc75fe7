use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::section::Section;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VisibilityMap(HashMap<String, bool>);

impl VisibilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, section: Section, visible: bool) -> Self {
        self.0.insert(section.slug().to_string(), visible);
        self
    }

    // a missing key means visible
    pub fn is_hidden(&self, section: Section) -> bool {
        self.0.get(section.slug()) == Some(&false)
    }

    pub fn visible_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| !self.is_hidden(*section))
            .collect()
    }

    pub fn nav_entries(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        Section::ALL
            .into_iter()
            .map(|section| (section, !self.is_hidden(section)))
    }
}

impl FromIterator<(Section, bool)> for VisibilityMap {
    fn from_iter<I: IntoIterator<Item = (Section, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(section, visible)| (section.slug().to_string(), visible))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_shows_everything() {
        assert_eq!(VisibilityMap::new().visible_sections(), Section::ALL.to_vec());
    }

    #[test]
    fn only_explicit_false_hides() {
        let map: VisibilityMap =
            serde_json::from_str(r#"{"zdjecia": false, "quiz": true, "unknown": false}"#).unwrap();

        assert_eq!(
            map.visible_sections(),
            vec![
                Section::Wykresy,
                Section::Inspiracje,
                Section::ONas,
                Section::PowerBi,
                Section::Quiz,
            ]
        );
    }

    #[test]
    fn nav_entries_follow_flags() {
        let map = VisibilityMap::new()
            .with(Section::PowerBi, false)
            .with(Section::Wykresy, true);
        let hidden: Vec<Section> = map
            .nav_entries()
            .filter(|(_, shown)| !shown)
            .map(|(section, _)| section)
            .collect();

        assert_eq!(hidden, vec![Section::PowerBi]);
        assert_eq!(map.nav_entries().count(), Section::ALL.len());
    }

    #[test]
    fn all_hidden_yields_empty_list() {
        let map: VisibilityMap = Section::ALL.into_iter().map(|s| (s, false)).collect();

        assert!(map.visible_sections().is_empty());
    }
}
