use serde::{Deserialize, Serialize};

use crate::kiosk::visibility::VisibilityMap;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Machine {
    pub kod: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ChartData {
    #[serde(default)]
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Series {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub x: Vec<u32>,
    #[serde(default)]
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Inspiration {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Slide {
    #[serde(rename = "url")]
    pub image_url: String,
    #[serde(rename = "name", default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub about_text: Option<String>,
    #[serde(default)]
    pub header_title: Option<String>,
    #[serde(default)]
    pub footer_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Content {
    #[serde(default)]
    pub settings: Option<Settings>,
    #[serde(default)]
    pub visibility: Option<VisibilityMap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kiosk::section::Section;

    #[test]
    fn decodes_chart_series() {
        let data: ChartData = serde_json::from_str(
            r##"{"series": [
                {"type": "bar", "name": "A", "x": [1, 2], "y": [120.0, 80], "color": "#0ea5e9"},
                {"type": "line", "name": "Narastająco A", "x": [1, 2], "y": [120, 200], "color": "#0284c7"}
            ]}"##,
        )
        .unwrap();

        assert_eq!(data.series.len(), 2);
        assert_eq!(data.series[0].kind, SeriesKind::Bar);
        assert_eq!(data.series[1].kind, SeriesKind::Line);
        assert_eq!(data.series[1].y, vec![120.0, 200.0]);
    }

    #[test]
    fn decodes_slides_from_wire_names() {
        let slides: Vec<Slide> =
            serde_json::from_str(r#"[{"url": "/static/images/hala.jpg", "name": "hala.jpg"}]"#)
                .unwrap();

        assert_eq!(slides[0].image_url, "/static/images/hala.jpg");
        assert_eq!(slides[0].display_name, "hala.jpg");
    }

    #[test]
    fn decodes_content_with_visibility() {
        let content: Content = serde_json::from_str(
            r#"{
                "settings": {"about_text": "O firmie", "header_title": "Kiosk", "footer_note": null},
                "visibility": {"zdjecia": false, "quiz": true}
            }"#,
        )
        .unwrap();

        let settings = content.settings.unwrap();
        assert_eq!(settings.header_title.as_deref(), Some("Kiosk"));
        assert_eq!(settings.footer_note, None);
        assert!(content.visibility.unwrap().is_hidden(Section::Zdjecia));
    }

    #[test]
    fn content_tolerates_missing_parts() {
        let content: Content = serde_json::from_str("{}").unwrap();

        assert_eq!(content, Content::default());
    }
}
