use std::{path::PathBuf, time::Duration};

use directories::ProjectDirs;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq)]
pub struct KioskConfig {
    pub api_url: String,
    pub rotation_interval: Duration,
    pub slide_interval: Duration,
    pub fade_delay: Duration,
    pub refresh_interval: Duration,
    pub data_dir: PathBuf,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            rotation_interval: Duration::from_secs(30),
            slide_interval: Duration::from_secs(5),
            fade_delay: Duration::from_millis(400),
            refresh_interval: Duration::from_secs(5 * 60),
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredValue {
    pub key: &'static str,
    pub value: String,
}

impl IgnoredValue {
    pub fn log(&self) {
        warn!(key = self.key, value = self.value.as_str(), "config_value_ignored");
    }
}

impl KioskConfig {
    pub fn from_env() -> (Self, Vec<IgnoredValue>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<IgnoredValue>) {
        let defaults = Self::default();
        let mut ignored = Vec::new();

        let api_url = lookup("KIOSK_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let data_dir = lookup("KIOSK_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let mut duration = |key: &'static str, unit: fn(u64) -> Duration, default: Duration| {
            let Some(raw) = lookup(key) else {
                return default;
            };
            match raw.trim().parse::<u64>() {
                Ok(value) if value > 0 => unit(value),
                _ => {
                    ignored.push(IgnoredValue { key, value: raw });
                    default
                }
            }
        };

        let config = Self {
            api_url,
            rotation_interval: duration(
                "KIOSK_ROTATION_SECS",
                Duration::from_secs,
                defaults.rotation_interval,
            ),
            slide_interval: duration(
                "KIOSK_SLIDE_SECS",
                Duration::from_secs,
                defaults.slide_interval,
            ),
            fade_delay: duration("KIOSK_FADE_MS", Duration::from_millis, defaults.fade_delay),
            refresh_interval: duration(
                "KIOSK_REFRESH_SECS",
                Duration::from_secs,
                defaults.refresh_interval,
            ),
            data_dir,
        };
        (config, ignored)
    }
}

pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("pl", "firma", "kiosk")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".kiosk"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> KioskConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        KioskConfig::from_lookup(|key| vars.get(key).cloned()).0
    }

    #[test]
    fn unset_environment_uses_kiosk_defaults() {
        let config = config_from(&[]);

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.rotation_interval, Duration::from_secs(30));
        assert_eq!(config.slide_interval, Duration::from_secs(5));
        assert_eq!(config.fade_delay, Duration::from_millis(400));
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("KIOSK_API_URL", "http://kiosk.local:8080/"),
            ("KIOSK_ROTATION_SECS", "45"),
            ("KIOSK_FADE_MS", "250"),
            ("KIOSK_DATA_DIR", "/var/lib/kiosk"),
        ]);

        assert_eq!(config.api_url, "http://kiosk.local:8080");
        assert_eq!(config.rotation_interval, Duration::from_secs(45));
        assert_eq!(config.fade_delay, Duration::from_millis(250));
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/kiosk"));
    }

    #[test]
    fn invalid_and_zero_values_fall_back() {
        let config = config_from(&[
            ("KIOSK_ROTATION_SECS", "soon"),
            ("KIOSK_SLIDE_SECS", "0"),
            ("KIOSK_API_URL", "  "),
        ]);

        assert_eq!(config.rotation_interval, Duration::from_secs(30));
        assert_eq!(config.slide_interval, Duration::from_secs(5));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn rejected_values_are_reported() {
        let (_, ignored) = KioskConfig::from_lookup(|key| match key {
            "KIOSK_ROTATION_SECS" => Some("soon".to_string()),
            "KIOSK_FADE_MS" => Some("0".to_string()),
            "KIOSK_SLIDE_SECS" => Some("8".to_string()),
            _ => None,
        });

        assert_eq!(
            ignored,
            vec![
                IgnoredValue {
                    key: "KIOSK_ROTATION_SECS",
                    value: "soon".to_string(),
                },
                IgnoredValue {
                    key: "KIOSK_FADE_MS",
                    value: "0".to_string(),
                },
            ]
        );
    }
}
