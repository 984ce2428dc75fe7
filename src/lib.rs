pub mod config;
pub mod event;
pub mod http;
pub mod kiosk;
pub mod ui;
pub mod util;
