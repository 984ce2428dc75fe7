pub mod app;
pub mod charts;
pub mod footer;
pub mod header;
pub mod inspirations;
pub mod page;
pub mod sidebar;
pub mod slideshow;
pub mod spinner;
