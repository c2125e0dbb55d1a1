//! UI layer: app shell, reveal animation, and string tables.

pub mod app;
pub mod i18n;
pub mod reveal;

pub use app::AssistantApp;
