pub mod use_modals;
pub mod use_notifications;
pub mod use_parties;
pub mod use_theme;
