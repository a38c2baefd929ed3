pub mod dashboard;
pub mod debt_modal;
pub mod details_modal;
pub mod export_button;
pub mod filter_bar;
pub mod header;
pub mod modal;
pub mod notification_stack;
pub mod party_modal;
pub mod party_table;
pub mod party_tabs;
pub mod quick_add_modal;
pub mod stats_strip;
