pub mod api;
pub mod customer_filter;
pub mod date_utils;
pub mod export;
pub mod forms;
pub mod logging;
pub mod theme;
