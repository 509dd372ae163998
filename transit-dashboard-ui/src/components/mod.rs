//! Reusable Dioxus RSX components for the transit dashboard.

mod data_table;
mod error_display;
mod info_banner;
mod loading_spinner;
mod panel_container;
mod query_form;
mod tab_bar;
mod view_header;

pub use data_table::DataTable;
pub use error_display::ErrorDisplay;
pub use info_banner::InfoBanner;
pub use loading_spinner::LoadingSpinner;
pub use panel_container::PanelContainer;
pub use query_form::QueryForm;
pub use tab_bar::TabBar;
pub use view_header::ViewHeader;
