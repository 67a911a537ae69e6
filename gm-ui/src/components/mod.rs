//! Reusable Dioxus RSX components for the Ganga Mitra pages.

mod error_display;
mod fact_panel;
mod forecast_list;
mod loading_spinner;
mod location_card;
mod parameter_selector;
mod search_box;
mod section_header;
mod widget_container;

pub use error_display::ErrorDisplay;
pub use fact_panel::FactPanel;
pub use forecast_list::ForecastList;
pub use loading_spinner::LoadingSpinner;
pub use location_card::LocationCard;
pub use parameter_selector::ParameterSelector;
pub use search_box::SearchBox;
pub use section_header::SectionHeader;
pub use widget_container::WidgetContainer;
