// lib.rs - Travel food browser core

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod filter;
pub mod geography;
pub mod model;
pub mod paginate;
pub mod record;
pub mod view;

#[cfg(test)]
mod fixtures;

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::{BrowserConfig, ValidatedUrl};
pub use controller::{
    Catalog, Controller, IgnoredIntent, LoadStatus, Outcome, PageState, ViewMode,
};
pub use crux_core::{render::Render, App as CruxApp};
pub use error::{ConfigError, LoadError};
pub use event::Event;
pub use filter::FilterSelection;
pub use geography::GeographyIndex;
pub use model::Model;
pub use paginate::{paginate, Paged};
pub use record::Record;
pub use view::{
    BrowseView, CardItem, FilterMenu, ListItem, MenuOption, PageContent, PageItem,
    PaginationView, TableRow, UserFacingError, ViewModel, ViewState,
};

pub const DEFAULT_ENDPOINT: &str =
    "https://data.coa.gov.tw/Service/OpenData/ODwsv/ODwsvTravelFood.aspx";
pub const PAGE_SIZE: usize = 10;
pub const DESCRIPTION_PREVIEW_LENGTH: usize = 100;
pub const REGION_PLACEHOLDER: &str = "請選擇行政區域";
pub const SUB_REGION_PLACEHOLDER: &str = "請選擇鄉鎮區";
