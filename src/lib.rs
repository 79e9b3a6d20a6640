pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    dom::{ContainerElement, Document, InputElement},
    http::HttpDoctorSource,
    storage::FileContainer,
};
pub use config::toml_config::TomlConfig;
pub use core::{controller::SearchController, render::render_records};
pub use domain::model::{DoctorRecord, ElementIds, QueryEncoding};
pub use utils::error::{Result, SearchError};
