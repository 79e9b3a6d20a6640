pub mod controller;
pub mod render;

pub use crate::domain::model::{ControllerState, DoctorRecord, ElementIds, QueryEncoding};
pub use crate::domain::ports::{ConfigProvider, DoctorSource, QueryField, ResultsContainer};
pub use crate::utils::error::Result;
