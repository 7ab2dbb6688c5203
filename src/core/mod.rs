pub mod catalog;

pub use crate::domain::model::{PatternKind, Transcript};
pub use crate::domain::ports::{ConfigProvider, Demo};
pub use crate::utils::error::Result;
