pub mod catalog;
pub mod engine;
pub mod form;
pub mod mutation;

pub use crate::domain::model::{
    FragranceOption, FragranceRecord, Notification, NotificationKind, OrderDraft, OrderSubmission,
};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, OrderGateway};
pub use crate::utils::error::Result;
