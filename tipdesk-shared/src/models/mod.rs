pub mod auth;
pub mod errors;
pub mod pagination;
pub mod property;
pub mod settings;
pub mod timestamp;
pub mod transaction;

pub use auth::{LoginRequest, LoginResponse};
pub use errors::ErrorResponse;
pub use pagination::{Envelope, Pagination};
pub use property::{Container, TechUser};
pub use settings::AutoAssignSetting;
pub use timestamp::Timestamp;
pub use transaction::{Transaction, TransactionDetail};
