pub mod error;
pub mod outcome;
pub mod status;
pub mod store;

pub use error::{ApiError, StoreError};
pub use outcome::Outcome;
pub use status::SyncStatus;
pub use store::{SOURCE_ID_KEY, SourceIdStore};
