pub mod directory;
pub mod error;
pub mod mapping;
pub mod models;
pub mod traits;
pub mod view;

pub use directory::{Directory, ViewState};
pub use error::{DirectoryError, Result};
pub use mapping::{FieldMapping, FieldRule, IdRule};
pub use models::*;
pub use traits::UserSource;
pub use view::{filter_and_sort, SortOrder};
