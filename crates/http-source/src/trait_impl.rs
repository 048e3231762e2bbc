//! Implementation of directory-core traits for HttpUserSource

use directory_core::{DirectoryError, RawUserRecord, Result, UserSource};

use crate::client::HttpUserSource;

impl UserSource for HttpUserSource {
    fn fetch_users(&self) -> Result<Vec<RawUserRecord>> {
        self.get_users().map_err(DirectoryError::from)
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}
