use crate::error::Result;
use crate::models::RawUserRecord;

/// A place users can be loaded from
///
/// Implementations perform exactly one read per call and hand back the raw
/// records untouched. Normalization happens in [`crate::Directory`], so a
/// source never needs to know the field mapping.
pub trait UserSource {
    /// Fetch the raw user records
    fn fetch_users(&self) -> Result<Vec<RawUserRecord>>;

    /// Human-readable location of the source, used in log events
    fn describe(&self) -> String {
        String::from("user source")
    }
}
