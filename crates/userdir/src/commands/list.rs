use crate::cli::OutputFormat;
use crate::output::output_directory;
use anyhow::Result;
use directory_core::{Directory, FieldMapping, SortOrder, UserSource};

pub fn handle_list(
    source: &dyn UserSource,
    mapping: FieldMapping,
    search: Option<&str>,
    sort: SortOrder,
    format: OutputFormat,
) -> Result<()> {
    let mut directory = Directory::new(mapping).with_sort_order(sort);
    if let Some(term) = search {
        directory.set_search(term);
    }

    directory.load(source);
    if let Some(err) = directory.error() {
        return Err(err.clone().into());
    }

    output_directory(&directory, format)?;
    Ok(())
}
