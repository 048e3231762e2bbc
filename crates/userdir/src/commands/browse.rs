//! Interactive search loop over line-oriented input
//!
//! Every input line is one state transition; the view is rendered after
//! each. Lines starting with ':' are commands, anything else replaces the
//! search term.

use crate::cli::OutputFormat;
use crate::output::{render_json, render_text};
use anyhow::{Context, Result};
use colored::Colorize;
use directory_core::{Directory, FieldMapping, SortOrder, UserSource};
use std::io::{BufRead, Write};
use tracing::debug;

#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Search(&'a str),
    ToggleSort,
    Clear,
    Quit,
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        ":sort" | ":s" => Input::ToggleSort,
        ":clear" | ":c" => Input::Clear,
        ":quit" | ":q" => Input::Quit,
        _ => Input::Search(line),
    }
}

pub fn handle_browse<R: BufRead, W: Write>(
    source: &dyn UserSource,
    mapping: FieldMapping,
    sort: SortOrder,
    format: OutputFormat,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut directory = Directory::new(mapping).with_sort_order(sort);

    if format == OutputFormat::Text {
        writeln!(output, "{}", render_text(&directory))?;
    }
    directory.load(source);
    if let Some(err) = directory.error() {
        return Err(err.clone().into());
    }
    render(&directory, format, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_input(&line) {
            Input::Quit => break,
            Input::ToggleSort => {
                let order = directory.toggle_sort();
                debug!(%order, "sort toggled");
            }
            Input::Clear => directory.set_search(""),
            Input::Search(term) => directory.set_search(term),
        }
        render(&directory, format, &mut output)?;
    }

    Ok(())
}

fn render<W: Write>(directory: &Directory, format: OutputFormat, output: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => writeln!(output, "{}", render_json(directory, false)?)?,
        OutputFormat::Text => {
            writeln!(output, "{}", render_text(directory))?;
            write!(
                output,
                "\n{} ",
                "search (:sort, :clear, :quit)>".dimmed()
            )?;
        }
    }
    output.flush()?;
    Ok(())
}
