use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use colored::Colorize;
use directory_core::{Directory, SortOrder, User, ViewState};
use serde::Serialize;

/// Print the directory in the requested format
pub fn output_directory(directory: &Directory, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = render_json(directory, true).context("Failed to serialize users")?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}", render_text(directory));
        }
    }
    Ok(())
}

/// Serialize the displayed list; compact output is one line per view
pub fn render_json(directory: &Directory, pretty: bool) -> serde_json::Result<String> {
    let view = DirectoryJson::from(directory);
    if pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    }
}

/// Machine-readable view of the displayed list
#[derive(Serialize)]
pub struct DirectoryJson<'a> {
    pub total: usize,
    pub shown: usize,
    pub sort: SortOrder,
    pub search: &'a str,
    pub users: &'a [User],
}

impl<'a> From<&'a Directory> for DirectoryJson<'a> {
    fn from(directory: &'a Directory) -> Self {
        Self {
            total: directory.users().len(),
            shown: directory.displayed().len(),
            sort: directory.sort_order(),
            search: directory.search(),
            users: directory.displayed(),
        }
    }
}

/// Render the whole view for a terminal
pub fn render_text(directory: &Directory) -> String {
    match directory.state() {
        ViewState::Loading => "Loading users...".dimmed().to_string(),
        ViewState::Failed(err) => format!("{}: {}", "Error".red().bold(), err),
        ViewState::Ready => {
            let mut output = format!("{}\n", "User Directory".white().bold());
            if !directory.search().is_empty() {
                output.push_str(&format!(
                    "  {}: {}\n",
                    "Search".dimmed(),
                    directory.search().cyan()
                ));
            }
            output.push_str(&format!(
                "  {}: {}\n",
                "Sort".dimmed(),
                directory.sort_order().label()
            ));
            output.push_str(
                &format!(
                    "Showing {} of {} users",
                    directory.displayed().len(),
                    directory.users().len()
                )
                .dimmed()
                .to_string(),
            );

            if directory.displayed().is_empty() {
                output.push_str(&format!("\n\n{}", "No users found.".yellow()));
            }
            for user in directory.displayed() {
                output.push_str("\n\n");
                output.push_str(&user.display());
            }
            output
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

/// Stable code for JSON error output
fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<directory_core::DirectoryError>() {
        Some(directory_core::DirectoryError::Status { .. }) => "http_status",
        Some(directory_core::DirectoryError::Transport(_)) => "transport",
        Some(directory_core::DirectoryError::Parse(_)) => "parse",
        None => "error",
    }
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for User {
    fn display(&self) -> String {
        let badge = format!("[{}]", self.initial().unwrap_or_else(|| "?".to_string()));
        let mut output = format!("{} {}", badge.blue().bold(), self.name.white().bold());
        if !self.username.is_empty() {
            output.push_str(&format!(" {}", format!("@{}", self.username).dimmed()));
        }

        for (label, value) in [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("City", &self.address.city),
            ("Company", &self.company.name),
        ] {
            output.push_str(&format!("\n  {}: {}", label.dimmed(), value));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::{DirectoryError, FieldMapping, RawUserRecord, UserSource};
    use serde_json::json;

    struct Canned(directory_core::Result<Vec<RawUserRecord>>);

    impl UserSource for Canned {
        fn fetch_users(&self) -> directory_core::Result<Vec<RawUserRecord>> {
            self.0.clone()
        }
    }

    fn loaded() -> Directory {
        let mut directory = Directory::new(FieldMapping::default());
        directory.load(&Canned(Ok(vec![
            json!({"id": 1, "name": "Bob", "email": "x@x.com", "username": "b2"}),
            json!({"id": 2, "name": "Ann", "email": "y@y.com", "username": "a"}),
        ])));
        directory
    }

    #[test]
    fn test_card_lists_every_field() {
        let directory = loaded();
        let card = directory.displayed()[0].display();

        assert!(card.contains("[A]"));
        assert!(card.contains("Ann"));
        assert!(card.contains("@a"));
        assert!(card.contains("y@y.com"));
        assert!(card.contains("Unknown"));
        assert!(card.contains("N/A"));
    }

    #[test]
    fn test_text_view_header_and_cards() {
        let mut directory = loaded();
        directory.set_search("bob");

        let text = render_text(&directory);

        assert!(text.contains("Showing 1 of 2 users"));
        assert!(text.contains("Bob"));
        assert!(!text.contains("y@y.com"));
    }

    #[test]
    fn test_text_view_no_results() {
        let mut directory = loaded();
        directory.set_search("nobody");

        assert!(render_text(&directory).contains("No users found."));
    }

    #[test]
    fn test_text_view_before_first_load() {
        let directory = Directory::new(FieldMapping::default());

        let text = render_text(&directory);

        assert!(text.contains("Loading users..."));
        assert!(!text.contains("No users found."));
    }

    #[test]
    fn test_output_directory_reports_success() {
        let directory = loaded();

        assert!(output_directory(&directory, OutputFormat::Json).is_ok());
        assert!(output_directory(&directory, OutputFormat::Text).is_ok());
    }

    #[test]
    fn test_text_view_error() {
        let mut directory = Directory::default();
        directory.load(&Canned(Err(DirectoryError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        })));

        let text = render_text(&directory);

        assert!(text.contains("Failed to fetch users (HTTP 500)"));
        assert!(!text.contains("Showing"));
    }

    #[test]
    fn test_json_view_counts_and_order() {
        let mut directory = loaded();
        directory.toggle_sort();

        let value = serde_json::to_value(DirectoryJson::from(&directory)).unwrap();

        assert_eq!(value["total"], 2);
        assert_eq!(value["shown"], 2);
        assert_eq!(value["sort"], "desc");
        assert_eq!(value["search"], "");
        assert_eq!(value["users"][0]["name"], "Bob");
        assert_eq!(value["users"][1]["address"]["city"], "Unknown");
    }

    #[test]
    fn test_error_codes() {
        let status = anyhow::Error::new(DirectoryError::Status {
            status: 500,
            message: String::new(),
        });
        assert_eq!(error_code(&status), "http_status");

        let wrapped = anyhow::Error::new(DirectoryError::Parse("bad".to_string()))
            .context("while loading");
        assert_eq!(error_code(&wrapped), "parse");

        assert_eq!(error_code(&anyhow::anyhow!("plain")), "error");
    }
}
