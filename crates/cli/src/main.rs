use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use docsage_form::{
    view::summary_row, FileThemeStore, LookupController, LookupForm, Phase, ProxyClient, Theme,
    ThemeSetting, SUMMARY_HEADERS,
};

#[derive(Parser)]
#[command(name = "docsage")]
#[command(about = "Look up doctor registrations through the DocSage proxy")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a doctor by registration number
    Lookup {
        /// Registration number, e.g. 12345-A
        reg_no: String,
        /// Base URL of the lookup proxy
        #[arg(long, env = "DOCSAGE_PROXY_URL", default_value = "http://localhost:3000")]
        proxy_url: String,
        /// Also show the detail view for the first result
        #[arg(long)]
        details: bool,
    },
    /// Show or change the stored theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
        /// Directory holding theme.json (default: the user config directory)
        #[arg(long)]
        config_dir: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the current theme
    Show,
    /// Set the theme (light or dark)
    Set { theme: Theme },
    /// Switch between light and dark
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Lookup {
            reg_no,
            proxy_url,
            details,
        }) => {
            let controller = LookupController::new(ProxyClient::new(&proxy_url)?);
            controller.submit(reg_no).await;
            if details && controller.inspect(|f| f.phase()) == Phase::Results {
                controller.open_detail(0)?;
            }
            return Ok(controller.inspect(print_form));
        }
        Some(Commands::Theme { action, config_dir }) => {
            let dir = match config_dir {
                Some(dir) => dir,
                None => dirs::config_dir()
                    .ok_or_else(|| anyhow::anyhow!("no user config directory; pass --config-dir"))?
                    .join("docsage"),
            };
            let mut setting = ThemeSetting::load(FileThemeStore::in_dir(dir));

            match action.unwrap_or(ThemeAction::Show) {
                ThemeAction::Show => println!("{}", setting.current()),
                ThemeAction::Set { theme } => {
                    if setting.set(theme)? {
                        println!("Theme set to {}", theme);
                    } else {
                        println!("Theme already {}", theme);
                    }
                }
                ThemeAction::Toggle => println!("Theme set to {}", setting.toggle()?),
            }
        }
        None => {
            println!("Use 'docsage --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_form(form: &LookupForm) -> ExitCode {
    match render_form(form) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
    }
}

/// Results table, then the detail overlay if one is open. `Err` carries the form's error message.
fn render_form(form: &LookupForm) -> Result<Vec<String>, &str> {
    if let Some(message) = form.error_message() {
        return Err(message);
    }

    let rows: Vec<[&str; 4]> = form.summaries().map(summary_row).collect();
    let mut widths = SUMMARY_HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![format_row(&SUMMARY_HEADERS, &widths)];
    lines.extend(rows.iter().map(|row| format_row(row, &widths)));

    if let Some(view) = form.detail_view() {
        lines.push(String::new());
        lines.push("Doctor Details".to_owned());
        lines.extend(view.lines());
    }

    Ok(lines)
}

fn format_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join("  ").trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsage_core::{DoctorDetail, DoctorSummary};
    use docsage_form::ClientError;

    fn resolved(outcome: Result<DoctorDetail, ClientError>) -> LookupForm {
        let mut form = LookupForm::new();
        form.set_query("12345-A");
        let pending = form.submit();
        form.resolve(pending.ticket, outcome);
        form
    }

    fn jane() -> DoctorDetail {
        DoctorDetail::from(DoctorSummary {
            registration_no: "12345-A".into(),
            name: "Jane Doe".into(),
            father_name: "John Doe".into(),
            status: "Active".into(),
        })
    }

    #[test]
    fn table_columns_are_padded_to_widest_cell() {
        let form = resolved(Ok(jane()));

        let lines = render_form(&form).unwrap();

        assert_eq!(
            lines,
            vec![
                "Registration No  Name      Father Name  Status".to_owned(),
                "12345-A          Jane Doe  John Doe     Active".to_owned(),
            ]
        );
    }

    #[test]
    fn open_detail_is_appended_after_table() {
        let mut form = resolved(Ok(jane()));
        form.open_detail(0).unwrap();

        let lines = render_form(&form).unwrap();

        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "Doctor Details");
        assert_eq!(lines[4], "Registration No: 12345-A");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Qualifications: Not available")
        );
    }

    #[test]
    fn error_state_yields_message_and_failure() {
        let form = resolved(Err(ClientError::Rejected {
            status: 404,
            message: "Doctor not found".into(),
        }));

        assert_eq!(render_form(&form), Err("Doctor not found"));
        assert_eq!(print_form(&form), ExitCode::FAILURE);
    }
}
