use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sidemenu_tui::demo::DEFAULT_USER_NAME;
use sidemenu_tui::ui::theme;
use sidemenu_tui::{App, DemoOptions, build_demo, outline};
use sidemenu_util::{UserPreferences, default_log_path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Terminal demo of a side navigation menu.
#[derive(Debug, Parser)]
#[command(name = "sidemenu-demo", version, about)]
struct Cli {
    /// Theme to use (dracula, nord). Saved as the preferred theme.
    #[arg(long)]
    theme: Option<String>,
    /// Name shown in the user menu header.
    #[arg(long)]
    user: Option<String>,
    /// Path of the preferences file.
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the demo menu tree and user menu, then exit.
    Print,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    // The TUI owns the terminal, so its logs go to a file.
    init_tracing(cli.command.is_none())?;

    let preferences = load_preferences(cli.preferences.clone());
    let options = demo_options(cli.theme, cli.user, preferences);

    match cli.command {
        Some(Command::Print) => print_demo(&options),
        None => sidemenu_tui::run(options).await,
    }
}

fn init_tracing(log_to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !log_to_file {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return Ok(());
    }

    let path = default_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    info!(path = %path.display(), "logging to file");
    Ok(())
}

fn load_preferences(path: Option<PathBuf>) -> UserPreferences {
    match UserPreferences::new(path) {
        Ok(preferences) => preferences,
        Err(error) => {
            warn!(error = %error, "preferences unavailable; using in-memory defaults");
            UserPreferences::ephemeral()
        }
    }
}

/// Merges flags with stored preferences. An explicit theme is remembered for later runs.
fn demo_options(theme: Option<String>, user: Option<String>, preferences: UserPreferences) -> DemoOptions {
    if let Some(theme) = theme.as_ref()
        && preferences.preferred_theme().as_ref() != Some(theme)
        && let Err(error) = preferences.set_preferred_theme(Some(theme.clone()))
    {
        warn!(error = %error, "failed to persist theme preference");
    }
    DemoOptions {
        user_name: user
            .or_else(|| preferences.user_name())
            .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        show_logo: preferences.show_logo(),
        theme: theme.or_else(|| preferences.preferred_theme()),
        preferences: Some(Rc::new(preferences)),
    }
}

fn print_demo(options: &DemoOptions) -> Result<()> {
    let app = App::new(theme::load(options.theme.as_deref()));
    build_demo(&app, options)?;
    print!("{}", outline(&app.menu));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_print_subcommand() {
        let cli = Cli::try_parse_from(["sidemenu-demo", "--theme", "nord", "--user", "Ada", "print"]).expect("valid args");
        assert_eq!(cli.theme.as_deref(), Some("nord"));
        assert_eq!(cli.user.as_deref(), Some("Ada"));
        assert!(matches!(cli.command, Some(Command::Print)));
    }

    #[test]
    fn no_subcommand_runs_the_tui() {
        let cli = Cli::try_parse_from(["sidemenu-demo"]).expect("valid args");
        assert!(cli.command.is_none());
        assert!(cli.preferences.is_none());
    }

    #[test]
    fn explicit_theme_is_stored_in_preferences() {
        let options = demo_options(Some("nord".into()), None, UserPreferences::ephemeral());
        assert_eq!(options.theme.as_deref(), Some("nord"));
        assert_eq!(options.user_name, DEFAULT_USER_NAME);
        let preferences = options.preferences.expect("preferences kept");
        assert_eq!(preferences.preferred_theme().as_deref(), Some("nord"));

        let next_run = demo_options(None, Some("Ada".into()), UserPreferences::ephemeral());
        assert_eq!(next_run.theme, None);
        assert_eq!(next_run.user_name, "Ada");
    }
}
