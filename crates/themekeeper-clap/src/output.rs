//! Report rendering for the terminal, plain text and JSON.

use anyhow::Result;
use console::{style, Term};

use crate::app::{Report, Source};
use crate::cli::OutputMode;

/// Resolves `Auto` against whether stdout is a terminal.
pub fn resolve(mode: OutputMode) -> OutputMode {
    match mode {
        OutputMode::Auto if Term::stdout().features().is_attended() => OutputMode::Term,
        OutputMode::Auto => OutputMode::Text,
        other => other,
    }
}

/// Renders one report as a single line (or one JSON object).
pub fn render(report: &Report, mode: OutputMode) -> Result<String> {
    let line = match resolve(mode) {
        OutputMode::Json => serde_json::to_string(report)?,
        OutputMode::Term => {
            let theme = if report.theme.is_dark() {
                style(report.theme).magenta().bold()
            } else {
                style(report.theme).yellow().bold()
            };
            format!(
                "{} {} {}",
                theme,
                style(source_label(report)).dim(),
                style(format!("icon={}", report.icon)).cyan()
            )
        }
        _ => format!("{} {} icon={}", report.theme, source_label(report), report.icon),
    };
    Ok(line)
}

fn source_label(report: &Report) -> String {
    match report.source {
        Source::Preference => format!("(saved in {})", report.store.display()),
        Source::System => format!("(following system: {})", report.system),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use themekeeper::Theme;

    fn report(source: Source) -> Report {
        Report {
            theme: Theme::Dark,
            source,
            system: Theme::Light,
            icon: "ti-moon".to_string(),
            store: PathBuf::from("prefs.json"),
        }
    }

    #[test]
    fn test_render_text() {
        let line = render(&report(Source::System), OutputMode::Text).unwrap();
        assert_eq!(line, "dark (following system: light) icon=ti-moon");

        let line = render(&report(Source::Preference), OutputMode::Text).unwrap();
        assert_eq!(line, "dark (saved in prefs.json) icon=ti-moon");
    }

    #[test]
    fn test_render_json() {
        let line = render(&report(Source::Preference), OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["source"], "preference");
        assert_eq!(value["system"], "light");
        assert_eq!(value["icon"], "ti-moon");
    }

    #[test]
    fn test_render_term_contains_fields() {
        let line = render(&report(Source::System), OutputMode::Term).unwrap();
        assert!(console::strip_ansi_codes(&line).contains("dark"));
        assert!(console::strip_ansi_codes(&line).contains("icon=ti-moon"));
    }

    #[test]
    fn test_resolve_explicit_modes_unchanged() {
        assert_eq!(resolve(OutputMode::Json), OutputMode::Json);
        assert_eq!(resolve(OutputMode::Text), OutputMode::Text);
        assert_eq!(resolve(OutputMode::Term), OutputMode::Term);
    }
}
