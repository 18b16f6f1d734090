//! CLI utility to run one credibility analysis without the UI.

use std::io::Read;
use std::sync::Arc;
use std::time::Duration;
use truthlens::analysis::{AnalysisRecord, MockAnalysisEngine};
use truthlens::config::{self, AppSettings};
use truthlens::egui_app::controller::AnalyzerController;
use truthlens::egui_app::view_model::{self, SourcesView};
use truthlens::logging;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let Some(options) = parse_args(std::env::args().skip(1).collect())? else {
        return Ok(());
    };
    if let Err(err) = logging::init_stderr() {
        eprintln!("Logging disabled: {err}");
    }
    let text = match options.text {
        Some(text) => text,
        None => read_stdin()?,
    };

    let mut settings = config::load_or_default().unwrap_or_else(|err| {
        tracing::warn!("Using default settings: {err}");
        AppSettings::default()
    });
    if let Some(delay_ms) = options.delay_ms {
        settings.analysis.simulated_delay_ms = delay_ms;
        settings = settings.normalized();
    }
    let delay = settings.analysis.simulated_delay();
    let engine = match options.seed {
        Some(seed) => MockAnalysisEngine::with_seed(delay, seed),
        None => MockAnalysisEngine::new(delay),
    };

    let mut controller = AnalyzerController::new(Arc::new(engine), &settings);
    controller.set_text(text);
    controller
        .try_trigger()
        .map_err(|err| format!("Cannot analyze: {err}"))?;
    while controller.in_progress() {
        std::thread::sleep(POLL_INTERVAL);
        controller.poll_background_jobs();
    }
    if let Some(error) = controller.last_error() {
        return Err(format!("Analysis failed: {error}"));
    }
    let record = controller
        .current_result()
        .ok_or_else(|| "Analysis produced no result".to_string())?;

    match options.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(record.as_ref())
                .map_err(|err| format!("Failed to serialize result: {err}"))?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", text_report(record)),
    }
    Ok(())
}

fn read_stdin() -> Result<String, String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    Ok(text)
}

fn text_report(record: &AnalysisRecord) -> String {
    let view = view_model::analysis_view(record);
    let mut out = format!(
        "{} ({} credibility, {})\n\n{}\n",
        view.status_label, view.band, view.score_label, view.explanation
    );
    if !view.red_flags.is_empty() {
        out.push_str("\nWarning signs:\n");
        for flag in &view.red_flags {
            out.push_str(&format!("  - {flag}\n"));
        }
    }
    out.push_str("\nSources:\n");
    match &view.sources {
        SourcesView::Listed(sources) => {
            for source in sources {
                out.push_str(&format!("  - {source}\n"));
            }
        }
        SourcesView::NoneFound => {
            out.push_str(&format!("  {}\n", view_model::NO_SOURCES_TEXT));
        }
    }
    out.push_str(&format!(
        "\nTip: {}\n  {}\n  Pattern: {}\n",
        view.tip.title, view.tip.description, view.tip.pattern
    ));
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Default)]
struct Options {
    text: Option<String>,
    format: OutputFormat,
    delay_ms: Option<u64>,
    seed: Option<u64>,
}

fn parse_args(args: Vec<String>) -> Result<Option<Options>, String> {
    let mut options = Options::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                return Ok(None);
            }
            "--text" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--text requires a value".to_string())?;
                options.text = Some(value.to_string());
            }
            "--format" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--format requires a value".to_string())?;
                options.format = match value.as_str() {
                    "json" => OutputFormat::Json,
                    "text" => OutputFormat::Text,
                    other => return Err(format!("Unknown format: {other} (expected json or text)")),
                };
            }
            "--delay-ms" => {
                idx += 1;
                let value =
                    args.get(idx).ok_or_else(|| "--delay-ms requires a value".to_string())?;
                options.delay_ms = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid --delay-ms value: {value}"))?,
                );
            }
            "--seed" => {
                idx += 1;
                let value = args.get(idx).ok_or_else(|| "--seed requires a value".to_string())?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("Invalid --seed value: {value}"))?,
                );
            }
            unknown => {
                return Err(format!("Unknown argument: {unknown}\n\n{}", help_text()));
            }
        }
        idx += 1;
    }
    Ok(Some(options))
}

fn help_text() -> String {
    [
        "truthlens-analyze",
        "",
        "Run one credibility analysis and print the result.",
        "",
        "Usage:",
        "  truthlens-analyze [--text <content>] [--format json|text] [--delay-ms <n>] [--seed <n>]",
        "",
        "Options:",
        "  --text <content>   Content to analyze (default: read stdin).",
        "  --format <fmt>     Output as pretty JSON (default) or a text report.",
        "  --delay-ms <n>     Override the simulated analysis delay.",
        "  --seed <n>         Seed the record selection for repeatable output.",
        "  -h, --help         Show this help.",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use truthlens::analysis::canonical_records;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_all_options() {
        let options = parse_args(args(&[
            "--text", "hello", "--format", "text", "--delay-ms", "0", "--seed", "7",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(options.text.as_deref(), Some("hello"));
        assert_eq!(options.format, OutputFormat::Text);
        assert_eq!(options.delay_ms, Some(0));
        assert_eq!(options.seed, Some(7));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_args(args(&["--format", "xml"])).is_err());
        assert!(parse_args(args(&["--seed", "abc"])).is_err());
        assert!(parse_args(args(&["--text"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }

    #[test]
    fn text_report_notes_missing_sources() {
        let mut record = (*canonical_records()[0]).clone();
        record.sources.clear();
        let report = text_report(&record);
        assert!(report.contains(view_model::NO_SOURCES_TEXT));
        assert!(report.starts_with("Verified Content (high credibility, 85/100)"));
    }
}
