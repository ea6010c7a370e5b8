use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use html_escape::encode_double_quoted_attribute;
use recap_config::Config;
use recap_engine::{Block, io, parse_with_sections, to_html, to_plain_text};
use serde::Serialize;
use std::{
    io::{Read, Write, stdin, stdout},
    path::{Path, PathBuf},
};

/// Path argument meaning "read the report from stdin".
const STDIN_PATH: &str = "-";

/// Name a stdin report is labelled with in multi-report output.
const STDIN_NAME: &str = "<stdin>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Terminal text with `#` headings and bullet glyphs
    Text,
    /// HTML fragment
    Html,
    /// JSON array of `{ "path", "blocks" }`, one entry per report
    Json,
}

/// Renders LLM-written meeting reports as structured blocks
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Report files or folders to render; `-` reads stdin.
    /// Falls back to `reports_path` from the config file.
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Stdin,
    File(PathBuf),
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let inputs = collect_inputs(&args.paths, &config)?;

    let mut out = stdout().lock();
    run(&inputs, args.format, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file '{}' does not exist", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "no config at {}, using built-in list sections",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn collect_inputs(paths: &[PathBuf], config: &Config) -> Result<Vec<Input>> {
    let paths: Vec<PathBuf> = if paths.is_empty() {
        match &config.reports_path {
            Some(reports_path) => vec![reports_path.clone()],
            None => bail!(
                "no report paths given and no reports_path in {}",
                Config::config_path().display()
            ),
        }
    } else {
        paths.to_vec()
    };

    let mut inputs = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            inputs.push(Input::Stdin);
        } else if path.is_dir() {
            let reports = io::scan_reports(&path)
                .with_context(|| format!("failed to scan '{}'", path.display()))?;
            inputs.extend(reports.into_iter().map(Input::File));
        } else {
            inputs.push(Input::File(path));
        }
    }
    Ok(inputs)
}

/// One parsed report, tagged with where it came from.
#[derive(Debug, Serialize)]
struct Report {
    path: String,
    blocks: Vec<Block>,
}

fn run(inputs: &[Input], format: Format, config: &Config, out: &mut impl Write) -> Result<()> {
    let reports = read_reports(inputs, config)?;
    write_reports(&reports, format, out)
}

fn read_reports(inputs: &[Input], config: &Config) -> Result<Vec<Report>> {
    let sections = config.list_sections();
    let mut reports = Vec::with_capacity(inputs.len());

    for input in inputs {
        let (path, source) = match input {
            Input::Stdin => {
                let mut source = String::new();
                stdin().read_to_string(&mut source)?;
                (STDIN_NAME.to_string(), source)
            }
            Input::File(path) => {
                let source = io::read_report(path)
                    .with_context(|| format!("failed to read '{}'", path.display()))?;
                (path.display().to_string(), source)
            }
        };

        let blocks = parse_with_sections(&source, &sections);
        log::info!("{path}: {} blocks", blocks.len());
        reports.push(Report { path, blocks });
    }
    Ok(reports)
}

/// Writes every report as one document in `format`.
///
/// JSON is always a single array of `{ "path", "blocks" }` objects. Text and
/// HTML label each report only when there is more than one.
fn write_reports(reports: &[Report], format: Format, out: &mut impl Write) -> Result<()> {
    let labelled = reports.len() > 1;
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(reports)?)?,
        Format::Text => {
            for report in reports {
                if labelled {
                    writeln!(out, "==> {} <==", report.path)?;
                }
                writeln!(out, "{}", to_plain_text(&report.blocks).join("\n"))?;
            }
        }
        Format::Html => {
            for report in reports {
                let html = to_html(&report.blocks);
                if labelled {
                    writeln!(
                        out,
                        "<article data-source=\"{}\">\n{html}\n</article>",
                        encode_double_quoted_attribute(&report.path)
                    )?;
                } else {
                    writeln!(out, "{html}")?;
                }
            }
        }
    }
    Ok(())
}
