//! Command-line interface for factcheck.
//!
//! Provides commands for checking claims, running an interactive session,
//! inspecting extraction and evidence lookup, and showing configuration.

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::adapters::{EvidenceSource, FixtureSource};
use crate::config::{self, ResolvedConfig};
use crate::core::{extract, score, History, KeywordScorer, Orchestrator, Session, Submission};
use crate::domain::Claim;

pub mod render;

const NOTHING_TO_CHECK: &str = "Please enter a factual claim to verify.";
const PROGRESS_PREVIEW_CHARS: usize = 50;

/// factcheck - Demo fact-checker with simulated evidence lookup
#[derive(Parser, Debug)]
#[command(name = "factcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fact-check a piece of text
    Check {
        /// Text to check (reads --input, --example or stdin if omitted)
        text: Option<String>,

        /// Input file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Use one of the built-in example claims
        #[arg(short, long, value_enum, conflicts_with_all = ["text", "input"])]
        example: Option<QuickExample>,

        /// Print records as JSON instead of cards
        #[arg(long)]
        json: bool,

        /// Skip the presentation delay before each lookup
        #[arg(long, env = "FACTCHECK_NO_PACING")]
        no_pacing: bool,
    },

    /// Interactive session: one submission per line, history kept until exit
    Session {
        /// Skip the presentation delay before each lookup
        #[arg(long, env = "FACTCHECK_NO_PACING")]
        no_pacing: bool,
    },

    /// Show the claims extracted from text
    Extract {
        /// Text to scan (reads --input or stdin if omitted)
        text: Option<String>,

        /// Input file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,
    },

    /// Look up evidence for a query
    Search {
        /// Search query
        query: String,

        /// Maximum number of items to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Also show keyword signals and the resulting verdict
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in example claims
    Examples,

    /// Show resolved configuration (debug)
    Config,
}

/// Built-in demo claims
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum QuickExample {
    /// iPhone 15 titanium claim
    Iphone,

    /// 8 glasses of water claim
    Water,

    /// Great Wall visible from space claim
    GreatWall,
}

impl QuickExample {
    pub fn text(self) -> &'static str {
        match self {
            QuickExample::Iphone => "The iPhone 15 Pro has a titanium frame",
            QuickExample::Water => "You need to drink 8 glasses of water daily",
            QuickExample::GreatWall => "The Great Wall of China is visible from space",
        }
    }

    fn label(self) -> &'static str {
        match self {
            QuickExample::Iphone => "📱 iphone",
            QuickExample::Water => "💧 water",
            QuickExample::GreatWall => "🏰 great-wall",
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Check {
                text,
                input,
                example,
                json,
                no_pacing,
            } => {
                let text = match example {
                    Some(example) => example.text().to_string(),
                    None => read_input(text, input)?,
                };
                check_text(&text, json, no_pacing).await
            }
            Commands::Session { no_pacing } => run_session(no_pacing).await,
            Commands::Extract { text, input } => {
                let text = read_input(text, input)?;
                show_claims(&text)
            }
            Commands::Search {
                query,
                limit,
                verbose,
            } => search_evidence(&query, limit, verbose).await,
            Commands::Examples => {
                list_examples();
                Ok(())
            }
            Commands::Config => show_config(),
        }
    }
}

/// Resolve text from an argument, a file, or piped stdin
fn read_input(text: Option<String>, input_file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input_file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }

    if io::stdin().is_terminal() {
        anyhow::bail!("No input provided. Pass text, use --input <file> or pipe to stdin");
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read from stdin")?;
    Ok(buffer)
}

/// Build the orchestrator and an empty session from configuration
fn build(cfg: &ResolvedConfig, no_pacing: bool) -> (Orchestrator, Session) {
    let mut settings = cfg.check_settings();
    if no_pacing {
        settings.pacing = std::time::Duration::ZERO;
    }

    let orchestrator = Orchestrator::new(settings);
    let session = Session::new(History::new(cfg.max_records), cfg.limits.clone());
    (orchestrator, session)
}

/// One-shot check
async fn check_text(text: &str, json: bool, no_pacing: bool) -> Result<()> {
    let cfg = config::config()?;
    let (orchestrator, mut session) = build(cfg, no_pacing);

    let mut out = io::stdout();
    let mut err = io::stderr();

    let outcome = session
        .submit_with(&orchestrator, text, |claim| write_progress(&mut err, claim))
        .await?;

    write_check(
        &outcome,
        &session,
        cfg.display_window,
        json,
        &mut out,
        &mut err,
    )
}

/// Per-claim progress line, written before each lookup
fn write_progress(err: &mut impl Write, claim: &Claim) {
    writeln!(err, "🔍 Fact-checking: '{}'", claim.preview(PROGRESS_PREVIEW_CHARS)).ok();
}

/// Output of a one-shot check: JSON records, or cards plus the recent list
fn write_check(
    outcome: &Submission,
    session: &Session,
    display_window: usize,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    if json {
        if matches!(outcome, Submission::NothingToCheck) {
            writeln!(err, "⚠️  {}", NOTHING_TO_CHECK)?;
        }
        let records = serde_json::to_string_pretty(outcome.records())
            .context("Failed to serialize records")?;
        writeln!(out, "{}", records)?;
        return Ok(());
    }

    write_submission(outcome, out, err)?;
    if !session.history().is_empty() {
        writeln!(out)?;
        write!(
            out,
            "{}",
            render::recent_list(session.history().recent(display_window))
        )?;
    }
    Ok(())
}

/// Cards to `out`, the nothing-to-check notice to `err`
fn write_submission(
    outcome: &Submission,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()> {
    match outcome {
        Submission::NothingToCheck => writeln!(err, "⚠️  {}", NOTHING_TO_CHECK),
        Submission::Checked(records) => {
            writeln!(out, "📊 Fact-Check Results\n")?;
            for record in records {
                write!(out, "{}", render::card(record))?;
            }
            Ok(())
        }
    }
}

/// A line typed into the interactive session
#[derive(Debug, PartialEq, Eq)]
enum SessionCommand<'a> {
    Quit,
    History,
    Submit(&'a str),
}

impl<'a> SessionCommand<'a> {
    fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":quit" | ":q" => SessionCommand::Quit,
            ":history" => SessionCommand::History,
            _ => SessionCommand::Submit(line),
        }
    }
}

/// Interactive loop over stdin lines
async fn run_session(no_pacing: bool) -> Result<()> {
    let cfg = config::config()?;
    let (orchestrator, mut session) = build(cfg, no_pacing);

    eprintln!("🔍 FactCheck session. Enter a claim per line; :history to list, :quit to exit.");

    drive_session(
        BufReader::new(tokio::io::stdin()),
        &orchestrator,
        &mut session,
        cfg.display_window,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await
}

/// Dispatch session lines until `:quit` or end of input
async fn drive_session<R>(
    input: R,
    orchestrator: &Orchestrator,
    session: &mut Session,
    display_window: usize,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        write!(err, "> ")?;
        err.flush().ok();

        let Some(line) = lines.next_line().await.context("Failed to read from stdin")? else {
            break;
        };

        let text = match SessionCommand::parse(&line) {
            SessionCommand::Quit => break,
            SessionCommand::History => {
                if session.history().is_empty() {
                    writeln!(out, "No fact-checks yet")?;
                } else {
                    write!(out, "{}", render::recent_list(session.history().iter().rev()))?;
                }
                continue;
            }
            SessionCommand::Submit(text) => text,
        };

        // Errors end this submission only; the session keeps going
        let result = session
            .submit_with(orchestrator, text, |claim| write_progress(&mut *err, claim))
            .await;
        match result {
            Ok(outcome) => {
                write_submission(&outcome, out, err)?;
                if matches!(outcome, Submission::Checked(_)) {
                    writeln!(out)?;
                    write!(
                        out,
                        "{}",
                        render::recent_list(session.history().recent(display_window))
                    )?;
                }
            }
            Err(e) => writeln!(err, "❌ {:#}", e)?,
        }
    }

    writeln!(
        err,
        "Session ended: {} fact-check(s) this session",
        session.history().len() as u64 + session.history().evicted()
    )?;
    Ok(())
}

/// Print extracted claims, one per line
fn show_claims(text: &str) -> Result<()> {
    let claims = extract(text);

    if claims.is_empty() {
        eprintln!("{}", NOTHING_TO_CHECK);
        return Ok(());
    }

    for claim in claims {
        println!("{}", claim);
    }
    Ok(())
}

/// Print evidence for a query
async fn search_evidence(query: &str, limit: Option<usize>, verbose: bool) -> Result<()> {
    let cfg = config::config()?;
    let source: Arc<dyn EvidenceSource> = Arc::new(FixtureSource::new());

    let items = source
        .search(query, limit.unwrap_or(cfg.search_limit))
        .await
        .with_context(|| format!("Search failed for '{}'", query))?;

    print!("{}", render::evidence_list(&items));

    if verbose {
        let signals = KeywordScorer::signals(&items);
        let assessment = score(&Claim::new(query), &items);
        println!();
        println!(
            "Signals: positive={} negative={}",
            signals.positive, signals.negative
        );
        println!(
            "Verdict: {} ({:.0}% confidence, {})",
            assessment.verdict,
            assessment.confidence * 100.0,
            assessment.category
        );
    }

    Ok(())
}

fn list_examples() {
    println!("Quick examples (use with `factcheck check --example <name>`):");
    for example in [QuickExample::Iphone, QuickExample::Water, QuickExample::GreatWall] {
        println!("  {:<16} {}", example.label(), example.text());
    }
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("  FactCheck Configuration");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Pipeline:");
    println!("  Pacing:         {}ms", cfg.pacing_ms);
    println!("  Search limit:   {}", cfg.search_limit);
    println!("  Evidence topics:");
    for topic in FixtureSource::topics() {
        println!("    - {}", topic);
    }
    println!();
    println!("History:");
    if cfg.max_records == 0 {
        println!("  Retention:      unbounded");
    } else {
        println!("  Retention:      {} records", cfg.max_records);
    }
    println!("  Display window: {}", cfg.display_window);
    println!();
    println!("Limits:");
    println!("  Max input size: {} bytes", cfg.limits.max_input_bytes);

    Ok(())
}
