mod api_client;
mod clipboard;
mod dashboard;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::HttpGenerationApi;
use crate::clipboard::{Clipboard, CopyError, SystemClipboard};
use crate::dashboard::{Dashboard, Output};

#[derive(Parser)]
#[command(name = "jobdesc-cli")]
#[command(about = "Generate job descriptions through the jobdesc API")]
#[command(version)]
struct Cli {
    #[arg(long, env = "JOBDESC_SERVER_URL", default_value = "http://localhost:8080")]
    server_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one description from flags and print it
    Generate {
        #[command(flatten)]
        fields: FieldArgs,

        /// Copy the result to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Fill in the form field by field
    Interactive,
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    job_title: String,

    #[arg(long, default_value = "")]
    industry: String,

    #[arg(long, default_value = "")]
    keywords: String,

    /// casual, friendly, professional or formal
    #[arg(long, default_value = "")]
    tone: String,

    /// Target word count (default 200)
    #[arg(long, default_value = "")]
    words: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let api = HttpGenerationApi::new(&cli.server_url);

    match cli.command {
        Commands::Generate { fields, copy } => run_generate(&api, fields, copy).await,
        Commands::Interactive => run_interactive(&api).await,
    }
}

async fn run_generate(api: &HttpGenerationApi, fields: FieldArgs, copy: bool) -> Result<()> {
    let mut dashboard = Dashboard::new();
    dashboard.set_job_title(fields.job_title);
    dashboard.set_industry(fields.industry);
    dashboard.set_key_words(fields.keywords);
    dashboard.set_tone(fields.tone);
    dashboard.set_num_words(fields.words);

    eprintln!("{}", dashboard.submit_label());
    dashboard.submit(api).await?;
    println!("{}", dashboard.output().text());

    if copy {
        let mut clipboard = SystemClipboard::new()?;
        dashboard.copy(&mut clipboard)?;
        eprintln!("{}", dashboard.copy_label());
    }
    Ok(())
}

async fn run_interactive(api: &HttpGenerationApi) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut dashboard = Dashboard::new();
    // Opened on first copy so a missing display only matters if the user copies.
    let mut clipboard: Option<SystemClipboard> = None;

    fill_form(&mut dashboard, &mut input)?;
    let mut pending = true;

    loop {
        if pending && dashboard.can_submit() {
            eprintln!("{}", dashboard.submit_label());
            // A failure is rendered from the dashboard's output below.
            let _ = dashboard.submit(api).await;
        }
        pending = false;
        render_output(&dashboard);

        let choice = prompt_choice(
            &mut input,
            &format!(
                "[c] {}  [e] edit  [r] regenerate  [n] new form  [q] quit",
                dashboard.copy_label()
            ),
        )?;

        match choice.as_str() {
            "c" => match copy_output(&mut dashboard, &mut clipboard) {
                Ok(()) => eprintln!("{}", dashboard.copy_label()),
                Err(e) => eprintln!("Copy failed: {e}"),
            },
            "e" => {
                let edited = read_block(&mut input)?;
                if !dashboard.edit_output(edited) {
                    eprintln!("Nothing to edit yet");
                }
            }
            "r" => pending = true,
            "n" => {
                fill_form(&mut dashboard, &mut input)?;
                pending = true;
            }
            "q" => return Ok(()),
            other => eprintln!("Unknown choice '{other}'"),
        }
    }
}

fn fill_form(dashboard: &mut Dashboard, input: &mut impl BufRead) -> Result<()> {
    loop {
        dashboard.set_job_title(prompt_line(input, "Job Title")?);
        if dashboard.can_submit() {
            break;
        }
        eprintln!("A job title is required");
    }
    dashboard.set_industry(prompt_line(input, "Industry (Optional)")?);
    dashboard.set_key_words(prompt_line(input, "Keywords for AI (Optional)")?);
    dashboard.set_tone(prompt_line(
        input,
        "Tone: casual, friendly, professional, formal (Optional)",
    )?);
    dashboard.set_num_words(prompt_line(
        input,
        "Number Of Words - Default 200 (Optional)",
    )?);
    Ok(())
}

fn copy_output(
    dashboard: &mut Dashboard,
    clipboard: &mut Option<SystemClipboard>,
) -> Result<(), CopyError> {
    if clipboard.is_none() {
        *clipboard = Some(SystemClipboard::new()?);
    }
    match clipboard.as_mut() {
        Some(c) => dashboard.copy(c as &mut dyn Clipboard),
        None => Err(CopyError::Unavailable("clipboard not initialized".to_string())),
    }
}

fn render_output(dashboard: &Dashboard) {
    match dashboard.output() {
        Output::Empty => eprintln!("(no job description yet)"),
        Output::Failed(reason) => eprintln!("Generation failed: {reason}"),
        Output::Ready(text) => println!("\n{text}\n"),
    }
}

fn prompt_line(input: &mut impl BufRead, label: &str) -> Result<String> {
    eprint!("{label}: ");
    io::stderr().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
        anyhow::bail!("stdin closed");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks again until the answer is not blank.
fn prompt_choice(input: &mut impl BufRead, label: &str) -> Result<String> {
    loop {
        let choice = prompt_line(input, label)?;
        let choice = choice.trim();
        if !choice.is_empty() {
            return Ok(choice.to_string());
        }
    }
}

/// Reads lines until one containing only `.`.
fn read_block(input: &mut impl BufRead) -> Result<String> {
    eprintln!("Enter the new text, finishing with a line containing only '.'");
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line.context("failed to read from stdin")?;
        if line == "." {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}
