use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use smartriage_client::{Session, TriageClient};
use smartriage_core::IntakeForm;
use tracing::Level;

mod display;

#[derive(Parser)]
#[command(
    name = "smartriage",
    version,
    about = "Submit patients to the SMARTriage decision service"
)]
struct Cli {
    /// Base URL of the decision service.
    #[arg(
        long,
        env = "SMARTRIAGE_URL",
        default_value = "http://localhost:8000",
        global = true
    )]
    url: String,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit one patient for triage and show the decision.
    Submit(SubmitArgs),
    /// Check that the decision service is up.
    Health,
}

#[derive(Args)]
struct SubmitArgs {
    /// Read the intake form from a JSON file instead of flags.
    #[arg(
        long,
        conflicts_with_all = [
            "age", "gender", "complaint", "esi", "vitals", "background", "remarks"
        ]
    )]
    input: Option<PathBuf>,

    #[arg(long, required_unless_present = "input")]
    age: Option<String>,

    #[arg(long, required_unless_present = "input")]
    gender: Option<String>,

    /// Chief complaint.
    #[arg(long, required_unless_present = "input")]
    complaint: Option<String>,

    /// Emergency Severity Index; non-numeric text is sent as null.
    #[arg(long, required_unless_present = "input", allow_hyphen_values = true)]
    esi: Option<String>,

    #[arg(long)]
    vitals: Option<String>,

    /// Medical history.
    #[arg(long)]
    background: Option<String>,

    #[arg(long)]
    remarks: Option<String>,

    /// Print the presentation state as JSON.
    #[arg(long)]
    json: bool,
}

impl SubmitArgs {
    fn intake_form(&self) -> anyhow::Result<IntakeForm> {
        if let Some(path) = &self.input {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading intake file {}", path.display()))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("parsing intake file {}", path.display()));
        }

        Ok(IntakeForm {
            age: self.age.clone().unwrap_or_default(),
            gender: self.gender.clone().unwrap_or_default(),
            complaint: self.complaint.clone().unwrap_or_default(),
            esi: self.esi.clone().unwrap_or_default(),
            vitals: self.vitals.clone().unwrap_or_default(),
            background: self.background.clone().unwrap_or_default(),
            remarks: self.remarks.clone().unwrap_or_default(),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    tracing::debug!("smartriage v{}", env!("CARGO_PKG_VERSION"));

    let client = TriageClient::new(cli.url);
    match cli.command {
        Command::Submit(args) => cmd_submit(&client, &args).await,
        Command::Health => cmd_health(&client).await,
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn cmd_submit(client: &TriageClient, args: &SubmitArgs) -> anyhow::Result<()> {
    let form = args.intake_form()?;
    let mut session = Session::new();
    let state = session.submit(client, &form).await?;

    if let Some(alert) = &state.alert {
        anyhow::bail!("{alert}");
    }

    let Some(presentation) = state.panel.presentation() else {
        anyhow::bail!("no decision to show");
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(presentation)?);
    } else {
        print!("{}", display::Card(presentation));
    }
    Ok(())
}

async fn cmd_health(client: &TriageClient) -> anyhow::Result<()> {
    let health = client
        .health()
        .await
        .with_context(|| format!("contacting {}", client.base_url()))?;
    println!("{}: {}", health.status, health.message);
    if !health.is_ok() {
        anyhow::bail!("service reported status {:?}", health.status);
    }
    Ok(())
}
