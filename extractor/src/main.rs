//! Invoice Extractor CLI - send an invoice to the extraction backend
//!
//! ```bash
//! invoice-extractor extract invoice.pdf        # Extract, print table, write invoice_data.csv
//! invoice-extractor extract scan.png --no-export
//! invoice-extractor interactive                # Menu-driven session
//! invoice-extractor info                       # Show endpoint and accepted types
//! ```

use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use invoice_extractor::config::{
    ALLOWED_EXTENSIONS, APP_NAME, APP_TITLE, CSV_FILE_NAME, CSV_MIME, FORM_FIELD,
    IDLE_PROMPT, PENDING_MESSAGE,
};
use invoice_extractor::{
    render_table, CliResult, ExtractionClient, Flow, FlowState, Phase, UploadedFile,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "invoice-extractor")]
#[command(about = "Extract date, description and tax amount from an invoice", long_about = None)]
struct Cli {
    /// Show diagnostic logs (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one invoice, print the fields and export them as CSV
    Extract {
        /// Invoice file (pdf, jpg, jpeg, png)
        input: PathBuf,

        /// Directory receiving invoice_data.csv
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Print the table only
        #[arg(long)]
        no_export: bool,
    },

    /// Menu-driven session: pick a file, extract, download
    Interactive {
        /// Directory receiving invoice_data.csv
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Show the configured endpoint and accepted file types
    Info,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = ExtractionClient::new();

    let result = match cli.command {
        Commands::Extract {
            input,
            out_dir,
            no_export,
        } => cmd_extract(&client, &input, &out_dir, no_export).await,

        Commands::Interactive { out_dir } => cmd_interactive(&client, &out_dir).await,

        Commands::Info => cmd_info(&client),
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Trigger the flow and wait for the backend. Does nothing without a file.
async fn run_extraction(client: &ExtractionClient, flow: &mut Flow<UploadedFile>) -> Phase {
    let Some(file) = flow.trigger() else {
        return flow.phase();
    };

    eprintln!("⏳ {} ({}, {} bytes)", PENDING_MESSAGE, file.name(), file.len());
    let outcome = client.extract(file).await;
    flow.complete(outcome)
}

/// Print the success banner and the table.
fn print_result(flow: &Flow<UploadedFile>) {
    if let (Some(message), Some(result)) = (flow.status_message(), flow.result()) {
        eprintln!("{}", message);
        print!("{}", render_table(result));
    }
}

fn export(flow: &Flow<UploadedFile>, out_dir: &Path) -> CliResult<()> {
    if let Some(download) = flow.download() {
        let path = download.write_to_dir(out_dir)?;
        eprintln!("⬇️  Saved {} ({}) to {}", download.file_name, download.mime, path.display());
    }
    Ok(())
}

async fn cmd_extract(
    client: &ExtractionClient,
    input: &Path,
    out_dir: &Path,
    no_export: bool,
) -> CliResult<()> {
    eprintln!("📄 Invoice: {}", input.display());

    let file = UploadedFile::from_path(input)?;
    let mut flow = Flow::new();
    flow.select_file(file);

    run_extraction(client, &mut flow).await;

    if let FlowState::Failed { error, .. } = flow.state() {
        return Err(error.clone().into());
    }

    print_result(&flow);
    if !no_export {
        export(&flow, out_dir)?;
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum MenuAction {
    SelectFile,
    Extract,
    Download,
    Quit,
}

impl MenuAction {
    fn label(self) -> &'static str {
        match self {
            MenuAction::SelectFile => "📂 Upload Invoice File (PDF/JPG/PNG)",
            MenuAction::Extract => "🚀 Extract Data",
            MenuAction::Download => "⬇️  Download as CSV",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Actions offered in the current state. Extract needs a file, download a result.
fn menu_for(flow: &Flow<UploadedFile>) -> Vec<MenuAction> {
    let mut actions = vec![MenuAction::SelectFile];
    if flow.can_extract() {
        actions.push(MenuAction::Extract);
    }
    if flow.download().is_some() {
        actions.push(MenuAction::Download);
    }
    actions.push(MenuAction::Quit);
    actions
}

async fn cmd_interactive(client: &ExtractionClient, out_dir: &Path) -> CliResult<()> {
    println!("{}\n", APP_TITLE);
    println!("Upload an invoice PDF or image, and this app will extract:");
    println!("  - 🗓  Date\n  - 📝 Description\n  - 💰 Tax Amount\n");

    let mut flow: Flow<UploadedFile> = Flow::new();

    loop {
        match flow.phase() {
            Phase::Idle => println!("ℹ️  {}", IDLE_PROMPT),
            Phase::FileSelected => {
                if let Some(file) = flow.file() {
                    println!("📄 Selected: {} ({} bytes)", file.name(), file.len());
                }
            }
            Phase::BackendError | Phase::TransportError => {
                if let Some(message) = flow.status_message() {
                    println!("❌ {}", message);
                }
            }
            Phase::Success | Phase::Requesting => {}
        }

        let actions = menu_for(&flow);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::new()
            .with_prompt(APP_NAME)
            .items(&labels)
            .default(0)
            .interact()?;

        match actions[choice] {
            MenuAction::SelectFile => {
                let path: String = Input::new()
                    .with_prompt(format!("Invoice file ({})", ALLOWED_EXTENSIONS.join(", ")))
                    .interact_text()?;

                match UploadedFile::from_path(Path::new(path.trim())) {
                    Ok(file) => {
                        flow.select_file(file);
                    }
                    Err(e) => println!("⚠️  {}", e),
                }
            }
            MenuAction::Extract => {
                if run_extraction(client, &mut flow).await == Phase::Success {
                    print_result(&flow);
                }
            }
            MenuAction::Download => export(&flow, out_dir)?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn cmd_info(client: &ExtractionClient) -> CliResult<()> {
    println!("{}", APP_NAME);
    println!("   Endpoint:      POST {}", client.endpoint());
    println!("   Form field:    {}", FORM_FIELD);
    println!("   Accepted:      {}", ALLOWED_EXTENSIONS.join(", "));
    println!("   Export:        {} ({})", CSV_FILE_NAME, CSV_MIME);
    Ok(())
}
