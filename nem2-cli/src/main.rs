//! NEM2 CLI entry point: transaction JSON -> validate -> sign request -> output.

mod logging;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::Serialize;
use serde_json::{json, Value};

use nem2_core::{
    format_path, format_type_code, truncate_middle, AgentError,
    DecryptMessageRequest, EncryptMessageRequest, Nem2Error, OutputMode, SignRequest,
    SignTransactionParams, TransactionBody, TransactionType, DEFAULT_PATH,
};

use logging::LogFormat;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Auto,
    Json,
    Human,
}

#[derive(Debug, Parser)]
#[command(name = "nem2-cli", version)]
#[command(about = "Build NEM2 hardware sign requests from transaction JSON")]
struct Cli {
    /// Output format: auto (tty=human, pipe=agent), json (agent), human (operator).
    #[arg(long, value_enum, default_value = "auto", global = true)]
    output: OutputFormat,

    /// Default log filter when NEM2_LOG / RUST_LOG are unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[arg(long, value_enum, default_value = "pretty", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a transaction and print the device sign request.
    SignTx {
        /// JSON file holding either `{path, generationHash, transaction}` or a bare transaction.
        #[arg(long)]
        input: PathBuf,

        /// Address path, used when the input file does not carry one.
        #[arg(long, env = "NEM2_PATH")]
        path: Option<String>,

        /// Network generation hash, used when the input file does not carry one.
        #[arg(long, env = "NEM2_GENERATION_HASH")]
        generation_hash: Option<String>,

        /// Bypass confirmation prompts (required for agent mode).
        #[arg(long)]
        force: bool,
    },
    /// Build a message encryption request.
    Encrypt {
        #[arg(long)]
        payload: String,
        #[arg(long)]
        recipient_public_key: String,
        #[arg(long, env = "NEM2_PATH", default_value = DEFAULT_PATH)]
        path: String,
    },
    /// Build a message decryption request.
    Decrypt {
        #[arg(long)]
        payload: String,
        #[arg(long)]
        sender_public_key: String,
        #[arg(long, env = "NEM2_PATH", default_value = DEFAULT_PATH)]
        path: String,
    },
    /// List supported transaction types.
    Types,
}

/// Detect output mode based on CLI flags and TTY detection.
fn detect_output_mode(output: OutputFormat) -> OutputMode {
    match output {
        OutputFormat::Human => OutputMode::Human,
        OutputFormat::Json => OutputMode::Agent,
        OutputFormat::Auto => {
            if std::io::stdout().is_terminal() {
                OutputMode::Human
            } else {
                OutputMode::Agent
            }
        }
    }
}

fn spinner(mode: OutputMode, message: &str) -> Option<ProgressBar> {
    if mode != OutputMode::Human {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

fn human_header(title: &str) {
    println!(
        "{}",
        "╔═══════════════════════════════════════════════════════════════╗".bright_white()
    );
    println!("{}", format!("║  {:<61}║", title).bright_white());
    println!(
        "{}",
        "╚═══════════════════════════════════════════════════════════════╝".bright_white()
    );
    println!();
}

fn new_table(header: [&str; 2]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(header[0]).add_attribute(Attribute::Bold),
        Cell::new(header[1]).add_attribute(Attribute::Bold),
    ]);
    table
}

fn body_summary(body: &TransactionBody) -> String {
    match body {
        TransactionBody::Transfer(transfer) => format!(
            "transfer to {} ({} mosaic(s))",
            truncate_middle(&transfer.recipient_address.address),
            transfer.mosaics.len()
        ),
        TransactionBody::Aggregate(aggregate) => format!(
            "{} inner transaction(s), {} cosignature(s)",
            aggregate.inner_transactions.len(),
            aggregate.cosignatures.len()
        ),
        TransactionBody::MosaicDefinition(definition) => {
            format!("mosaic {}", definition.mosaic_id)
        }
        TransactionBody::MosaicSupply(supply) => {
            format!("mosaic {} delta {}", supply.mosaic_id, supply.delta)
        }
        TransactionBody::NamespaceRegistration(registration) => {
            format!("namespace '{}'", registration.namespace_name)
        }
        _ => "-".to_string(),
    }
}

fn render_sign_request(request: &SignRequest) -> Table {
    let mut table = new_table(["Field", "Value"]);
    table.add_row(vec![Cell::new("Path"), Cell::new(format_path(request.address_n()))]);

    match request.transaction() {
        None => {
            table.add_row(vec![Cell::new("Mode"), Cell::new("cosigning")]);
        }
        Some(tx) => {
            table.add_row(vec![
                Cell::new("Type"),
                Cell::new(format_type_code(tx.transaction.transaction_type)),
            ]);
            table.add_row(vec![
                Cell::new("Network"),
                Cell::new(tx.transaction.network_type.as_str()),
            ]);
            table.add_row(vec![Cell::new("Max fee"), Cell::new(&tx.transaction.max_fee)]);
            table.add_row(vec![Cell::new("Deadline"), Cell::new(&tx.transaction.deadline)]);
            table.add_row(vec![
                Cell::new("Generation hash"),
                Cell::new(truncate_middle(&tx.generation_hash)),
            ]);
            table.add_row(vec![Cell::new("Body"), Cell::new(body_summary(&tx.body))]);
        }
    }

    table
}

fn confirm_or_abort(force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }

    println!(
        "{}",
        "⚠️  This request will be sent to the signing device.\n    Type 'yes' to continue, or 'no' to cancel:"
            .yellow()
    );
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")?;

    let stdin = io::stdin();
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    let answer = line.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

fn emit_agent_error(err: AgentError) -> Result<()> {
    let json = serde_json::to_string(&err).context("failed to serialize agent error")?;
    eprintln!("{json}");
    Ok(())
}

/// Report a core validation failure and exit with code 1.
fn fail_validation(mode: OutputMode, err: Nem2Error) -> Result<()> {
    tracing::debug!(error = %err, "request rejected");
    match mode {
        OutputMode::Human => {
            human_header("NEM2 - Request Rejected");
            println!("{} {}", "✗".red(), err.to_string().red());
            println!();
            println!("{}", "Fix the input above and re-run.".yellow());
        }
        OutputMode::Agent => emit_agent_error(AgentError::from_core(&err))?,
    }
    std::process::exit(1);
}

fn print_result<T: Serialize>(mode: OutputMode, title: &str, value: &T) -> Result<()> {
    match mode {
        OutputMode::Human => {
            println!();
            println!("{}", title.green().bold());
            println!(
                "{}",
                "───────────────────────────────────────────────────────────────".bright_black()
            );
            let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
            println!("{json}");
        }
        OutputMode::Agent => {
            let json = serde_json::to_string(value).context("failed to serialize output")?;
            print!("{json}");
        }
    }
    Ok(())
}

/// Fill `path` / `generationHash` from flags when the file carries a bare transaction.
fn build_payload(input: Value, path: Option<&str>, generation_hash: Option<&str>) -> Value {
    let mut payload = match input {
        Value::Object(object) if object.contains_key("transaction") => Value::Object(object),
        transaction => json!({ "transaction": transaction }),
    };

    if let Some(object) = payload.as_object_mut() {
        if !object.contains_key("path") {
            object.insert(
                "path".to_string(),
                Value::String(path.unwrap_or(DEFAULT_PATH).to_string()),
            );
        }
        if let Some(hash) = generation_hash {
            object
                .entry("generationHash")
                .or_insert_with(|| Value::String(hash.to_string()));
        }
    }
    payload
}

fn sign_tx(
    mode: OutputMode,
    input: &Path,
    path: Option<&str>,
    generation_hash: Option<&str>,
    force: bool,
) -> Result<()> {
    // Agent mode is non-interactive; enforce --force before anything reaches the device.
    if mode == OutputMode::Agent && !force {
        emit_agent_error(AgentError::new("confirmation_required", 2, None))?;
        std::process::exit(2);
    }

    let pb = spinner(mode, "Reading transaction…");
    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to open input file: {:?}", input))?;
    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    tracing::debug!(file = %input.display(), bytes = text.len(), "read transaction file");

    let raw: Value = match serde_json::from_str(&text) {
        Ok(value) => value,
        Err(err) => return fail_validation(mode, Nem2Error::from(err)),
    };

    let payload = build_payload(raw, path, generation_hash);
    let request = match SignTransactionParams::from_value(&payload)
        .and_then(SignTransactionParams::into_sign_request)
    {
        Ok(request) => request,
        Err(err) => return fail_validation(mode, err),
    };

    match request.transaction() {
        Some(tx) => tracing::info!(
            tx_type = %format_type_code(tx.transaction.transaction_type),
            path = %format_path(&tx.address_n),
            "sign request built"
        ),
        None => tracing::info!(path = %format_path(request.address_n()), "cosigning request built"),
    }

    if mode == OutputMode::Human {
        human_header("NEM2 - Sign Request Review");
        println!("{}", render_sign_request(&request));
        println!();

        if !confirm_or_abort(force)? {
            println!("{}", "Aborted. No request was produced.".yellow());
            return Ok(());
        }
    }

    print_result(mode, "Sign request constructed.", &request)
}

/// The path stays a string so a bad `--path` fails validation like any other field.
fn message_payload(path: &str, payload: &str, key_name: &str, key: &str) -> Value {
    json!({ "path": path, "payload": payload, key_name: key })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level, cli.log_format);
    let mode = detect_output_mode(cli.output);

    match cli.command {
        Command::SignTx {
            input,
            path,
            generation_hash,
            force,
        } => sign_tx(
            mode,
            &input,
            path.as_deref(),
            generation_hash.as_deref(),
            force,
        ),
        Command::Encrypt {
            payload,
            recipient_public_key,
            path,
        } => {
            let value = message_payload(&path, &payload, "recipientPublicKey", &recipient_public_key);
            match EncryptMessageRequest::from_value(&value) {
                Ok(request) => print_result(mode, "Encrypt request constructed.", &request),
                Err(err) => fail_validation(mode, err),
            }
        }
        Command::Decrypt {
            payload,
            sender_public_key,
            path,
        } => {
            let value = message_payload(&path, &payload, "senderPublicKey", &sender_public_key);
            match DecryptMessageRequest::from_value(&value) {
                Ok(request) => print_result(mode, "Decrypt request constructed.", &request),
                Err(err) => fail_validation(mode, err),
            }
        }
        Command::Types => {
            let types: Vec<Value> = TransactionType::ALL
                .iter()
                .map(|kind| json!({ "code": kind.code(), "name": kind.name() }))
                .collect();
            match mode {
                OutputMode::Human => {
                    let mut table = new_table(["Code", "Type"]);
                    for kind in TransactionType::ALL {
                        table.add_row(vec![
                            Cell::new(format!("{:#06x}", kind.code())),
                            Cell::new(kind.name()),
                        ]);
                    }
                    println!("{table}");
                    Ok(())
                }
                OutputMode::Agent => print_result(mode, "", &types),
            }
        }
    }
}
