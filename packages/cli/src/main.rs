//! `mitra`: Mitra command-line interface.
//!
//! - **`validate`** checks a JSON document against one of the declared forms,
//!   offline.
//! - **`ping`**, **`demo`** call the health-check endpoints.
//! - **`mood`**, **`risk`**, **`chat`**, **`crisis`** call the catalog
//!   endpoints. Input is validated locally first, so invalid input is
//!   reported without any request being sent.
//!
//! Exit codes: 0 on success, 1 when validation or the API call fails, 2 on
//! usage or input errors.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::{self, ExitCode};
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};

use mitra::{validate, FieldError, FormKind, Severity, Validation};
use mitra_client::{global, ApiClient, ApiError, ClientConfig, SubmitError};

/// mitra: Mitra API CLI
#[derive(Parser)]
#[command(name = "mitra", version, about, long_about = None)]
struct Cli {
    /// Origin of the API server.
    #[arg(long, global = true, env = "MITRA_API_URL", default_value = ClientConfig::DEFAULT_BASE_URL)]
    api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, global = true, env = "MITRA_TIMEOUT_SECS", value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a JSON document against a form schema.
    ///
    /// Prints the normalized document (defaults applied, numeric strings
    /// coerced) and exits 0 if it is valid; prints one line per violated
    /// field and exits 1 otherwise.
    ///
    /// Pass `-` as FILE to read from stdin.
    Validate {
        /// Form name: login | user | student | mood-entry | chat-message |
        /// risk-assessment | crisis-alert | settings
        #[arg(long, value_name = "NAME")]
        form: FormKind,

        /// Path to a JSON file, or `-` for stdin.
        file: PathBuf,
    },

    #[command(flatten)]
    Remote(RemoteCommand),
}

/// Commands that call the API through the global client.
#[derive(Subcommand)]
enum RemoteCommand {
    /// Call `GET /api/ping`.
    Ping,

    /// Call `GET /api/demo`.
    Demo,

    /// Mood entries.
    #[command(subcommand)]
    Mood(MoodCommand),

    /// Risk assessments.
    #[command(subcommand)]
    Risk(RiskCommand),

    /// Chat messages.
    #[command(subcommand)]
    Chat(ChatCommand),

    /// Crisis support.
    #[command(subcommand)]
    Crisis(CrisisCommand),
}

#[derive(Subcommand)]
enum MoodCommand {
    /// Record a mood entry.
    ///
    /// Example:
    ///   mitra mood log --student s-1 --mood 4 --note "slept well" --factor Sleep
    Log {
        #[arg(long, value_name = "ID")]
        student: String,

        /// 1 (very sad) to 5 (very happy).
        #[arg(long, value_name = "N")]
        mood: String,

        #[arg(long, value_name = "TEXT")]
        note: Option<String>,

        /// Contributing factor. Repeat for several: --factor a --factor b
        #[arg(long = "factor", value_name = "TEXT")]
        factors: Vec<String>,
    },

    /// List a student's mood entries.
    List {
        #[arg(long, value_name = "ID")]
        student: String,
    },
}

#[derive(Subcommand)]
enum RiskCommand {
    /// Show a student's most recent risk assessment.
    Latest {
        #[arg(long, value_name = "ID")]
        student: String,
    },
}

#[derive(Subcommand)]
enum ChatCommand {
    /// Send a message to a chat session.
    Send {
        #[arg(long, value_name = "ID")]
        session: String,

        content: String,
    },
}

#[derive(Subcommand)]
enum CrisisCommand {
    /// Raise a crisis alert for a student.
    Alert {
        #[arg(long, value_name = "ID")]
        student: String,

        /// low | medium | high | critical
        #[arg(long)]
        severity: Severity,

        #[arg(long, value_name = "TEXT")]
        description: String,

        /// Flag the alert as needing immediate action.
        #[arg(long)]
        immediate: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let Cli {
        api_url,
        timeout,
        command,
    } = Cli::parse();

    match command {
        Command::Validate { form, file } => check_form(form, &file),
        Command::Remote(command) => {
            connect(api_url, timeout);
            run(command).await
        }
    }
}

fn check_form(form: FormKind, file: &PathBuf) -> ExitCode {
    let raw = parse_json(&read_input(file));
    match validate(form.schema(), &raw) {
        Validation::Valid(normalized) => {
            print_json(&normalized);
            ExitCode::SUCCESS
        }
        Validation::Invalid(errors) => {
            report_fields(&errors);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: RemoteCommand) -> ExitCode {
    let client = global::client().unwrap_or_else(|e| fatal(&e.to_string()));
    match command {
        RemoteCommand::Ping => show(client.ping().await),
        RemoteCommand::Demo => show(client.demo().await),
        RemoteCommand::Mood(MoodCommand::Log {
            student,
            mood,
            note,
            factors,
        }) => {
            let mut raw = json!({ "mood": mood, "factors": factors });
            if let Some(note) = note {
                raw["notes"] = Value::String(note);
            }
            submitted(client.submit_mood(&student, &raw).await)
        }
        RemoteCommand::Mood(MoodCommand::List { student }) => {
            show(client.list_moods(&student).await)
        }
        RemoteCommand::Risk(RiskCommand::Latest { student }) => {
            show(client.latest_risk(&student).await)
        }
        RemoteCommand::Chat(ChatCommand::Send { session, content }) => {
            let raw = json!({ "content": content, "sessionId": session });
            submitted(client.submit_chat_message(&raw).await)
        }
        RemoteCommand::Crisis(CrisisCommand::Alert {
            student,
            severity,
            description,
            immediate,
        }) => {
            let raw = json!({
                "studentId": student,
                "severity": severity,
                "description": description,
                "immediateAction": immediate,
            });
            submitted(client.submit_crisis_alert(&raw).await)
        }
    }
}

/// Install the process-wide client from the command-line options.
fn connect(api_url: String, timeout: Option<u64>) {
    let config = ClientConfig {
        base_url: api_url,
        timeout: timeout.map(Duration::from_secs),
    };
    let client = ApiClient::new(&config).unwrap_or_else(|e| fatal(&e.to_string()));
    if let Err(e) = global::init(client) {
        fatal(&e.to_string());
    }
}

fn show<T: Serialize>(result: Result<T, ApiError>) -> ExitCode {
    match result {
        Ok(value) => {
            print_json(&value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("mitra: {e}");
            ExitCode::FAILURE
        }
    }
}

fn submitted<T: Serialize>(result: Result<T, SubmitError>) -> ExitCode {
    match result {
        Ok(value) => show::<T>(Ok(value)),
        Err(SubmitError::Invalid(errors)) => {
            report_fields(&errors);
            ExitCode::FAILURE
        }
        Err(SubmitError::Api(e)) => show::<T>(Err(e)),
    }
}

fn report_fields(errors: &[FieldError]) {
    for error in errors {
        eprintln!("invalid: {error}");
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fatal(&format!("failed to encode output: {e}")),
    }
}

/// Read the full contents of a file, or stdin when the path is `"-"`.
fn read_input(path: &PathBuf) -> String {
    if path.to_str() == Some("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .unwrap_or_else(|e| fatal(&format!("failed to read stdin: {e}")));
        buf
    } else {
        fs::read_to_string(path)
            .unwrap_or_else(|e| fatal(&format!("failed to read {}: {e}", path.display())))
    }
}

fn parse_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| fatal(&format!("input is not valid JSON: {e}")))
}

/// Print an error message to stderr and exit with code 2.
fn fatal(msg: &str) -> ! {
    eprintln!("mitra: {msg}");
    process::exit(2);
}
