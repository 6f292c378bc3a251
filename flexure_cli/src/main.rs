//! # Flexure CLI
//!
//! Command-line front end for `flexure_core`. Reads a JSON request for one
//! section shape, prints the design (or a structured error) as JSON on
//! stdout and logs to stderr.
//!
//! ```text
//! flexure design rectangular --input beam.json --draft --pretty
//! echo '{"moment": 150, ...}' | flexure design flanged
//! flexure units flanged
//! flexure equations
//! ```
//!
//! Exit codes: 0 designed, 2 bad request, 3 invalid section, 1 internal error.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing_subscriber::fmt::SubscriberBuilder;

use flexure_core::equations::generate_equations_markdown;
use flexure_core::units::units_document;
use flexure_core::{CalcError, DesignRequest, ErrorKind, SectionDesign, SectionShape};

#[derive(Parser)]
#[command(name = "flexure")]
#[command(about = "Flexural reinforcement design for concrete beam sections")]
struct Cmd {
    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, env = "FLEXURE_LOG", default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Design a section from a JSON request
    Design {
        /// Section shape: rectangular or flanged
        shape: SectionShape,
        /// Request file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Include intermediate quantities
        #[arg(long)]
        draft: bool,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the unit of every input field for a shape
    Units { shape: SectionShape },
    /// Print the design equations as Markdown
    Equations,
}

fn main() -> Result<ExitCode> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cmd.action {
        Action::Design {
            shape,
            input,
            draft,
            pretty,
        } => design(shape, input, draft, pretty),
        Action::Units { shape } => {
            println!("{}", serde_json::to_string_pretty(units_document(shape))?);
            Ok(ExitCode::SUCCESS)
        }
        Action::Equations => {
            print!("{}", generate_equations_markdown());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn design(shape: SectionShape, input: Option<PathBuf>, draft: bool, pretty: bool) -> Result<ExitCode> {
    let body = read_body(input.as_ref())?;
    tracing::info!(shape = shape.as_str(), bytes = body.len(), "design request");

    let outcome = DesignRequest::from_json(shape, &body).and_then(|mut request| {
        request.options.draft |= draft;
        request.run()
    });

    let (document, code) = render(outcome);
    let text = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{}", text);
    Ok(code)
}

fn read_body(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            Ok(body)
        }
    }
}

/// Output document and exit code for a design outcome.
fn render(outcome: Result<SectionDesign, CalcError>) -> (Value, ExitCode) {
    match outcome {
        Ok(design) => {
            let mut document = json!({ "result": design.result });
            if let Some(draft) = design.draft {
                document["draft"] = json!(draft);
            }
            (document, ExitCode::SUCCESS)
        }
        Err(err) => {
            let kind = err.kind();
            let error = match kind {
                ErrorKind::Internal => {
                    tracing::error!(error = %err, "internal error");
                    json!({ "type": "Internal", "details": { "message": "internal calculation error" } })
                }
                _ => {
                    tracing::warn!(error = %err, "design rejected");
                    json!(err)
                }
            };
            let document = json!({ "error": error, "code": err.error_code() });
            (document, ExitCode::from(exit_status(kind)))
        }
    }
}

fn exit_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::BadRequest => 2,
        ErrorKind::InvalidSection => 3,
        ErrorKind::Internal => 1,
    }
}
