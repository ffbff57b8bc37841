#![deny(unsafe_code)]
//! CLI binary for the gl-state call cache.
//!
//! Subcommands:
//! - `replay <trace.json>`: run a call trace through the cache, report what reached the device
//! - `caps`: print the capability descriptor of the recording device
//! - `enums [NAME|CODE]`: list catalog names, or look one up

mod error;
mod logging;
mod trace;

use clap::{Parser, Subcommand};
use error::CliError;
use gl_state_core::{enums, Capabilities, Recorder, StateConfig};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gl-state", about = "Redundant-call eliminating WebGL state cache")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log filter in env_logger syntax (overrides RUST_LOG).
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a JSON call trace and report forwarded and elided calls.
    Replay {
        /// Trace file: a JSON array of calls.
        trace: PathBuf,

        /// Skip argument validation.
        #[arg(long)]
        no_validate: bool,

        /// Also print every call that reached the device.
        #[arg(long)]
        calls: bool,
    },
    /// Print the probed capability descriptor of the recording device.
    Caps {
        /// Extension the device should report (repeatable).
        #[arg(short, long = "extension")]
        extensions: Vec<String>,
    },
    /// List catalog enum names, or resolve one name or code.
    Enums {
        /// A name such as CULL_FACE, or a code such as 0x0B44 or 2884.
        query: Option<String>,
    },
}

fn parse_code(text: &str) -> Option<u32> {
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => text.parse().ok(),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Replay {
            trace,
            no_validate,
            calls,
        } => {
            let ops = trace::load(&trace)?;
            let config = StateConfig::default().with_validation(!no_validate);
            let mut report = trace::replay(&ops, config)?;
            if !calls {
                report.calls.clear();
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let stats = report.stats;
                println!("ops        {}", report.ops);
                println!("forwarded  {}", stats.forwarded);
                println!("elided     {}", stats.elided);
                println!("rejected   {}", stats.rejected);
                println!("suppressed {}", stats.suppressed);
                for call in &report.calls {
                    println!("  {}({})", call.op, call.args);
                }
            }
        }
        Command::Caps { extensions } => {
            let names: Vec<&str> = extensions.iter().map(String::as_str).collect();
            let device = Recorder::new().with_extensions(&names);
            let caps = Capabilities::probe(&device);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&caps)?);
            } else {
                println!("Limits:");
                if let serde_json::Value::Object(limits) = serde_json::to_value(caps.limits)? {
                    for (name, value) in limits {
                        println!("  {name} = {value}");
                    }
                }
                println!("Max anisotropy: {}", caps.max_anisotropy);
                println!("Features:");
                for feature in caps.features() {
                    match feature.acquired_as {
                        Some(alias) if alias != feature.name => println!("  {} (as {alias})", feature.name),
                        Some(_) => println!("  {}", feature.name),
                        None => println!("  {} (absent)", feature.name),
                    }
                }
            }
        }
        Command::Enums { query: None } => {
            if cli.json {
                let all: serde_json::Map<String, serde_json::Value> = enums::NAMES
                    .iter()
                    .map(|&(name, code)| (name.to_string(), code.into()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&all)?);
            } else {
                for &(name, code) in enums::NAMES {
                    println!("0x{code:04X}  {name}");
                }
            }
        }
        Command::Enums { query: Some(query) } => {
            let found = match parse_code(&query) {
                Some(code) => enums::name_of(code).map(|name| (name, code)),
                None => enums::lookup(&query).map(|code| (query.as_str(), code)),
            };
            let Some((name, code)) = found else {
                return Err(CliError::Input(format!("no catalog enum matches {query}")));
            };

            if cli.json {
                let info = serde_json::json!({ "name": name, "code": code });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("0x{code:04X}  {name}");
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log.as_deref());
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
