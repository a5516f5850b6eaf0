//! # envfig demo application
//!
//! Loads a config file or directory and prints the result, so the loader and
//! the env overlay can be exercised by hand.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example envfig_demo -- demos/envfig_demo/assets
//! cargo run --example envfig_demo -- demos/envfig_demo/assets/dummy_config_1.yml
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                    | How to exercise it                                                          |
//! |----------------------------|-----------------------------------------------------------------------------|
//! | Single file                | `... -- demos/envfig_demo/assets/dummy_config_1.yml`                        |
//! | Directory, sorted by path  | `... -- demos/envfig_demo/assets`                                           |
//! | Env overlay                | `SERVER___HOST=10.0.0.1 cargo run --example envfig_demo -- --env demos/envfig_demo/assets` |
//! | Multi-word keys            | `DUMMY_1___CFG___FOO=qux cargo run --example envfig_demo -- --env demos/envfig_demo/assets` |
//! | Falsy keys are kept        | `DUMMY_1___CFG___ENABLED=true ... --env ...` (no change)                    |
//! | Falsy keys overwritten     | `DUMMY_1___CFG___ENABLED=true ... --env --present-keys ...`                 |
//! | New keys are never added   | `SERVER___TLS=on ... --env ...` (no change)                                 |
//! | YAML output                | `... -- --format yaml demos/envfig_demo/assets`                             |
//! | Debug logging              | `RUST_LOG=envfig=trace cargo run --example envfig_demo -- --env ...`        |

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use envfig::LoadArgs;

/// envfig demo: load configs, overlay env vars, print the result.
#[derive(Parser, Debug)]
#[command(name = "envfig-demo")]
struct Cli {
    #[command(flatten)]
    load: LoadArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Json,
    Yaml,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let configs = cli
        .load
        .into_builder()
        .build()
        .and_then(|loader| loader.load_values())
        .unwrap_or_else(|e| {
            eprintln!("Failed to load config:\n{e}");
            std::process::exit(1);
        });

    let rendered = match cli.format {
        Format::Json => serde_json::to_string_pretty(&configs).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::to_string(&configs).map_err(|e| e.to_string()),
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to render output:\n{e}");
            std::process::exit(1);
        }
    }
}
