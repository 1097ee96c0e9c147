//! Partsguard CLI binary.
//!
//! Profanity, reserved-name and homoglyph checks for marketplace content.
//!
//! # Commands
//!
//! - `check` - Report whether text matches the profanity table
//! - `censor` - Replace matches with a placeholder
//! - `wrap` - Surround flagged words with markup
//! - `name` - Check a username (reserved, confusable)
//! - `email` - Check an e-mail address (confusable)
//! - `patterns` - List the pattern table
//! - `server` - Start the HTTP sidecar

use std::io::{self, Read};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use partsguard::{
    identity::{self, ReservedNames},
    profanity,
    server::{self, AppState, ServerConfig},
    validation, Config, VERSION,
};

#[derive(Parser)]
#[command(name = "partsguard")]
#[command(version = VERSION)]
#[command(about = "Partsguard - content checks for marketplace listings and accounts", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/partsguard/config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check text against the profanity table
    Check {
        /// Text to check (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 1 when the text is flagged
        #[arg(long)]
        strict: bool,
    },

    /// Replace every match with a placeholder
    Censor {
        /// Text to censor (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replacement text (default from config: [censored])
        #[arg(short, long)]
        replacement: Option<String>,
    },

    /// Surround flagged words with markup
    Wrap {
        /// Text to wrap (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Opening markup
        #[arg(long)]
        prefix: Option<String>,

        /// Closing markup
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Check a username for registration
    Name {
        /// Username
        name: String,

        /// Additional reserved names
        #[arg(short, long)]
        extra: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an e-mail address for registration
    Email {
        /// E-mail address
        address: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the profanity pattern table
    Patterns,

    /// Start the HTTP sidecar
    Server {
        /// Listen port (default from config: 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen host (default from config: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Bind to all interfaces
        #[arg(long)]
        bind_all: bool,

        /// Disable CORS headers
        #[arg(long)]
        no_cors: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    profanity::init()?;

    let config = Config::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Check {
            input,
            file,
            json,
            strict,
        } => cmd_check(input, file, json, strict),

        Commands::Censor {
            input,
            file,
            output,
            replacement,
        } => {
            let replacement = replacement.unwrap_or(config.filter.replacement);
            cmd_censor(input, file, output, &replacement)
        },

        Commands::Wrap {
            input,
            file,
            output,
            prefix,
            suffix,
        } => {
            let prefix = prefix.unwrap_or(config.filter.wrap_prefix);
            let suffix = suffix.unwrap_or(config.filter.wrap_suffix);
            cmd_wrap(input, file, output, &prefix, &suffix)
        },

        Commands::Name { name, extra, json } => {
            let reserved = config.names.reserved_names().with_additional(extra);
            cmd_name(&name, &reserved, json)
        },

        Commands::Email { address, json } => cmd_email(&address, json),

        Commands::Patterns => cmd_patterns(),

        Commands::Server {
            port,
            host,
            bind_all,
            no_cors,
        } => cmd_server(config, port, host, bind_all, no_cors),
    }
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn cmd_check(
    input: Option<String>,
    file: Option<PathBuf>,
    json_output: bool,
    strict: bool,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    let matches = profanity::find_matches(&content);
    let flagged = !matches.is_empty();

    if json_output {
        let output = serde_json::json!({
            "flagged": flagged,
            "matches": matches,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if flagged {
        println!("FLAGGED ({} matches)", matches.len());
        println!();
        for m in &matches {
            println!("  - {:?} at {}..{}", m.text, m.start, m.end);
        }
    } else {
        println!("CLEAN");
    }

    if flagged && strict {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_censor(
    input: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    replacement: &str,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    write_output(output, &profanity::replace(&content, replacement))
}

fn cmd_wrap(
    input: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
    prefix: &str,
    suffix: &str,
) -> anyhow::Result<()> {
    let content = read_input(input, file)?;
    write_output(output, &profanity::wrap(&content, prefix, suffix))
}

fn cmd_name(name: &str, reserved: &ReservedNames, json_output: bool) -> anyhow::Result<()> {
    let result = validation::validate_username(name, reserved);

    if json_output {
        let output = serde_json::json!({
            "name": name,
            "valid": result.is_ok(),
            "reserved": reserved.contains(name),
            "mixed_script": identity::is_mixed_script(name),
            "scripts": identity::scripts(name),
            "confusable_chars": identity::confusable_chars(name)
                .iter()
                .map(|c| format!("U+{:04X}", u32::from(*c)))
                .collect::<Vec<_>>(),
            "error": result.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result {
            Ok(()) => println!("OK"),
            Err(e) => println!("REJECTED: {e}"),
        }
        println!("  Scripts: {}", identity::scripts(name).join(", "));
    }

    if result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_email(address: &str, json_output: bool) -> anyhow::Result<()> {
    let result = validation::validate_email(address);

    if json_output {
        let output = serde_json::json!({
            "email": address,
            "valid": result.is_ok(),
            "error": result.as_ref().err().map(ToString::to_string),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        match &result {
            Ok(()) => println!("OK"),
            Err(e) => println!("REJECTED: {e}"),
        }
    }

    if result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

fn cmd_patterns() -> anyhow::Result<()> {
    println!("Pattern table ({} entries):", profanity::PATTERNS.len());
    println!();
    println!("{:<10} {}", "Name", "Description");
    println!("{}", "-".repeat(60));

    for pattern in profanity::PATTERNS {
        println!("{:<10} {}", pattern.name, pattern.description);
    }

    Ok(())
}

fn cmd_server(
    config: Config,
    port: Option<u16>,
    host: Option<String>,
    bind_all: bool,
    no_cors: bool,
) -> anyhow::Result<()> {
    // Build config
    let mut server_config = ServerConfig::from_config(&config)?;

    if let Some(host) = host {
        let port = port.unwrap_or(server_config.addr.port());
        let addr: SocketAddr = format!("{host}:{port}").parse()?;
        server_config = server_config.with_addr(addr);
    } else if let Some(port) = port {
        server_config = server_config.with_port(port);
    }

    if bind_all {
        server_config = server_config.bind_all();
    }

    if no_cors {
        server_config = server_config.without_cors();
    }

    let state = Arc::new(AppState::new(server_config));
    tracing::info!(
        reserved_names = state.reserved.len(),
        patterns = profanity::PATTERNS.len(),
        "Starting partsguard server"
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async { server::run(state).await.map_err(|e| anyhow::anyhow!("{}", e)) })
}

// Helper functions

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if let Some(s) = input {
        if s == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(s)
        }
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else if content.ends_with('\n') {
        print!("{content}");
    } else {
        println!("{content}");
    }
    Ok(())
}
