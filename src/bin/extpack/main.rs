use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use extpack::{
    load_options, render_summary, Compiler, ExtpackPlugin, HostConfig, OptionOverrides,
};

/// extpack: preset injector for modeler extension bundles (CLI)
#[derive(Parser, Debug)]
#[command(
    name = "extpack",
    version,
    about = "Inject modeler extension presets into a bundler configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge preset loader rules and aliases into a host configuration
    Merge(MergeCmd),
}

#[derive(Parser, Debug)]
struct MergeCmd {
    /// Host bundler configuration file (JSON)
    #[arg(value_name = "CONFIG")]
    input: PathBuf,

    /// Extension type to apply; all known types when omitted
    #[arg(long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Enable/disable the properties-panel alias merge
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    properties_panel_alias: Option<bool>,

    /// Enable/disable the properties-panel loader-rule append
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    properties_panel_loader: Option<bool>,

    /// Enable/disable the react alias merge
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    react_alias: Option<bool>,

    /// Enable/disable the react loader-rule append
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    react_loader: Option<bool>,

    /// Output file for the merged configuration; stdout if omitted
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print a human-readable merge summary to stderr
    #[arg(long = "summary", action = ArgAction::SetTrue, default_value_t = false)]
    summary: bool,

    /// Print extra information about option layering and selection
    #[arg(long = "diagnostics", action = ArgAction::SetTrue, default_value_t = false)]
    diagnostics: bool,

    /// Path to options file; if omitted, auto-discovers extpack.{toml,yaml,yml,json}
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn real_main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Merge(cmd) => run_merge(cmd),
    }?;

    Ok(())
}

fn run_merge(cli: MergeCmd) -> Result<()> {
    // Load options file (explicit or auto-discovered)
    let file = load_options(cli.config.as_deref())?;

    // Effective overrides: file < CLI (CLI wins per key)
    let overrides = OptionOverrides {
        kind: cli.kind.clone().or(file.kind),
        properties_panel_alias: cli.properties_panel_alias.or(file.properties_panel_alias),
        properties_panel_loader: cli.properties_panel_loader.or(file.properties_panel_loader),
        react_alias: cli.react_alias.or(file.react_alias),
        react_loader: cli.react_loader.or(file.react_loader),
    };

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read host configuration: {}", cli.input.display()))?;
    let host: HostConfig = serde_json::from_str(&raw).with_context(|| {
        format!(
            "failed to parse host configuration: {}",
            cli.input.display()
        )
    })?;

    let plugin = ExtpackPlugin::new(overrides);

    if cli.diagnostics {
        let o = plugin.options();
        eprintln!(
            "effective options: type={:?} properties_panel_alias={} properties_panel_loader={} react_alias={} react_loader={}",
            o.kind, o.properties_panel_alias, o.properties_panel_loader, o.react_alias, o.react_loader
        );
        let keys: Vec<&str> = plugin
            .selected_entries()?
            .iter()
            .map(|entry| entry.key)
            .collect();
        eprintln!("selected entries: {}", keys.join(", "));
        eprintln!(
            "host before merge: {} rules, {} aliases",
            host.module.rules.len(),
            host.resolve.alias.len()
        );
    }

    let mut compiler = Compiler::new(host);
    plugin.apply(&mut compiler)?;
    compiler.run_after_environment()?;

    if cli.diagnostics {
        eprintln!(
            "host after merge: {} rules, {} aliases",
            compiler.options.module.rules.len(),
            compiler.options.resolve.alias.len()
        );
    }
    if cli.summary {
        eprint!("{}", render_summary(&compiler.options));
    }

    let merged = serde_json::to_string_pretty(&compiler.options)?;
    match &cli.output {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(out_path, merged + "\n").with_context(|| {
                format!(
                    "failed to write merged configuration to {}",
                    out_path.display()
                )
            })?;
        }
        None => println!("{merged}"),
    }

    Ok(())
}
