//! CLI Application logic
//!
//! Contains the command-line interface implementation: `check` validates a
//! build script against the allay schema, `outdated` compares the declared
//! API version against the latest published one, and `new` writes the
//! scaffold files for a fresh plugin project.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use allaydsl_core::diagnostics::Diagnostics;
use allaydsl_core::template::ProjectTemplate;
use allaydsl_core::parse;
use allaydsl_validate::ValidationEngine;
use allaydsl_version::{check_file, RegistryClient, VersionCheckOutcome};

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "allaydsl")]
#[command(author, version, about = "Tooling for the allay Gradle DSL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a build script against the allay schema
    Check {
        /// Input build.gradle.kts file
        input: PathBuf,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Exit with an error code on warnings too, not just errors
        #[arg(long)]
        strict: bool,
    },

    /// Compare the declared allay API version against the latest release
    Outdated {
        /// Input build.gradle.kts file
        input: PathBuf,

        /// Override the registry search URL
        #[arg(long)]
        registry_url: Option<String>,

        /// Connect/overall timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout: u64,

        /// Rewrite the file with the latest version when outdated
        #[arg(long)]
        apply: bool,
    },

    /// Create the scaffold for a new allay plugin project
    New {
        /// Directory to create the project in
        directory: PathBuf,

        /// Plugin name (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Maven group id / Java package
        #[arg(long, default_value = "com.example")]
        group: String,

        /// Plugin version
        #[arg(long, default_value = "1.0.0")]
        plugin_version: String,

        /// Plugin description
        #[arg(long)]
        description: Option<String>,

        /// Author recorded in the descriptor
        #[arg(long)]
        author: Option<String>,

        /// Allay API version to build against
        #[arg(long, default_value = "0.15.0")]
        api: String,

        /// Simple name of the main class
        #[arg(long, default_value = "MyPlugin")]
        main_class: String,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            input,
            format,
            strict,
        } => {
            let source = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let diagnostics = check_source(&source);
            let report = render_diagnostics(&diagnostics, &input, format);
            if !report.is_empty() {
                println!("{report}");
            }

            if diagnostics.has_errors() || (strict && !diagnostics.is_empty()) {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::Outdated {
            input,
            registry_url,
            timeout,
            apply,
        } => {
            let source = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;

            let mut client = match registry_url {
                Some(url) => RegistryClient::with_url(url),
                None => RegistryClient::new(),
            };
            client = client.with_timeout(Duration::from_secs(timeout));

            let file = parse(&source);
            match check_file(&file, &client) {
                VersionCheckOutcome::Outdated {
                    current,
                    latest,
                    edit,
                } => {
                    println!("allay api {current} is outdated; latest is {latest}");
                    if apply {
                        let updated = edit.apply(&source);
                        fs::write(&input, updated)
                            .with_context(|| format!("Failed to write {}", input.display()))?;
                        println!("updated {} to {latest}", input.display());
                    }
                    Ok(())
                }
                VersionCheckOutcome::UpToDate { current } => {
                    println!("allay api {current} is up to date");
                    Ok(())
                }
                VersionCheckOutcome::Ahead { current, latest } => {
                    println!("allay api {current} is ahead of the latest release ({latest})");
                    Ok(())
                }
                VersionCheckOutcome::Skipped { reason } => {
                    println!("version check skipped ({reason:?})");
                    Ok(())
                }
            }
        }

        Commands::New {
            directory,
            name,
            group,
            plugin_version,
            description,
            author,
            api,
            main_class,
        } => {
            let plugin_name = name
                .or_else(|| {
                    directory
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                })
                .unwrap_or_else(|| "MyAllayPlugin".to_string());

            let template = ProjectTemplate {
                description: description.unwrap_or_else(|| plugin_name.clone()),
                author: author.unwrap_or_else(|| {
                    std::env::var("USER").unwrap_or_default()
                }),
                plugin_name,
                version: plugin_version,
                api_version: api,
                main_class,
                group_id: group,
            };

            write_scaffold(&directory, &template)?;
            println!("created allay plugin project in {}", directory.display());
            Ok(())
        }
    }
}

/// Validate source text with the default engine
pub fn check_source(source: &str) -> Diagnostics {
    let file = parse(source);
    ValidationEngine::with_defaults()
        .validate(&file)
        .into_iter()
        .collect()
}

/// Render diagnostics in the requested output format
pub fn render_diagnostics(
    diagnostics: &Diagnostics,
    input: &Path,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let mut lines: Vec<String> = diagnostics
                .iter()
                .map(|d| {
                    let located = d.clone().with_file(input.display().to_string());
                    format!("{located}")
                })
                .collect();
            if diagnostics.is_empty() {
                lines.push(format!("{}: no issues found", input.display()));
            }
            lines.join("\n")
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

/// Write the scaffold files for a new project
pub fn write_scaffold(directory: &Path, template: &ProjectTemplate) -> Result<()> {
    let main_class = directory.join(template.main_class_path());
    let main_class_dir = main_class
        .parent()
        .context("main class path has no parent")?;
    fs::create_dir_all(main_class_dir)
        .with_context(|| format!("Failed to create {}", main_class_dir.display()))?;
    fs::create_dir_all(directory.join("src/main/resources"))?;

    fs::write(directory.join("build.gradle.kts"), template.build_gradle_kts())?;
    fs::write(
        directory.join("settings.gradle.kts"),
        template.settings_gradle_kts(),
    )?;
    fs::write(
        directory.join("gradle.properties"),
        template.gradle_properties(),
    )?;
    fs::write(main_class, template.main_class_source())?;

    Ok(())
}
