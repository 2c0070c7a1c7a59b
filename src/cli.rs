use bom_master::application::dto::OutputFormat;
use bom_master::assembly::domain::DEFAULT_PATH_SEPARATOR;
use bom_master::assembly::policies::{BuildPolicy, DuplicatePolicy, OrphanPolicy};
use bom_master::config::ConfigFile;
use bom_master::shared::error::BomError;
use bom_master::shared::Result;
use clap::Parser;
use std::path::PathBuf;

/// Browse the assembly hierarchy of a flat bill of materials
#[derive(Parser, Debug)]
#[command(name = "bom-master")]
#[command(version)]
#[command(
    about = "Browse the assembly hierarchy of a flat bill of materials",
    long_about = None
)]
pub struct Args {
    /// Record source: BOM API base URL (http/https) or path of a JSON export
    #[arg(short, long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Id of the part to select
    #[arg(
        short = 'i',
        long = "select",
        value_name = "ID",
        allow_negative_numbers = true
    )]
    pub select: Option<i64>,

    /// Output format: markdown or json [default: markdown]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Records sharing a component name: last-wins or reject [default: last-wins]
    #[arg(long, value_name = "POLICY")]
    pub on_duplicate: Option<DuplicatePolicy>,

    /// Records whose parent does not exist: drop or reject [default: drop]
    #[arg(long, value_name = "POLICY")]
    pub on_orphan: Option<OrphanPolicy>,

    /// Separator for the selected part's path [default: \]
    #[arg(long, value_name = "STR")]
    pub separator: Option<String>,

    /// Path to a config file (defaults to ./bom-master.config.yml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Effective settings after merging CLI, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub selected_id: Option<i64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub policy: BuildPolicy,
    pub separator: String,
}

impl Settings {
    /// Merges the sources of settings: CLI beats config, config beats defaults
    ///
    /// # Errors
    /// Returns a validation error if no source is given anywhere, if the
    /// separator is empty, or if a config value does not parse.
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let source = args.source.or(config.source.clone()).ok_or_else(|| {
            BomError::Validation {
                message: "no record source given.\n\n\
                          💡 Hint: Pass --source <URL|PATH> or set 'source' in bom-master.config.yml"
                    .to_string(),
            }
        })?;

        let separator = args
            .separator
            .or(config.separator.clone())
            .unwrap_or_else(|| DEFAULT_PATH_SEPARATOR.to_string());
        if separator.is_empty() {
            return Err(BomError::Validation {
                message: "the path separator must not be empty".to_string(),
            }
            .into());
        }

        let format = match args.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };
        let duplicates = match args.on_duplicate {
            Some(policy) => policy,
            None => config.duplicate_policy()?.unwrap_or_default(),
        };
        let orphans = match args.on_orphan {
            Some(policy) => policy,
            None => config.orphan_policy()?.unwrap_or_default(),
        };

        Ok(Self {
            source,
            selected_id: args.select,
            format,
            output: args.output,
            policy: BuildPolicy::new(duplicates, orphans),
            separator,
        })
    }
}
