//! CLI for the langpack discovery client.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use langpack_core::config::{self, LangpackConfig};
use langpack_core::{
    FileLanguagePackLoader, LocatorTemplate, RemoteLanguagePackLoader, StaticVersion,
};

use commands::{run_list, run_resolve, run_show};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "langpack")]
#[command(about = "Discover the language packs published for an application version", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where to look and for which version. Unset values come from config.toml.
#[derive(Debug, Clone, Default, Args)]
pub struct Target {
    /// Application version substituted into the pack link (e.g. 1.7.5.0).
    #[arg(long = "app-version", value_name = "VERSION")]
    pub app_version: Option<String>,
    /// Pack link template containing %ps_version%.
    #[arg(long, value_name = "TEMPLATE")]
    pub link: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the pack index URL for a version.
    Resolve {
        #[command(flatten)]
        target: Target,
    },

    /// List the language packs available for a version.
    List {
        #[command(flatten)]
        target: Target,
        /// Print the whole index as JSON (`null` when unavailable).
        #[arg(long)]
        json: bool,
        /// Read the index from a local file template instead of HTTP.
        #[arg(long, value_name = "PATH")]
        file: Option<String>,
    },

    /// Show the metadata of one language pack.
    Show {
        /// Language code, e.g. "fr".
        code: String,
        #[command(flatten)]
        target: Target,
        /// Read the index from a local file template instead of HTTP.
        #[arg(long, value_name = "PATH")]
        file: Option<String>,
    },
}

/// Version and loader settings after merging flags over config.
pub(crate) struct Resolved {
    pub version: String,
    pub cfg: LangpackConfig,
}

impl Resolved {
    fn new(target: &Target, mut cfg: LangpackConfig) -> Result<Self> {
        if let Some(link) = &target.link {
            cfg.pack_link = link.clone();
        }
        let version = target
            .app_version
            .clone()
            .or_else(|| cfg.version.clone())
            .filter(|v| !v.is_empty())
            .context("no application version: pass --app-version or set `version` in config.toml")?;
        Ok(Self { version, cfg })
    }

    pub fn remote_loader(&self) -> Result<RemoteLanguagePackLoader<StaticVersion>> {
        let mut loader =
            RemoteLanguagePackLoader::new(self.cfg.template()?, StaticVersion::new(&self.version))
                .with_http_options(self.cfg.http_options());
        if let Some(policy) = self.cfg.retry_policy() {
            loader = loader.with_retry(policy);
        }
        Ok(loader)
    }

    pub fn file_loader(&self, path: &str) -> Result<FileLanguagePackLoader<StaticVersion>> {
        Ok(FileLanguagePackLoader::new(
            LocatorTemplate::for_path(path)?,
            StaticVersion::new(&self.version),
        ))
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(cfg)
    }

    pub fn run(self, cfg: LangpackConfig) -> Result<()> {
        match self {
            CliCommand::Resolve { target } => run_resolve(&Resolved::new(&target, cfg)?),
            CliCommand::List { target, json, file } => {
                run_list(&Resolved::new(&target, cfg)?, json, file.as_deref())
            }
            CliCommand::Show { code, target, file } => {
                run_show(&Resolved::new(&target, cfg)?, &code, file.as_deref())
            }
        }
    }
}

#[cfg(test)]
mod tests;
