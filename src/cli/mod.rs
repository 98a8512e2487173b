use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::entities::label::{DEFAULT_MEMO_ENTRIES, LabelPipeline};
use crate::error::MedGuideError;
use crate::render;
use crate::sources::local_names::LocalNameList;
use crate::sources::openfda::OpenFdaClient;
use crate::utils::cache::MemoCache;

pub(crate) mod interactive;

#[derive(Debug, Parser)]
#[command(
    name = "medguide",
    version,
    about = "Drug name suggestions and patient label instructions from openFDA"
)]
pub struct Cli {
    /// JSON file with a static drug-name list used for local suggestions.
    #[arg(long, global = true, env = "MEDGUIDE_NAMES_FILE", value_name = "PATH")]
    pub names_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest drug names matching free-text input.
    Suggest {
        /// Free-text input, typically the first letters of a name.
        text: String,

        /// Emit the candidate list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Fetch patient instructions for one drug name.
    Get {
        /// Brand or generic drug name.
        name: String,

        /// Emit the record as JSON (null when no data is found).
        #[arg(long)]
        json: bool,
    },
    /// Prompt loop: typed text lists suggestions, `get <name>` fetches.
    Interactive,
}

fn build_pipeline(names_file: Option<&Path>) -> Result<LabelPipeline, MedGuideError> {
    let client = OpenFdaClient::new()?;
    // A configured-but-unloadable names file is fatal here, before any
    // command runs; without the flag local matching is simply skipped.
    let local_names = names_file.map(LocalNameList::load).transpose()?;
    if let Some(list) = &local_names {
        tracing::debug!(names = list.len(), "loaded local name list");
    }
    Ok(LabelPipeline::new(
        client,
        local_names,
        MemoCache::new(DEFAULT_MEMO_ENTRIES),
        MemoCache::new(DEFAULT_MEMO_ENTRIES),
    ))
}

pub async fn run(cli: Cli) -> anyhow::Result<String> {
    let mut pipeline = build_pipeline(cli.names_file.as_deref())?;
    match cli.command {
        Commands::Suggest { text, json } => {
            let candidates = pipeline.resolve_candidates(&text).await;
            if json {
                Ok(render::json::to_pretty(&candidates)?)
            } else {
                Ok(render::markdown::render_suggestions(
                    text.trim(),
                    &candidates,
                )?)
            }
        }
        Commands::Get { name, json } => {
            let record = pipeline.fetch_record(&name).await;
            if json {
                return Ok(render::json::to_pretty(&record)?);
            }
            match record {
                Some(record) => Ok(render::markdown::render_label(name.trim(), &record)?),
                None => Ok(render::markdown::render_no_record(name.trim())),
            }
        }
        Commands::Interactive => unreachable!("interactive mode is routed in main"),
    }
}

pub async fn run_interactive(cli: Cli) -> anyhow::Result<()> {
    let pipeline = build_pipeline(cli.names_file.as_deref())?;
    interactive::run(pipeline).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn names_file_flag_is_accepted_before_the_subcommand() {
        let cli = Cli::parse_from(["medguide", "--names-file", "names.json", "suggest", "met"]);
        assert_eq!(
            cli.names_file.as_deref(),
            Some(std::path::Path::new("names.json"))
        );
        assert!(matches!(cli.command, Commands::Suggest { .. }));
    }

    #[test]
    fn get_accepts_json_flag() {
        let cli = Cli::parse_from(["medguide", "get", "Aspirin", "--json"]);
        match cli.command {
            Commands::Get { name, json } => {
                assert_eq!(name, "Aspirin");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[tokio::test]
    async fn run_fails_fast_on_missing_names_file() {
        let cli = Cli::parse_from([
            "medguide",
            "--names-file",
            "/nonexistent/names.json",
            "suggest",
            "met",
        ]);
        let err = run(cli).await.expect_err("startup should fail");
        let guide_err = err
            .downcast_ref::<MedGuideError>()
            .expect("library error at the boundary");
        assert!(matches!(guide_err, MedGuideError::NamesFile { .. }));
    }
}
