// Offline scoring pipeline driver.
//
// Reads a corpus snapshot produced by the ingestion pipeline, runs the full
// scoring pass, and writes the scored corpus plus the contributor graph for
// the web frontend to pick up.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;

use genscope::{
    EngineConfig, OverrideConfig, ProjectRecord, apply_lens, contributor_graph, process_corpus,
};

/// Top-level shape of the ingestion snapshot file.
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

struct Args {
    input: PathBuf,
    overrides: Option<PathBuf>,
    out_dir: PathBuf,
    lens: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut overrides = None;
    let mut out_dir = PathBuf::from("data/out");
    let mut lens = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--overrides" => {
                overrides = Some(PathBuf::from(
                    args.next().context("--overrides needs a file path")?,
                ));
            }
            "--out" => {
                out_dir = PathBuf::from(args.next().context("--out needs a directory path")?);
            }
            "--lens" => {
                lens = Some(args.next().context("--lens needs a lens id")?);
            }
            other if input.is_none() && !other.starts_with("--") => {
                input = Some(PathBuf::from(other));
            }
            other => bail!("unexpected argument: {other}"),
        }
    }

    let input = input.context(
        "usage: genscope-pipeline <projects.json> [--overrides <toml>] [--out <dir>] [--lens <id>]",
    )?;

    Ok(Args {
        input,
        overrides,
        out_dir,
        lens,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", args.input.display()))?;
    info!("loaded {} records from {}", snapshot.projects.len(), args.input.display());

    let override_config = match &args.overrides {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            toml::from_str::<OverrideConfig>(&raw)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => OverrideConfig::default(),
    };

    let config = EngineConfig::default();
    let corpus = process_corpus(snapshot.projects, &override_config, &config)?;

    if let Some(lens_id) = &args.lens {
        let selected = apply_lens(&corpus, lens_id)?;
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let projects_path = args.out_dir.join("projects.json");
    let projects_json = serde_json::json!({ "projects": corpus });
    fs::write(&projects_path, serde_json::to_vec_pretty(&projects_json)?)
        .with_context(|| format!("writing {}", projects_path.display()))?;

    let graph = contributor_graph(&corpus);
    let graph_path = args.out_dir.join("graph.json");
    fs::write(&graph_path, serde_json::to_vec_pretty(&graph)?)
        .with_context(|| format!("writing {}", graph_path.display()))?;

    info!(
        "wrote {} projects and a {}-node graph to {}",
        corpus.len(),
        graph.node_count,
        args.out_dir.display()
    );
    Ok(())
}
