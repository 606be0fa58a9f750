use std::fs;

use anyhow::{Context, Result};
use petgraph::dot::Dot;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use moira_chain::MarkovChain;
use moira_construct::{TransitionMatrix, iterative_scaling, ring_matrix};

use crate::cli::GenerateArgs;
use crate::config::MoiraConfig;
use crate::convert::{self, Method};

/// JSON artifact describing a generated chain.
#[derive(Serialize)]
struct ChainArtifact<'a> {
    labels: &'a [String],
    target_stationary: &'a [f64],
    transition_matrix: Vec<Vec<f64>>,
    realized_stationary: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<Vec<&'a str>>,
}

/// Run the full generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    // Step 1: Load configuration
    let raw = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config: {}", args.config.display()))?;
    let config: MoiraConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config: {}", args.config.display()))?;
    convert::validate_chain(&config.chain)?;

    // Step 2: Create seeded RNG (CLI seed wins over config seed)
    let mut rng = match args.seed.or(config.seed) {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    // Step 3: Build the transition matrix
    let method = convert::parse_method(&config.construct.method)?;
    let matrix = match method {
        Method::Scaling => {
            let cfg = convert::build_scaling_config(&config.construct);
            info!(
                rounds = cfg.rounds(),
                "constructing matrix by iterative scaling"
            );
            iterative_scaling(&config.chain.stationary, &cfg, &mut rng)
                .context("iterative scaling failed")?
        }
        Method::Ring => {
            let cfg = convert::build_ring_config(&config.construct, &config.chain.labels)?;
            info!(
                ring_length = config.construct.ring_length,
                "constructing matrix by ring partition"
            );
            ring_matrix(
                &config.chain.stationary,
                config.construct.ring_length,
                &cfg,
                &mut rng,
            )
            .context("ring construction failed")?
        }
    };

    // Step 4: Wrap in a labelled chain
    let chain =
        MarkovChain::new(matrix, config.chain.labels.clone()).context("failed to build chain")?;
    info!(n_states = chain.n_states(), "chain ready");

    // Step 5: Optional sample sequence
    let sample = if config.output.sample_length > 0 {
        Some(chain.sample(config.output.sample_length, &mut rng))
    } else {
        None
    };

    // Step 6: Serialize the artifact
    let artifact = ChainArtifact {
        labels: chain.labels(),
        target_stationary: &config.chain.stationary,
        transition_matrix: matrix_rows(chain.matrix()),
        realized_stationary: chain.stationary().to_vec(),
        sample,
    };
    let json = serde_json::to_string_pretty(&artifact).context("failed to serialize chain")?;

    // Step 7: Write the chain JSON (stdout when no path is set)
    match args.output.or(config.output.path) {
        Some(path) => {
            fs::write(&path, &json)
                .with_context(|| format!("failed to write chain: {}", path.display()))?;
            info!(path = %path.display(), "chain written");
        }
        None => println!("{json}"),
    }

    // Step 8: Optional DOT export of the transition graph
    if let Some(ref dot_path) = config.output.dot {
        let graph = chain.graph(config.output.dot_threshold);
        let dot = format!("{}", Dot::new(&graph));
        fs::write(dot_path, dot)
            .with_context(|| format!("failed to write graph: {}", dot_path.display()))?;
        info!(path = %dot_path.display(), "transition graph written");
    }

    Ok(())
}

/// Row-major copy of the matrix for serialization.
fn matrix_rows(matrix: &TransitionMatrix) -> Vec<Vec<f64>> {
    matrix
        .probs()
        .rows()
        .into_iter()
        .map(|row| row.to_vec())
        .collect()
}
