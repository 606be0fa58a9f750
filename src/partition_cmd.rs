use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use moira_ring::{RingConfig, partition_ring};

use crate::cli::PartitionArgs;

/// Run the `partition` subcommand.
pub fn run(args: PartitionArgs) -> Result<()> {
    let mut config = RingConfig::new()
        .with_allow_repeats(args.allow_repeats)
        .with_max_attempts(Some(args.max_attempts))
        .with_anchor_attraction(args.anchor_attraction);
    if let Some(anchor) = args.anchor {
        config = config.with_anchor(anchor);
    }

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let ring = partition_ring(&args.multiplicities, &config, &mut rng)?;
    info!(slots = ring.len(), "ring closed");

    let line: Vec<String> = ring.iter().map(|state| state.to_string()).collect();
    println!("{}", line.join(" "));
    Ok(())
}
