use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;
use tracing::error;

use uegen::{
    adapters::{DEFAULT_OUTPUT_DIR, DEFAULT_STORE_FILE},
    api::{BatchPolicy, BatchRequest, GenerationFailurePolicy},
    config::DEFAULT_CONFIG_FILE,
    model::{NetworkConfig, Supi},
};

#[derive(Parser, Debug)]
#[command(name = "uegen")]
#[command(about = "Synthetic 5G UE profile generator", version)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate, store and export a batch of UE profiles
    Generate {
        /// Number of UEs to generate (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Network configuration (TOML). Uses the built-in reference network if not provided
        #[arg(long)]
        config: Option<PathBuf>,

        /// JSON profile store
        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        store: PathBuf,

        /// Directory for the UERANSIM ue_profile_<supi>.yaml files
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// What to do when a single UE cannot be generated (abort, skip)
        #[arg(long, default_value = "abort")]
        on_generation_failure: FailurePolicyArg,

        /// Rounds of replacement generation for UEs lost to duplicate SUPIs
        #[arg(long, default_value_t = 0)]
        conflict_retries: usize,
    },

    /// Write the reference network configuration as TOML
    InitConfig {
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one stored UE profile in the UERANSIM layout
    Show {
        /// SUPI, with or without the imsi- prefix
        supi: String,

        #[arg(long, default_value = DEFAULT_STORE_FILE)]
        store: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FailurePolicyArg {
    Abort,
    Skip,
}

impl From<FailurePolicyArg> for GenerationFailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Abort => GenerationFailurePolicy::Abort,
            FailurePolicyArg::Skip => GenerationFailurePolicy::Skip,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            count,
            config,
            store,
            output_dir,
            on_generation_failure,
            conflict_retries,
        } => {
            let network = match config {
                Some(path) => uegen::config::load_network_config(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => NetworkConfig::reference(),
            };

            let count = usize::try_from(count).context("batch size does not fit this platform")?;
            let request = BatchRequest::new(count)?.with_policy(BatchPolicy {
                on_generation_failure: on_generation_failure.into(),
                conflict_retries,
            });

            let report = uegen::provision(network, &store, &output_dir, &request)
                .context("failed to start provisioning")?;

            let summary = report.summary();
            println!("{}", serde_json::to_string_pretty(&summary)?);

            if let Some(e) = report.error() {
                error!("Provisioning failed: {}", e);
                std::process::exit(1);
            }
        }

        Commands::InitConfig { path, force } => {
            uegen::init_config(&path, force)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("{}", path.display());
        }

        Commands::Show { supi, store } => {
            let supi: Supi = supi.parse().context("invalid SUPI")?;
            let profile = uegen::find_profile(&store, &supi)
                .with_context(|| format!("failed to look up {}", supi.to_imsi_uri()))?;
            print!("{}", uegen::profile_to_yaml(&profile)?);
        }
    }

    Ok(())
}
