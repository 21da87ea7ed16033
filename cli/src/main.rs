use anyhow::Result;
use clap::{Parser, Subcommand};
use env_utils::setup_logging;
use log::{error, LevelFilter};

mod commands;

/// One-shot provisioning and inspection commands for the model deployment pipeline
#[derive(Parser, Debug)]
#[command(name = "mlops", version = env!("APP_VERSION"), about)]
struct Cli {
    /// Log progress at info level (LOG_LEVEL takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Timeout in seconds for each AWS API call
    #[arg(long, global = true, default_value_t = 10, env = "API_TIMEOUT_SECS")]
    api_timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the experiment and a trial named after a commit
    CreateTrial {
        /// Experiment name, e.g. mlops-demo
        experiment: String,
        /// Commit hash, abbreviated to 7 characters for the trial name
        commit: String,
    },
    /// Copy the training data set into <prefix>/data/
    PrepData {
        bucket: String,
        prefix: String,
        #[arg(long)]
        source_bucket: String,
        #[arg(long, default_value = "aim362/data/")]
        source_prefix: String,
    },
    /// Copy the validation split into <prefix>/monitoring/baselining/data/
    PrepBaseline { bucket: String, prefix: String },
    /// Send one payload to an endpoint and print the raw prediction
    Invoke {
        endpoint: String,
        payload: String,
        #[arg(long, default_value = env_common::DEFAULT_CONTENT_TYPE)]
        content_type: String,
    },
    /// Print the deployment a function alias or version points at
    Resolve {
        function: String,
        #[arg(long, default_value = "live")]
        qualifier: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = setup_logging(level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let timeout = std::time::Duration::from_secs(cli.api_timeout);

    match cli.command {
        Commands::CreateTrial { experiment, commit } => {
            commands::handle_create_trial(timeout, &experiment, &commit).await
        }
        Commands::PrepData {
            bucket,
            prefix,
            source_bucket,
            source_prefix,
        } => {
            commands::handle_prep_data(timeout, &bucket, &prefix, &source_bucket, &source_prefix)
                .await
        }
        Commands::PrepBaseline { bucket, prefix } => {
            commands::handle_prep_baseline(timeout, &bucket, &prefix).await
        }
        Commands::Invoke {
            endpoint,
            payload,
            content_type,
        } => commands::handle_invoke(timeout, &endpoint, &payload, &content_type).await,
        Commands::Resolve {
            function,
            qualifier,
        } => commands::handle_resolve(timeout, &function, &qualifier).await,
    }
}
