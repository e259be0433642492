use clap::{Parser, Subcommand};
use ferrous_whois_domain::CliOverrides;
use tracing::{debug, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "ferrous-whois")]
#[command(version)]
#[command(about = "Ferrous WHOIS - domain registration lookups with referral following")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Replace the configured server list with the one in FILE
    #[arg(long, value_name = "FILE")]
    servers: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Network timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the raw WHOIS response for a domain
    Lookup {
        domain: String,

        /// Query this server instead of the one registered for the zone
        #[arg(long)]
        host: Option<String>,
    },

    /// Print parsed registration data as JSON
    Info {
        domain: String,

        /// Query this server instead of the one registered for the zone
        #[arg(long)]
        host: Option<String>,
    },

    /// Check whether a domain is free to register
    Available { domain: String },

    /// List registry servers in matching order
    Servers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        timeout_secs: cli.timeout,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!("Starting Ferrous WHOIS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::WhoisServices::new(&config);
    let use_cases = di::UseCases::new(&services);

    if let Some(path) = cli.servers.as_deref() {
        let count = use_cases.reload_servers.execute(path)?;
        info!(count, "Using server list from {}", path);
    }

    match cli.command {
        Command::Lookup { domain, host } => {
            let endpoint = host.map(|h| services.ad_hoc_endpoint(&domain, &h));
            match use_cases.lookup_domain.execute(&domain, endpoint).await? {
                Some(response) => print!("{}", response.text),
                None => anyhow::bail!("No response received for {}", domain),
            }
        }
        Command::Info { domain, host } => {
            let endpoint = host.map(|h| services.ad_hoc_endpoint(&domain, &h));
            let info = use_cases.get_domain_info.execute(&domain, endpoint).await?;
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Command::Available { domain } => {
            let available = use_cases.check_availability.execute(&domain).await?;
            println!("{}", if available { "available" } else { "registered" });
        }
        Command::Servers => {
            for endpoint in services.registry.servers() {
                let kind = if endpoint.centralized {
                    "centralized"
                } else {
                    "referral"
                };
                println!(".{:<12} {:<32} {}", endpoint.zone, endpoint.host, kind);
            }
        }
    }

    Ok(())
}
