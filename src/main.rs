use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use std::path::PathBuf;
use tfscw::baremetal;
use tfscw::config::ScwConfig;
use tfscw::provider::flatten::AttributeMap;
use tfscw::rdb;
use tfscw::scw::locality::{new_regional_id, new_zoned_id, parse_regional_id, parse_zoned_id};
use tfscw::Meta;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Inspect what the Scaleway provider helpers resolve and store in state
#[derive(Parser, Debug)]
#[command(name = "tfscw", version, about, long_about = None)]
struct Args {
    /// Profile of the scw config file to use
    #[arg(short, long, global = true)]
    profile: Option<String>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a baremetal offer and print its flattened hardware
    Offer {
        /// Zone of the catalog, defaults to the profile's zone
        #[arg(short, long)]
        zone: Option<String>,

        /// Offer name, case-insensitive
        #[arg(long, conflicts_with = "id", required_unless_present = "id")]
        name: Option<String>,

        /// Offer ID
        #[arg(long)]
        id: Option<String>,
    },

    /// Print the flattened IPs of a baremetal server (`<zone>/<id>`)
    Server { id: String },

    /// Print the flattened read replicas of a database instance (`<region>/<id>`)
    RdbInstance { id: String },

    /// Decode a `<locality>/<id>` identifier
    ParseId {
        id: String,

        /// Decode the locality as a region instead of a zone
        #[arg(long)]
        regional: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("tfscw started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("tfscw").join("tfscw.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".tfscw").join("tfscw.log");
    }
    PathBuf::from("tfscw.log")
}

fn to_json(maps: Option<Vec<AttributeMap>>) -> Value {
    maps.map_or(Value::Null, |maps| {
        Value::Array(maps.into_iter().map(Value::Object).collect())
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let output = run(&args).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn load_meta(profile: Option<&str>) -> Result<Meta> {
    let config = ScwConfig::load(profile).context("Failed to load scw config")?;
    Meta::new(&config).context("Invalid provider configuration")
}

async fn run(args: &Args) -> Result<Value> {
    match &args.command {
        Command::ParseId { id, regional } => {
            if *regional {
                let (region, local_id) = parse_regional_id(id)?;
                Ok(json!({"region": region, "id": local_id}))
            } else {
                let (zone, local_id) = parse_zoned_id(id)?;
                Ok(json!({"zone": zone, "id": local_id}))
            }
        },
        Command::Offer { zone, name, id } => {
            let meta = load_meta(args.profile.as_deref())?;

            let mut data = serde_json::Map::new();
            if let Some(zone) = zone {
                data.insert("zone".to_string(), Value::String(zone.clone()));
            }
            let (api, zone) = baremetal::baremetal_api_with_zone(&meta, &data)?;
            tracing::info!("Using baremetal API in {}", zone);

            let offer = match (name, id) {
                (Some(name), _) => baremetal::baremetal_offer_by_name(&api, &zone, name).await?,
                (None, Some(id)) => baremetal::baremetal_offer_by_id(&api, &zone, id).await?,
                (None, None) => anyhow::bail!("either --name or --id is required"),
            };

            Ok(json!({
                "id": offer.id,
                "name": offer.name,
                "stock": offer.stock,
                "bandwidth": offer.bandwidth,
                "cpu": to_json(baremetal::flatten_baremetal_cpus(offer.cpus.as_deref())),
                "memory": to_json(baremetal::flatten_baremetal_memory(offer.memories.as_deref())),
                "disk": to_json(baremetal::flatten_baremetal_disks(offer.disks.as_deref())),
            }))
        },
        Command::Server { id } => {
            let meta = load_meta(args.profile.as_deref())?;
            let (api, zone, server_id) = baremetal::baremetal_api_with_zone_and_id(&meta, id)?;
            tracing::info!("Reading baremetal server {} in {}", server_id, zone);

            let server = api
                .get_server(&zone, &server_id)
                .await
                .with_context(|| format!("Failed to read server {}", id))?;

            Ok(json!({
                "id": new_zoned_id(&zone, &server.id),
                "name": server.name,
                "offer_id": server.offer_id,
                "ips": to_json(baremetal::flatten_baremetal_ips(server.ips.as_deref())),
            }))
        },
        Command::RdbInstance { id } => {
            let meta = load_meta(args.profile.as_deref())?;
            let (api, region, instance_id) = rdb::rdb_api_with_region_and_id(&meta, id)?;
            tracing::info!("Reading rdb instance {} in {}", instance_id, region);

            let instance = api
                .get_instance(&region, &instance_id)
                .await
                .with_context(|| format!("Failed to read instance {}", id))?;

            Ok(json!({
                "id": new_regional_id(&region, &instance.id),
                "name": instance.name,
                "read_replicas": to_json(rdb::flatten_rdb_instance_read_replicas(
                    instance.read_replicas.as_deref()
                )),
            }))
        },
    }
}
