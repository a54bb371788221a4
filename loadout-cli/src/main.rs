mod config;
mod save;

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loadout_core::{
    eligible_pool, Category, LoadoutRandomiser, PlayerId, RandomiserError, RandomiserSettings,
    RegistrySnapshot, Result,
};

use config::CliConfig;
use save::SaveFile;

#[derive(Debug, Parser)]
#[command(
    name = "loadout-randomiser",
    version,
    about = "Random equipment loadouts from a player's unlocked items"
)]
struct Args {
    /// Save file holding each player's inventory and loadout. Remembered
    /// for later runs.
    #[arg(long)]
    save: Option<PathBuf>,

    /// JSON list of item names registered by extensions.
    #[arg(long)]
    registry: Option<PathBuf>,

    #[arg(long, default_value = "one")]
    player: PlayerId,

    #[arg(long)]
    seed: Option<u64>,

    /// Store the new loadout back into the save file.
    #[arg(long, default_value_t = false)]
    write: bool,

    /// Print the items eligible for random selection instead of rolling.
    #[arg(long, default_value_t = false)]
    show_pool: bool,

    /// Limit --show-pool to one category (weapon, charm or super).
    #[arg(long, requires = "show_pool")]
    category: Option<Category>,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "loadout_core=debug,loadout_cli=debug"
    } else {
        "loadout_core=info,loadout_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn pool_report(
    save: &SaveFile,
    snapshot: &RegistrySnapshot,
    player: PlayerId,
    only: Option<Category>,
) -> Result<String> {
    let record = save.player(player)?;
    let mut report = String::new();
    for category in Category::ALL {
        if only.is_some_and(|c| c != category) {
            continue;
        }
        let owned = match category {
            Category::Weapon => &record.inventory.weapons,
            Category::Charm => &record.inventory.charms,
            Category::Super => &record.inventory.supers,
        };
        let pool = eligible_pool(category, owned.iter().cloned(), snapshot);
        report.push_str(&format!("{category} ({}):\n", pool.len()));
        for id in pool {
            report.push_str(&format!("  {id}\n"));
        }
    }
    Ok(report)
}

/// Runs one invocation and returns what should be printed. Paths that were
/// used are recorded in `cfg`.
fn run(args: Args, cfg: &mut CliConfig) -> Result<String> {
    let save_path = args.save.or_else(|| cfg.save_path.clone()).ok_or_else(|| {
        RandomiserError::Config("no save file given and none remembered; pass --save".to_string())
    })?;
    let registry_path = args.registry.or_else(|| cfg.registry_path.clone());

    let mut save = SaveFile::load(&save_path)?;
    let snapshot = match &registry_path {
        Some(path) => RegistrySnapshot::load(path)?,
        None => RegistrySnapshot::new(),
    };

    let output = if args.show_pool {
        pool_report(&save, &snapshot, args.player, args.category)?
    } else {
        let settings = RandomiserSettings { seed: args.seed };
        let loadout = {
            let mut randomiser = LoadoutRandomiser::new(&save, &snapshot, &save, &settings);
            randomiser.randomize(args.player)?
        };

        if args.write {
            save.set_loadout(args.player, &loadout);
            save.write(&save_path)?;
            info!(path = %save_path.display(), "saved loadout");
        }
        loadout.to_string()
    };

    cfg.save_path = Some(save_path);
    cfg.registry_path = registry_path;

    Ok(output)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);
    info!("Loadout randomiser loaded");

    let cfg_path = CliConfig::default_path();
    let mut cfg = cfg_path
        .as_deref()
        .map(CliConfig::load_from)
        .unwrap_or_default();

    match run(args, &mut cfg) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }

    if let Some(path) = &cfg_path {
        cfg.store(path);
    }
}
