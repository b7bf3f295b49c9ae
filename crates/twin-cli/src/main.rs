//! twin CLI: inspect and change the appearance preference

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use twin_engine::{
    Appearance, Config, FileStorage, ManualSignal, RootClasses, ThemePreference, ThemeStore,
};

/// Theme preference manager with a terminal preview
#[derive(Parser)]
#[command(name = "twin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data directory holding config.json and the preference file
    #[arg(long, global = true, default_value = TWIN_DIR)]
    dir: PathBuf,

    /// Override the detected system appearance (light or dark)
    #[arg(long, global = true)]
    system: Option<Appearance>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the preview TUI (default when no command specified)
    Tui,

    /// Print the preference, resolved theme and system appearance
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set the preference (light, dark, dark-blue or auto)
    Set {
        preference: ThemePreference,
    },

    /// Advance to the next preference in cycle order
    Cycle,

    /// List preferences in cycle order
    List,

    /// Create the data directory and a default config
    Init,
}

const TWIN_DIR: &str = ".twin";
const LOG_ENV: &str = "TWIN_LOG";

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(&cli.dir) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };
    if let Some(appearance) = cli.system {
        config.system_appearance = Some(appearance);
    }

    match cli.command {
        None | Some(Commands::Tui) => {
            init_file_logging(&config.log_path(&cli.dir));
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    eprintln!("Failed to create tokio runtime: {e}");
                    std::process::exit(1);
                }
            };
            if let Err(e) = rt.block_on(twin_tui::run_tui(&cli.dir, &config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Show { json }) => {
            init_stderr_logging();
            cmd_show(&cli.dir, &config, json);
        }
        Some(Commands::Set { preference }) => {
            init_stderr_logging();
            cmd_set(&cli.dir, &config, preference);
        }
        Some(Commands::Cycle) => {
            init_stderr_logging();
            cmd_cycle(&cli.dir, &config);
        }
        Some(Commands::List) => {
            init_stderr_logging();
            cmd_list(&cli.dir, &config);
        }
        Some(Commands::Init) => {
            init_stderr_logging();
            cmd_init(&cli.dir);
        }
    }
}

fn load_config(dir: &Path) -> Result<Config, twin_engine::ConfigError> {
    Config::load_or_default(&dir.join("config.json"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// The TUI owns the terminal, so logs go to a file instead.
fn init_file_logging(path: &Path) {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: logging disabled, cannot open {}: {e}", path.display());
            return;
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn system_signal(config: &Config) -> Rc<ManualSignal> {
    Rc::new(
        config
            .system_appearance
            .map_or_else(ManualSignal::detect, ManualSignal::new),
    )
}

/// Store for commands that change the preference.
fn open_store(dir: &Path, config: &Config) -> ThemeStore {
    debug!(dir = %dir.display(), key = %config.storage_key, "Opening theme store");
    ThemeStore::with_key(
        &config.storage_key,
        Box::new(FileStorage::new(config.storage_path(dir))),
        system_signal(config),
        Rc::new(RootClasses::new()),
    )
}

/// Store for read-only commands. Never creates the preference file.
fn inspect_store(dir: &Path, config: &Config) -> ThemeStore {
    debug!(dir = %dir.display(), key = %config.storage_key, "Inspecting theme store");
    ThemeStore::inspect(
        &config.storage_key,
        Box::new(FileStorage::new(config.storage_path(dir))),
        system_signal(config),
        Rc::new(RootClasses::new()),
    )
}

fn warn_if_unsaved(store: &ThemeStore) {
    if !store.persistence_ok() {
        eprintln!("Warning: preference could not be saved; it applies to this session only");
    }
}

fn cmd_show(dir: &Path, config: &Config, json: bool) {
    let store = inspect_store(dir, config);

    if json {
        let output = serde_json::json!({
            "preference": store.preference(),
            "resolved": store.resolved(),
            "system": store.system_appearance(),
            "following_system": store.is_following_system(),
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to serialize: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Preference: {}", store.preference());
    println!("Resolved:   {}", store.resolved());
    println!("System:     {}", store.system_appearance());
}

fn cmd_set(dir: &Path, config: &Config, preference: ThemePreference) {
    let mut store = open_store(dir, config);
    store.set_preference(preference);
    println!("Theme set to {} (resolved: {})", store.preference(), store.resolved());
    warn_if_unsaved(&store);
}

fn cmd_cycle(dir: &Path, config: &Config) {
    let mut store = open_store(dir, config);
    let previous = store.preference();
    let next = store.cycle_preference();
    println!("Theme {previous} -> {next} (resolved: {})", store.resolved());
    warn_if_unsaved(&store);
}

fn cmd_list(dir: &Path, config: &Config) {
    let store = inspect_store(dir, config);
    let current = store.preference();

    for preference in ThemePreference::CYCLE {
        let marker = if preference == current { "*" } else { " " };
        println!("{marker} {:<10} {}", preference.as_str(), preference.label());
    }
}

fn cmd_init(dir: &Path) {
    if let Err(e) = std::fs::create_dir_all(dir) {
        eprintln!("Failed to create {}: {e}", dir.display());
        std::process::exit(1);
    }

    let config_path = dir.join("config.json");
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return;
    }

    match Config::default().save(&config_path) {
        Ok(()) => println!("Created {}", config_path.display()),
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_set_preference() {
        let cli = Cli::try_parse_from(["twin", "set", "dark-blue"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Set {
                preference: ThemePreference::DarkBlue
            })
        ));
        assert_eq!(cli.dir, PathBuf::from(".twin"));
    }

    #[test]
    fn test_parse_rejects_unknown_preference() {
        assert!(Cli::try_parse_from(["twin", "set", "purple"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["twin", "show", "--json", "--system", "dark", "--dir", "/tmp/x"])
            .unwrap();
        assert_eq!(cli.system, Some(Appearance::Dark));
        assert_eq!(cli.dir, PathBuf::from("/tmp/x"));
        assert!(matches!(cli.command, Some(Commands::Show { json: true })));
    }

    fn light_config() -> Config {
        Config {
            system_appearance: Some(Appearance::Light),
            ..Config::default()
        }
    }

    #[test]
    fn test_inspect_store_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("fresh");
        let config = light_config();

        let store = inspect_store(&dir, &config);
        assert_eq!(store.preference(), ThemePreference::Light);
        assert!(!dir.exists());
    }

    #[test]
    fn test_open_store_writes_default_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let config = light_config();

        let mut store = open_store(temp.path(), &config);
        assert!(config.storage_path(temp.path()).exists());
        store.set_preference(ThemePreference::Auto);

        let store = inspect_store(temp.path(), &config);
        assert_eq!(store.preference(), ThemePreference::Auto);
        assert!(store.is_following_system());
    }

    #[test]
    fn test_no_command_defaults_to_tui() {
        let cli = Cli::try_parse_from(["twin"]).unwrap();
        assert!(cli.command.is_none());
    }
}
