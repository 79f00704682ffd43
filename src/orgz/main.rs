use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use orgz::config::OrgzConfig;
use orgz::error::Result;
use orgz::menu::console::StdConsole;
use orgz::menu::Menu;
use orgz::store::fs::FileStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "orgz", version, about = "A menu-driven personal organizer for the terminal")]
struct Cli {
    /// Directory where collection files are stored
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli);

    let config = OrgzConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir);

    Menu::new(store, StdConsole::new(), config.export_dir()).run()
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("ORGZ_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let proj_dirs =
        ProjectDirs::from("com", "orgz", "orgz").expect("Could not determine data dir");
    proj_dirs.data_dir().to_path_buf()
}
