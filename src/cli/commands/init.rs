use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the JSON data file, seeded with the bundled default dataset
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing paysched…");

    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("🎉 paysched initialization completed!");
    Ok(())
}
