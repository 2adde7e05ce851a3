use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write the configuration file with the
/// resolved backend address.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    println!("⚙️  Initializing obras…");

    if cli.test {
        info(format!(
            "Test mode: configuration not written ({})",
            Config::config_file().display()
        ));
    } else {
        let path = cfg.save()?;
        success(format!("Config file: {}", path.display()));
    }

    println!("🌐 Backend    : {}", cfg.api_url);

    for problem in cfg.validate() {
        crate::ui::messages::warning(problem);
    }

    println!("🎉 obras initialization completed!");
    Ok(())
}
