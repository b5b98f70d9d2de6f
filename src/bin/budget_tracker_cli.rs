use budget_tracker::cli::{output, shell};
use budget_tracker::config::{Config, ConfigManager};

fn main() {
    budget_tracker::init();

    let config = match ConfigManager::new().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            output::warning(format!("Falling back to default configuration: {err}"));
            Config::default()
        }
    };

    if let Err(err) = shell::run_cli(config) {
        output::error(err);
        std::process::exit(1);
    }
}
