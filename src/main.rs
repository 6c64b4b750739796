use std::fs::File;
use std::sync::Arc;

use tagcalc::app::App;
use tagcalc::config::Config;
use tagcalc::suggest::{HttpSource, SuggestionWorker};
use tagcalc::ui::TuiManager;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    let source = HttpSource::new(&config)?;
    let worker = SuggestionWorker::spawn(source);

    let mut app = App::new(&config);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app, &worker, &config)?;

    Ok(())
}

// Stdout belongs to the TUI, so tracing output goes to a file and only when
// RUST_LOG asks for it.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    if let Ok(log_file) = File::create("tagcalc.log") {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .init();
    }
}
