use artistsort::cli::Cli;
use artistsort::config::Settings;
use artistsort::console::{Console, Terminal};
use artistsort::file_utils::LocalFs;
use artistsort::logger::Logger;
use artistsort::organizer::Organizer;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // .env is optional
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            let logger = Logger::new(Settings::default().log_config());
            logger.error(&format!("Error loading settings: {e:#}"));
            pause(&mut Terminal::new(logger), true);
            return ExitCode::FAILURE;
        }
    };
    let logger = Logger::new(settings.log_config());
    let mut console = Terminal::new(logger.clone());

    let Some(root) = cli.root else {
        logger.error("Drag and drop a folder onto this program.");
        pause(&mut console, settings.wait_for_key);
        return ExitCode::FAILURE;
    };

    let result = Organizer::new(&LocalFs, &mut console, &logger, &settings).run(&root);
    let code = match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            logger.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    };

    pause(&mut console, settings.wait_for_key);
    code
}

fn pause(console: &mut dyn Console, enabled: bool) {
    if !enabled {
        return;
    }
    if let Err(e) = console.wait_for_key() {
        eprintln!("{e:#}");
    }
}
