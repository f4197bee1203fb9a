use clap::Parser;
use scouter_cli::log_dir::detect_log_directory;
use scouter_cli::logging::init_logging;
use scouter_cli::{Cli, FileConfig, Settings};
use scouter_core::{HttpTransport, Pipeline, latest_log_file};

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = init_logging();

    let cli = Cli::parse();
    let file = FileConfig::load(cli.config.as_ref()).map_err(fatal)?;
    let settings = Settings::resolve(cli, file, detect_log_directory).map_err(fatal)?;

    print_license_notice();
    let transport =
        HttpTransport::new(&settings.api_base, &settings.scout.session).map_err(fatal)?;
    tracing::info!(
        "Scouting to {}/scout/{}",
        settings.api_base.trim_end_matches('/'),
        settings.scout.session
    );

    let log_file = latest_log_file(&settings.log_directory).map_err(fatal)?;
    tracing::info!(path = %log_file.display(), "Latest file");

    let pipeline = Pipeline::new(&settings.scout, transport);

    // Either way the pipeline future is dropped here, closing the log file
    tokio::select! {
        result = pipeline.run(&log_file) => result.map_err(fatal),
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Interrupted, shutting down");
            Ok(())
        }
    }
}

fn fatal(err: impl std::fmt::Display) -> String {
    tracing::error!("{err}");
    err.to_string()
}

fn print_license_notice() {
    tracing::info!("This software is licensed under the terms of the GNU General Public License v3.0.");
    tracing::info!(
        "Source code and full license is available at https://github.com/Sidiousious/turtlesubmitter"
    );
}
