use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::Env;
use tokio::task::JoinHandle;

use cvet::config::Config;
use cvet::{vet, ParseOptions, Response};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    // RUST_LOG wins over the configured level
    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    if let Some(path) = &config.config_path {
        log::debug!("Loaded config file: {}", path.display());
    }

    let responses = if config.paths.is_empty() {
        vec![Response::usage(&program_name())]
    } else {
        vet_all(&config).await
    };

    let mut stdout = std::io::stdout().lock();
    for response in responses {
        let json = response
            .to_json(config.pretty)
            .context("Failed to serialize response")?;
        writeln!(stdout, "{}", json).context("Failed to write response to stdout")?;
    }
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}

/// Vet every configured file concurrently; responses keep argument order
async fn vet_all(config: &Config) -> Vec<Response> {
    let tag_files = config.paths.len() > 1;

    let tasks: Vec<(PathBuf, JoinHandle<Response>)> = config
        .paths
        .iter()
        .map(|path| {
            let task = tokio::spawn(vet_file(path.clone(), config.parse_options));
            (path.clone(), task)
        })
        .collect();

    let mut responses = Vec::with_capacity(tasks.len());
    for (path, task) in tasks {
        let response = match task.await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Vetting task for {} failed: {}", path.display(), e);
                Response::unparsable(e)
            }
        };

        responses.push(if tag_files {
            response.with_file(path.display().to_string())
        } else {
            response
        });
    }

    responses
}

async fn vet_file(path: PathBuf, options: ParseOptions) -> Response {
    let input = match tokio::fs::read(&path).await {
        Ok(input) => input,
        Err(e) => {
            log::warn!("Failed to read {}: {}", path.display(), e);
            return Response::unreadable(e);
        }
    };

    match tokio::task::spawn_blocking(move || vet(&input, &options)).await {
        Ok(Ok(result)) => {
            if !result.is_clean() {
                log::warn!("{} has incomplete rows", path.display());
            }
            log::info!(
                "Vetted {}: {} valid, {} invalid, {} dropped",
                path.display(),
                result.valid_records.len(),
                result.invalid_records.len(),
                result.dropped_rows
            );
            Response::vetted(result)
        }
        Ok(Err(e)) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            Response::unparsable(e)
        }
        Err(e) => {
            log::error!("Vetting {} panicked: {}", path.display(), e);
            Response::unparsable(e)
        }
    }
}

fn program_name() -> String {
    std::env::args().next().unwrap_or_else(|| "cvet".to_string())
}
