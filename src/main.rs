use abstract_factory::{DemoConfig, FactoryError, application::Demo};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demo failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), FactoryError> {
    let config = DemoConfig::from_env()?;
    let demo = Demo::new(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out)
}
