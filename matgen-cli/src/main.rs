use eyre::WrapErr;
use matgen::GeneratorConfig;
use std::io;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // stdout is reserved for the "Saved" lines
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report_saved<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Saved {}", path.display())
}

fn main() -> eyre::Result<()> {
    init_logging();

    let config = GeneratorConfig::default();
    let mut rng = config.rng();
    tracing::debug!(?config, "Generating matrices");

    let mut stdout = io::stdout().lock();
    matgen::generate(&config, &mut rng, |path| report_saved(&mut stdout, path))
        .wrap_err_with(|| {
            format!(
                "Failed to generate matrices into {}",
                config.output_dir.display()
            )
        })?;

    Ok(())
}
