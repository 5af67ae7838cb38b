use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Фильтр для `-v`: сначала отладка своих крейтов, затем трассировка всего.
fn verbosity_directives(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("warn,ideas_client=debug,ideas_cli=debug"),
        _ => Some("trace"),
    }
}

/// Флаг `-v` важнее уровня из окружения; нераспознанный уровень даёт `warn`.
fn build_filter(verbose: u8, default_level: &str) -> EnvFilter {
    if let Some(directives) = verbosity_directives(verbose) {
        return EnvFilter::new(directives);
    }
    EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Логи пишутся в stderr, чтобы не смешиваться с выводом `list --json`.
pub(crate) fn init_logging(default_level: &str, verbose: u8) -> Result<()> {
    fmt()
        .with_env_filter(build_filter(verbose, default_level))
        .with_target(verbose > 0)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(())
}
