use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` 優先；否則使用 `level` 或 verbose 預設值
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = match (verbose, level) {
        (true, _) => "advent_harness=debug,info".to_string(),
        (false, Some(level)) => format!("advent_harness={}", level),
        (false, None) => "advent_harness=info".to_string(),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // stdout 只輸出答案，日誌寫到 stderr
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
