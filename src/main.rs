use advent_harness::config::{Command, RunArgs};
use advent_harness::utils::{logger, validation::Validate};
use advent_harness::{
    solutions, CliConfig, HarnessConfig, HarnessError, InputKind, LocalInputs, PuzzleRunner,
    Registry, Result, ScaffoldReport,
};
use chrono::Local;
use clap::Parser;
use std::time::Instant;

fn main() {
    let cli = CliConfig::parse();

    let config = match HarnessConfig::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config.display(), e);
            eprintln!("💡 Make sure the file is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level());

    tracing::info!("Starting aoc");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    if let Err(e) = dispatch(&cli, config) {
        report_failure(&e);
        std::process::exit(e.exit_code());
    }
}

fn dispatch(cli: &CliConfig, mut config: HarnessConfig) -> Result<()> {
    let registry = solutions::registry();

    match &cli.command {
        Command::Run(args) => run_day(cli, &config, &registry, args, InputKind::Puzzle),
        Command::Test(args) => run_day(cli, &config, &registry, args, InputKind::Example),
        Command::All => run_all(cli, &config, &registry),
        Command::List => {
            for solution in registry.iter() {
                println!("{:>2}  {}", solution.day(), solution.title());
            }
            Ok(())
        }
        Command::Scaffold(args) => {
            // 命令列覆蓋設定後重新驗證
            args.apply(&mut config);
            config.validate()?;
            let report = config.scaffold()?.generate()?;
            print_scaffold_report(&report);
            Ok(())
        }
    }
}

fn run_day(
    cli: &CliConfig,
    config: &HarnessConfig,
    registry: &Registry,
    args: &RunArgs,
    kind: InputKind,
) -> Result<()> {
    let day = args.resolve_day(&Local::now())?;
    let part = args.part()?;
    let solution = registry.get(day)?;

    let runner = PuzzleRunner::load(
        solution,
        &LocalInputs::new(),
        &args.puzzle_path(config, day),
        &args.example_path(config, day),
    )?
    .with_monitoring(cli.monitor);

    let report = runner.execute(part, kind)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &report.results {
            println!("{}", result);
        }
    }

    Ok(())
}

fn run_all(cli: &CliConfig, config: &HarnessConfig, registry: &Registry) -> Result<()> {
    tracing::info!("Solving {} registered days...", registry.len());
    let start = Instant::now();
    let inputs = LocalInputs::new();

    for solution in registry.iter() {
        let day = solution.day();
        let runner = PuzzleRunner::load(
            solution,
            &inputs,
            &config.puzzle_path(day),
            &config.example_path(day),
        )?
        .with_monitoring(cli.monitor);

        let report = runner.execute(None, InputKind::Puzzle)?;

        println!("{}", solution.title());
        for result in &report.results {
            println!("  {}", result);
        }
        println!("  Runtime: {:?}", report.total_elapsed());
    }

    tracing::info!("✅ All days solved in {:?}", start.elapsed());
    Ok(())
}

fn print_scaffold_report(report: &ScaffoldReport) {
    for entry in &report.entries {
        println!("{}", entry);
    }
}

fn report_failure(e: &HarnessError) {
    // 記錄詳細錯誤信息
    tracing::error!(
        "❌ aoc failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    // 輸出用戶友好的錯誤信息
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}
