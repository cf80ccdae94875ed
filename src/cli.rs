use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use maketen::{ExpressionSolver, SolverConfig};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Maketen - Combine numbers with arithmetic to reach a target
#[derive(Parser, Debug)]
#[command(name = "maketen")]
#[command(
    about = "Find every arithmetic expression that uses each number once and equals the target"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, each used exactly once
    #[arg(required = true, allow_negative_numbers = true)]
    pub operands: Vec<f64>,

    /// Target value to reach
    #[arg(short, long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub target: f64,

    /// Allow the power operator
    #[arg(short, long)]
    pub power: bool,

    /// Only search the numbers in the given order
    #[arg(long)]
    pub no_permutate: bool,

    /// Print `*` and `/` instead of `×` and `÷`
    #[arg(long)]
    pub ascii: bool,

    /// Relative tolerance when comparing a result to the target
    #[arg(long, default_value_t = 1e-12, allow_negative_numbers = true)]
    pub epsilon: f64,

    /// Search orderings on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Only print the number of solutions
    #[arg(short, long)]
    pub count: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub operands: Vec<f64>,
    pub target: f64,
    pub solver: SolverConfig,
    pub count_only: bool,
    pub log_level: LogLevel,
}

impl CliArgs {
    pub fn into_config(self) -> CliConfig {
        CliConfig {
            operands: self.operands,
            target: self.target,
            solver: SolverConfig {
                use_power: self.power,
                permutate: !self.no_permutate,
                use_display_glyphs: !self.ascii,
                epsilon: self.epsilon,
                parallel: !self.sequential,
            },
            count_only: self.count,
            log_level: self.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args();

    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(config.solver);

    info!(
        "Searching for expressions using {:?} that equal {}",
        config.operands, config.target
    );

    let progress = |index: usize, total: usize, found: usize| {
        info!("Ordering {}/{}: {} solution(s)", index + 1, total, found);
    };

    let expressions = solver
        .solve_with_progress(&config.operands, config.target, &progress)
        .context("Search failed")?;

    if config.count_only {
        println!("{}", expressions.len());
    } else if expressions.is_empty() {
        warn!("No matching expression found");
        println!("No solution.");
    } else {
        for expr in &expressions {
            println!("{} = {}", expr, config.target);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::try_parse_from(["maketen", "8", "1", "1", "5"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.operands, vec![8.0, 1.0, 1.0, 5.0]);
            assert_eq!(args.target, 10.0);
            assert!(!args.power);
            assert!(!args.no_permutate);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_flags() {
        let args = CliArgs::try_parse_from([
            "maketen",
            "-t",
            "-4",
            "--power",
            "--no-permutate",
            "--ascii",
            "--sequential",
            "3",
            "-7",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.operands, vec![3.0, -7.0]);
            assert_eq!(args.target, -4.0);

            let config = args.into_config();
            assert!(config.solver.use_power);
            assert!(!config.solver.permutate);
            assert!(!config.solver.use_display_glyphs);
            assert!(!config.solver.parallel);
        }
    }

    #[test]
    fn test_cli_args_require_operands() {
        assert!(CliArgs::try_parse_from(["maketen"]).is_err());
        assert!(CliArgs::try_parse_from(["maketen", "1", "x"]).is_err());
    }

    #[test]
    fn test_negative_epsilon_fails_the_search() {
        let args = CliArgs::try_parse_from(["maketen", "--epsilon", "-1", "1", "2"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            let config = args.into_config();
            let solver = ExpressionSolver::new(config.solver);
            assert!(solver.solve(&config.operands, config.target).is_err());
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
