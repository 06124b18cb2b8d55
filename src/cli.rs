use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;
use serde_json::json;
use twentyfour::catalog::DEFAULT_CACHE_FILE;
use twentyfour::{
    AnswerValidator, CatalogConfig, ExpressionEnumerator, Multiset, ProblemService,
    SolutionCatalog,
};

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

/// Twentyfour - combine numbers with + - * / ^ to reach a target
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Generate, solve and check 24-style arithmetic puzzles")]
#[command(version)]
pub struct CliArgs {
    /// Stored solution catalog
    #[arg(long, default_value = DEFAULT_CACHE_FILE, global = true)]
    pub cache: PathBuf,

    /// Largest number used when building the catalog
    #[arg(long, default_value_t = 10, global = true)]
    pub max_value: u64,

    /// Count of numbers per problem when building the catalog
    #[arg(long, default_value_t = 4, global = true)]
    pub size: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the catalog and store it
    Build {
        /// Rebuild even if a stored catalog exists
        #[arg(long)]
        force: bool,
    },
    /// Print a random problem for the target
    Problem {
        #[arg(allow_hyphen_values = true)]
        target: i64,
    },
    /// Print a random problem for a random reachable target in [min, max)
    Random {
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        min: i64,
        #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
        max: i64,
    },
    /// Find an expression of the numbers that equals the target
    Solve {
        #[arg(required = true)]
        numbers: Vec<u64>,
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
    },
    /// Check an answer against a problem
    Check {
        #[arg(allow_hyphen_values = true)]
        answer: String,
        /// Numbers of the problem, e.g. "5 4 3 2"
        #[arg(short, long)]
        numbers: String,
        #[arg(short, long, allow_hyphen_values = true)]
        target: i64,
    },
    /// List every positive integer the numbers can reach
    Reach {
        #[arg(required = true)]
        numbers: Vec<u64>,
    },
}

impl CliArgs {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            max_value: self.max_value,
            size: self.size,
            ..CatalogConfig::default()
        }
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn load_service(args: &CliArgs) -> Result<ProblemService> {
    let catalog = SolutionCatalog::load_or_build(&args.cache, &args.catalog_config())
        .context("Failed to prepare the solution catalog")?;
    Ok(ProblemService::new(Arc::new(catalog)))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(value).context("Failed to serialize output")?
    );
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Initialize logging
    init_logging(&args.log_level)?;

    match &args.command {
        Command::Build { force } => {
            let catalog = if *force {
                let catalog = SolutionCatalog::build(&args.catalog_config());
                catalog
                    .save(&args.cache)
                    .context("Failed to store the solution catalog")?;
                catalog
            } else {
                SolutionCatalog::load_or_build(&args.cache, &args.catalog_config())
                    .context("Failed to prepare the solution catalog")?
            };
            println!(
                "{} reachable targets stored in {}",
                catalog.len(),
                args.cache.display()
            );
        }
        Command::Problem { target } => {
            let service = load_service(&args)?;
            match service.get_problem(*target) {
                Ok(problem) if args.json => print_json(&problem)?,
                Ok(problem) => println!("{}", problem),
                Err(err) => {
                    warn!("{}", err);
                    println!("{}", err);
                }
            }
        }
        Command::Random { min, max } => {
            let service = load_service(&args)?;
            let problem = service
                .get_problem_with_random_target(*min, *max)
                .context("Failed to pick a random target")?;
            if args.json {
                print_json(&problem)?;
            } else {
                println!("{} -> {}", problem, problem.target);
            }
        }
        Command::Solve { numbers, target } => {
            let service = load_service(&args)?;
            let numbers = Multiset::new(numbers.clone());
            info!("Solving {} -> {}", numbers, target);

            let solution = service.solve(&numbers, *target);
            if args.json {
                print_json(&json!({
                    "numbers": numbers.as_slice(),
                    "target": target,
                    "solution": solution,
                }))?;
            } else {
                match solution {
                    Some(expr) => println!("{} = {}", expr, target),
                    None => {
                        warn!("No matching expression found");
                        println!("Unknown.");
                    }
                }
            }
        }
        Command::Check {
            answer,
            numbers,
            target,
        } => {
            let required = Multiset::from_text(numbers);
            let result = AnswerValidator::new().check(answer, &required, *target);
            if args.json {
                print_json(&result)?;
            } else if result.valid {
                println!("Correct!");
            } else {
                println!("{}", result.reason);
            }
        }
        Command::Reach { numbers } => {
            let reached = ExpressionEnumerator::new().enumerate(numbers);
            if args.json {
                print_json(&reached)?;
            } else {
                for (value, expr) in &reached {
                    println!("{} = {}", expr, value);
                }
            }
        }
    }

    Ok(())
}
