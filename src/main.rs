//! CLI entry point for linecount

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use linecount::{CounterConfig, JsonFormatter, LineCounter, OutputConfig, SuffixSet, TextFormatter};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "linecount")]
#[command(about = "Count lines of code in C and C++ source trees")]
#[command(version)]
struct Args {
    /// Directories to walk (default: src, include/private, include/public/GameForge)
    roots: Vec<PathBuf>,

    /// File suffix to count, e.g. ".cpp" (can be used multiple times;
    /// default: .hpp .cpp .h .c)
    #[arg(short = 'e', long = "ext", value_name = "SUFFIX")]
    ext: Vec<String>,

    /// Follow symbolic links (link loops are reported as errors)
    #[arg(short = 'L', long = "follow-links")]
    follow_links: bool,

    /// Honor .gitignore/.ignore files and skip hidden entries
    #[arg(short = 'g', long = "gitignore")]
    gitignore: bool,

    /// Keep counting after errors, report them at the end and exit non-zero
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Number of parallel counting workers
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "1")]
    jobs: usize,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Only print the total
    #[arg(short = 'q', long = "quiet", conflicts_with = "json")]
    quiet: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn counter_config(&self) -> CounterConfig {
        let mut config = CounterConfig {
            follow_links: self.follow_links,
            respect_gitignore: self.gitignore,
            keep_going: self.keep_going,
            parallel_workers: self.jobs,
            ..Default::default()
        };
        if !self.roots.is_empty() {
            config.roots = self.roots.clone();
        }
        if !self.ext.is_empty() {
            config.suffixes = SuffixSet::new(&self.ext);
        }
        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = args.counter_config();
    if config.suffixes.is_empty() {
        eprintln!("linecount: no file suffixes to count");
        process::exit(1);
    }
    log::debug!("counting {} files under {:?}", config.suffixes, config.roots);

    let counter = LineCounter::new(config);
    let result = if args.json {
        counter.run(&mut JsonFormatter::stdout())
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            quiet: args.quiet,
        };
        counter.run(&mut TextFormatter::stdout(output_config))
    };

    match result {
        Ok(summary) if summary.has_errors() => {
            for e in &summary.errors {
                eprintln!("linecount: {}", e);
            }
            eprintln!(
                "linecount: {} error(s) while counting, total is incomplete",
                summary.errors.len()
            );
            process::exit(1);
        }
        Ok(_) => {}
        Err(e) => {
            eprintln!("linecount: {}", e);
            process::exit(1);
        }
    }
}
