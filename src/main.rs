//! CLI entry point for flatls

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::{Parser, ValueEnum};
use flatls::{
    Lister, LongFormatter, OutputConfig, SortEntry, SortKey, WalkerConfig, print_json, print_plain,
};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "flatls")]
#[command(about = "List every file under a directory, flat and sorted")]
#[command(version)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Sort by KEY: name, size, isdir, ctime or mtime, descending with
    /// KEY:desc. Repeatable; later keys break ties. name:desc reverses the
    /// entire listing.
    #[arg(short = 's', long = "sort", value_name = "KEY[:desc]", value_parser = parse_sort_entry)]
    sort: Vec<SortEntry>,

    /// Long output: size and modification time columns
    #[arg(short = 'l', long = "long", conflicts_with = "json")]
    long: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Only show files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only show files modified longer than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Follow symbolic links (no cycle detection)
    #[arg(long = "follow-symlinks")]
    follow_symlinks: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Parse a sort argument like "size", "mtime:desc" or "name:asc".
/// Unknown keys and directions are rejected, never silently dropped.
fn parse_sort_entry(s: &str) -> Result<SortEntry, String> {
    let (key_str, reverse) = match s.split_once(':') {
        Some((k, "desc")) => (k, true),
        Some((k, "asc")) => (k, false),
        Some((_, dir)) => return Err(format!("invalid direction '{}' (expected asc or desc)", dir)),
        None => (s, false),
    };
    let key = match key_str.to_ascii_lowercase().as_str() {
        "name" => SortKey::Name,
        "size" => SortKey::Size,
        "isdir" => SortKey::IsDir,
        "ctime" => SortKey::Ctime,
        "mtime" => SortKey::Mtime,
        other => {
            return Err(format!(
                "unknown sort key '{}' (expected name, size, isdir, ctime or mtime)",
                other
            ));
        }
    };
    Ok(SortEntry::new(key, reverse))
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
/// Uses the humantime crate.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    // Parse time filters
    let newer_than = args.newer.as_ref().map(|s| {
        let duration = parse_duration_string(s).unwrap_or_else(|e| {
            eprintln!("flatls: invalid --newer duration '{}': {}", s, e);
            process::exit(1);
        });
        SystemTime::now() - duration
    });

    let older_than = args.older.as_ref().map(|s| {
        let duration = parse_duration_string(s).unwrap_or_else(|e| {
            eprintln!("flatls: invalid --older duration '{}': {}", s, e);
            process::exit(1);
        });
        SystemTime::now() - duration
    });

    let config = WalkerConfig {
        max_depth: args.level,
        ignore_patterns: args.ignore.clone(),
        newer_than,
        older_than,
        follow_symlinks: args.follow_symlinks,
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let lister = Lister::new(&root).with_config(config);

    let result = if args.json {
        lister
            .entries(&args.sort)
            .and_then(|entries| print_json(lister.root(), &entries))
    } else if args.long {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
        };
        lister
            .entries(&args.sort)
            .and_then(|entries| LongFormatter::new(output_config).print(lister.root(), &entries))
    } else {
        lister.list(&args.sort).and_then(|paths| print_plain(&paths))
    };

    if let Err(e) = result {
        eprintln!("flatls: cannot access '{}': {}", args.path.display(), e);
        process::exit(1);
    }
}
