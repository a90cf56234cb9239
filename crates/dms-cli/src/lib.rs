// dms-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use dms_rules::RuleSet;
use dms_soundex::{DaitchMokotoff, EncoderOptions};

/// Environment variable naming a rule file that replaces the bundled rules.
pub const RULES_PATH_ENV: &str = "DMS_RULES_PATH";

/// Create an encoder.
///
/// Rule source order:
/// 1. `rules_path` argument (if provided)
/// 2. `DMS_RULES_PATH` environment variable
/// 3. The rules bundled with the library
pub fn load_encoder(rules_path: Option<&str>, folding: bool) -> Result<DaitchMokotoff, String> {
    let options = EncoderOptions { folding };
    let env_path = std::env::var(RULES_PATH_ENV).ok();

    match resolve_rules_path(rules_path, env_path.as_deref()) {
        Some(path) => {
            log::info!("loading rules from {}", path.display());
            let rules = load_rules(&path)?;
            Ok(DaitchMokotoff::from_rules(Arc::new(rules), options))
        }
        None => {
            log::debug!("using bundled rules");
            Ok(DaitchMokotoff::from_rules(dms_rules::default_rules(), options))
        }
    }
}

/// Read and parse one rule file, formatting any error for the terminal.
pub fn load_rules(path: &Path) -> Result<RuleSet, String> {
    RuleSet::load_file(path).map_err(|e| format!("{}: {e}", path.display()))
}

/// Pick the rule file: an explicit path wins over the environment.
fn resolve_rules_path(explicit: Option<&str>, env_path: Option<&str>) -> Option<PathBuf> {
    explicit
        .or(env_path)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Parse a `--rules=PATH`, `--rules PATH` or `-r PATH` argument from command line args.
///
/// Returns `(rules_path, remaining_args)`.
pub fn parse_rules_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut rules_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--rules=") {
            rules_path = Some(val.to_string());
        } else if arg == "--rules" || arg == "-r" {
            if i + 1 < args.len() {
                rules_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (rules_path, remaining)
}

/// Split positional names from flags. Anything not starting with `-` is a name.
pub fn positional_names(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|a| !a.starts_with('-'))
        .cloned()
        .collect()
}

/// Call `f` for every non-empty trimmed line on stdin.
pub fn for_each_stdin_line<F: FnMut(&str)>(mut f: F) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        f(name);
    }
}

/// Initialize logging from `RUST_LOG` (default: warnings only).
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--no-folding` is in the args.
pub fn folding_enabled(args: &[String]) -> bool {
    !args.iter().any(|a| a == "--no-folding")
}
