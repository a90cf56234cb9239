// dms-encode: Print one Daitch-Mokotoff code per name.
//
// Follows only the first alternative of every rule, so each name yields
// exactly one six-digit code. Output format:
//   name<TAB>code
//
// Usage:
//   dms-encode [-r RULES] [OPTIONS] [NAME...]
//
// Options:
//   -r, --rules PATH   Rule file replacing the bundled rules
//   --no-folding       Do not fold accented characters
//   -h, --help         Print help

use std::io::{self, Write};

fn main() {
    dms_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = dms_cli::parse_rules_path(&args);

    if dms_cli::wants_help(&args) {
        println!("dms-encode: Print one Daitch-Mokotoff code per name.");
        println!();
        println!("Usage: dms-encode [-r RULES] [OPTIONS] [NAME...]");
        println!();
        println!("If NAME arguments are given, encodes each name.");
        println!("Otherwise reads names from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -r, --rules PATH   Rule file replacing the bundled rules");
        println!("                     (default: $DMS_RULES_PATH, then bundled rules)");
        println!("  --no-folding       Do not fold accented characters");
        println!("  -h, --help         Print this help");
        return;
    }

    let dm = dms_cli::load_encoder(rules_path.as_deref(), dms_cli::folding_enabled(&args))
        .unwrap_or_else(|e| dms_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let names = dms_cli::positional_names(&args);
    if names.is_empty() {
        dms_cli::for_each_stdin_line(|name| {
            let _ = writeln!(out, "{name}\t{}", dm.encode(name));
        });
    } else {
        for name in &names {
            let _ = writeln!(out, "{name}\t{}", dm.encode(name));
        }
    }
}
