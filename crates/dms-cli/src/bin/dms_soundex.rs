// dms-soundex: Print every Daitch-Mokotoff code of each name.
//
// Names with ambiguous letter clusters yield several codes. Output format:
//   name<TAB>code|code|...
// or, with --split, one line per code:
//   name<TAB>code
//
// Usage:
//   dms-soundex [-r RULES] [OPTIONS] [NAME...]
//
// Options:
//   -r, --rules PATH   Rule file replacing the bundled rules
//   --no-folding       Do not fold accented characters
//   --split            Print each code on its own line
//   -h, --help         Print help

use std::io::{self, Write};

use dms_soundex::DaitchMokotoff;

fn main() {
    dms_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rules_path, args) = dms_cli::parse_rules_path(&args);

    if dms_cli::wants_help(&args) {
        println!("dms-soundex: Print every Daitch-Mokotoff code of each name.");
        println!();
        println!("Usage: dms-soundex [-r RULES] [OPTIONS] [NAME...]");
        println!();
        println!("If NAME arguments are given, encodes each name.");
        println!("Otherwise reads names from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -r, --rules PATH   Rule file replacing the bundled rules");
        println!("                     (default: $DMS_RULES_PATH, then bundled rules)");
        println!("  --no-folding       Do not fold accented characters");
        println!("  --split            Print each code on its own line");
        println!("  -h, --help         Print this help");
        return;
    }

    let split = args.iter().any(|a| a == "--split");

    let dm = dms_cli::load_encoder(rules_path.as_deref(), dms_cli::folding_enabled(&args))
        .unwrap_or_else(|e| dms_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut print_codes = |name: &str, dm: &DaitchMokotoff| {
        if split {
            for code in dm.soundex_codes(name) {
                let _ = writeln!(out, "{name}\t{code}");
            }
        } else {
            let _ = writeln!(out, "{name}\t{}", dm.soundex(name));
        }
    };

    let names = dms_cli::positional_names(&args);
    if names.is_empty() {
        dms_cli::for_each_stdin_line(|name| print_codes(name, &dm));
    } else {
        for name in &names {
            print_codes(name, &dm);
        }
    }
}
