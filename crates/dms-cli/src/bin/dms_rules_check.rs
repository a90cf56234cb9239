// dms-rules-check: Validate Daitch-Mokotoff rule files.
//
// Parses each file and prints the number of rules, pattern groups and
// folding entries. Without arguments the bundled rules are checked.
// Exits with code 1 if any file fails to parse.
//
// Usage:
//   dms-rules-check [FILE...]

use dms_rules::{BUNDLED_RULES, RuleSet};

fn main() {
    dms_cli::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if dms_cli::wants_help(&args) {
        println!("dms-rules-check: Validate Daitch-Mokotoff rule files.");
        println!();
        println!("Usage: dms-rules-check [FILE...]");
        println!();
        println!("Without FILE arguments the bundled rules are checked.");
        return;
    }

    if args.is_empty() {
        match RuleSet::parse(BUNDLED_RULES) {
            Ok(rules) => report("<bundled>", &rules),
            Err(e) => dms_cli::fatal(&format!("<bundled>: {e}")),
        }
        return;
    }

    let mut failed = false;
    for path in &args {
        match dms_cli::load_rules(std::path::Path::new(path)) {
            Ok(rules) => report(path, &rules),
            Err(e) => {
                eprintln!("error: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn report(name: &str, rules: &RuleSet) {
    println!(
        "{name}: {} rules, {} pattern groups, {} foldings",
        rules.rule_count(),
        rules.table().group_count(),
        rules.folding().len()
    );
}
