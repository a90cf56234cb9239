//! Properties that hold for every input, checked over a list of names.

use dms_core::code::{is_finished_code, split_codes};
use dms_soundex::DaitchMokotoff;

const NAMES: &[&str] = &[
    "Auerbach",
    "Ohrbach",
    "Lipshitz",
    "Lippszyc",
    "Lewinsky",
    "Szlamawicz",
    "Rosochowaciec",
    "Gerschfeld",
    "Jackson",
    "Peterson",
    "Przemysl",
    "Schwarzenegger",
    "Schtschepkin",
    "Zhdzhanov",
    "Moskowitz",
    "Kleinmann",
    "Straßburg",
    "Müller",
    "Łukasiewicz",
    "Żółkiewski",
    "ţepeş",
    "Dąbrowska",
    "Wałęsa",
    "x",
    "",
    "'-'",
];

#[test]
fn deterministic() {
    let dm = DaitchMokotoff::new();
    for name in NAMES {
        assert_eq!(dm.soundex(name), dm.soundex(name), "{name}");
        assert_eq!(dm.encode(name), dm.encode(name), "{name}");
    }
}

#[test]
fn every_code_has_fixed_length() {
    let dm = DaitchMokotoff::new();
    for name in NAMES {
        let joined = dm.soundex(name);
        let codes = split_codes(&joined);
        assert!(!codes.is_empty(), "{name}");
        for code in codes {
            assert!(is_finished_code(code), "{name}: {code}");
        }
        assert!(is_finished_code(&dm.encode(name)), "{name}");
    }
}

#[test]
fn codes_are_distinct() {
    let dm = DaitchMokotoff::new();
    for name in NAMES {
        let codes = dm.soundex_codes(name);
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len(), "{name}: {codes:?}");
    }
}

#[test]
fn encode_is_first_soundex_code() {
    let dm = DaitchMokotoff::new();
    for name in NAMES {
        let codes = dm.soundex_codes(name);
        assert_eq!(dm.encode(name), codes[0], "{name}");
    }
}

#[test]
fn non_letters_do_not_change_the_result() {
    let dm = DaitchMokotoff::new();
    for name in NAMES {
        let expected = dm.soundex(name);
        let chars: Vec<char> = name.chars().collect();
        for i in 0..=chars.len() {
            for noise in ["-", "'", " ", "1", "$", "\u{2014}"] {
                let mut noisy: String = chars[..i].iter().collect();
                noisy.push_str(noise);
                noisy.extend(&chars[i..]);
                assert_eq!(dm.soundex(&noisy), expected, "{noisy:?}");
            }
        }
    }
}

#[test]
fn compound_names_ignore_the_delimiter() {
    let dm = DaitchMokotoff::new();
    let expected = dm.soundex("JacksonJackson");
    for delimiter in [" ", "-", "--", "\u{2014}", "_", "$", ""] {
        let name = format!("Jackson{delimiter}Jackson");
        assert_eq!(dm.soundex(&name), expected, "{name:?}");
    }
}

#[test]
fn folding_equates_accented_and_plain_spellings() {
    let dm = DaitchMokotoff::new();
    let pairs = [
        ("Straßburg", "Strasburg"),
        ("Müller", "Muller"),
        ("Łukasiewicz", "Lukasiewicz"),
        ("Żółkiewski", "Zolkiewski"),
        ("Éregon", "Eregon"),
        ("Brúnó", "Bruno"),
    ];
    for (accented, plain) in pairs {
        assert_eq!(dm.soundex(accented), dm.soundex(plain), "{accented} vs {plain}");
    }
}

#[test]
fn case_does_not_matter() {
    let dm = DaitchMokotoff::new();
    for name in NAMES {
        assert_eq!(dm.soundex(&name.to_uppercase()), dm.soundex(&name.to_lowercase()), "{name}");
    }
}
