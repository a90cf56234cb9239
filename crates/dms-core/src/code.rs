// Fixed-length code constants and joined code sets

/// Length of every finished Daitch-Mokotoff code.
pub const MAX_LENGTH: usize = 6;

/// Character used to pad short codes up to [`MAX_LENGTH`].
pub const PAD_CHAR: char = '0';

/// Separator between alternative codes in a joined code set.
pub const CODE_SEPARATOR: char = '|';

/// Join a list of codes into the `|`-separated form.
pub fn join_codes<S: AsRef<str>>(codes: &[S]) -> String {
    let mut out = String::with_capacity(codes.len() * (MAX_LENGTH + 1));
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            out.push(CODE_SEPARATOR);
        }
        out.push_str(code.as_ref());
    }
    out
}

/// Split a `|`-separated code set into its codes.
///
/// An empty string yields an empty list.
pub fn split_codes(joined: &str) -> Vec<&str> {
    if joined.is_empty() {
        return Vec::new();
    }
    joined.split(CODE_SEPARATOR).collect()
}

/// Check whether a string has the shape of a finished code:
/// exactly [`MAX_LENGTH`] ASCII digits.
pub fn is_finished_code(code: &str) -> bool {
    code.len() == MAX_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}
