use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9 ]").expect("valid regex");
    static ref SPACE_RUN: Regex = Regex::new(r" +").expect("valid regex");
}

/// Normalize raw document text: lowercase, drop everything that is not an ASCII
/// lowercase letter, digit or space, then collapse runs of spaces into one.
///
/// Leading and trailing spaces are collapsed but not trimmed, so `" a "` stays
/// `" a "`. The function is total and idempotent.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let alnum = NON_ALNUM.replace_all(&lower, "");
    SPACE_RUN.replace_all(&alnum, " ").into_owned()
}

/// Split normalized text on the single space character.
///
/// This is a literal split, not a whitespace split: `""` yields one empty token,
/// and a leading or trailing space yields an empty token at that end. Those
/// empty tokens are indexed like any other term.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(' ').map(String::from).collect()
}
