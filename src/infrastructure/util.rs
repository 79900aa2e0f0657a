// src/infrastructure/util.rs
use crate::domain::article::services::SlugGenerator;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s-]").expect("disallowed-character pattern is valid"));
static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").expect("dash pattern is valid"));

/// NFD-decomposes the input, drops combining marks and keeps `[a-z0-9-]`.
/// Characters without an ASCII decomposition disappear, so the result may be empty.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let stripped: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();
        let lowered = stripped.to_lowercase();
        let kept = DISALLOWED.replace_all(&lowered, "");
        let dashed = WHITESPACE.replace_all(kept.trim(), "-");
        let collapsed = DASHES.replace_all(&dashed, "-");
        collapsed.trim_matches('-').to_string()
    }
}
