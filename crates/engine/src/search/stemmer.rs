//! Porter2 (English) stemmer implementation (no external dependencies)
//!
//! Implements the rule-ordered suffix stripping of the Porter2 algorithm:
//! special forms, region detection (R1/R2), step 0, steps 1a-1c and 2-5.
//! The rule tables are explicit ordered lists; the first matching entry is
//! always the longest applicable suffix.
//!
//! Input is lowercased internally. Non-ASCII words are lowercased and
//! otherwise returned unchanged.
//!
//! Stemming is deterministic but not idempotent: `stem("embedment")` is
//! `"embed"`, while `stem("embed")` is `"emb"`.

/// Irregular forms returned verbatim without running any step.
const SPECIAL_FORMS: &[(&str, &str)] = &[
    ("skis", "ski"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("idly", "idl"),
    ("gently", "gentl"),
    ("ugly", "ugli"),
    ("early", "earli"),
    ("only", "onli"),
    ("singly", "singl"),
    ("sky", "sky"),
    ("news", "news"),
    ("howe", "howe"),
    ("atlas", "atlas"),
    ("cosmos", "cosmos"),
    ("bias", "bias"),
    ("andes", "andes"),
];

/// Words left untouched once step 1a has run.
const STEP1A_INVARIANTS: &[&str] = &[
    "inning", "outing", "canning", "herring", "earring", "proceed", "exceed", "succeed",
];

/// Prefixes whose R1 starts immediately after the prefix.
const R1_PREFIXES: &[&str] = &["gener", "commun", "arsen"];

/// Stem a word using the Porter2 algorithm.
///
/// Total over arbitrary strings: words shorter than three characters and
/// non-ASCII words come back lowercased and otherwise unchanged.
///
/// # Examples
///
/// ```
/// use lexis_engine::search::stemmer::stem;
///
/// assert_eq!(stem("running"), "run");
/// assert_eq!(stem("Generated"), "generat");
/// assert_eq!(stem("skis"), "ski");
/// ```
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();

    if let Some(special) = special_form(&lower) {
        return special.to_string();
    }

    // Words < 3 chars or containing non-ASCII are not stemmed
    if lower.chars().count() < 3 || !lower.is_ascii() {
        return lower;
    }

    let mut w = lower.into_bytes();

    // Step 0 (prelude): leading apostrophe, protected y
    if w.first() == Some(&b'\'') {
        w.remove(0);
    }
    mark_consonant_y(&mut w);

    let regions = Regions::of(&w);

    step0(&mut w);
    step1a(&mut w);

    if STEP1A_INVARIANTS
        .iter()
        .any(|inv| inv.as_bytes() == w.as_slice())
    {
        return finalize(w);
    }

    step1b(&mut w, regions);
    step1c(&mut w);
    apply_longest(&mut w, STEP2, regions);
    apply_longest(&mut w, STEP3, regions);
    apply_longest(&mut w, STEP4, regions);
    step5(&mut w, regions);

    finalize(w)
}

/// Whether `word` (lowercased) is answered from the irregular-forms table.
pub fn is_special_form(word: &str) -> bool {
    special_form(&word.to_lowercase()).is_some()
}

fn special_form(lower: &str) -> Option<&'static str> {
    SPECIAL_FORMS
        .iter()
        .find(|(form, _)| *form == lower)
        .map(|(_, stem)| *stem)
}

// ==========================================================================
// Helpers
// ==========================================================================

/// Vowels for region and syllable tests. A protected `Y` is not a vowel.
#[inline]
fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

#[inline]
fn ends_with(w: &[u8], suffix: &str) -> bool {
    w.ends_with(suffix.as_bytes())
}

/// Rewrite word-initial `y` and `y` after a vowel as `Y`.
fn mark_consonant_y(w: &mut [u8]) {
    for i in 0..w.len() {
        if w[i] == b'y' && (i == 0 || is_vowel(w[i - 1])) {
            w[i] = b'Y';
        }
    }
}

/// Index just past the first vowel-then-non-vowel pair at or after `from`.
fn after_vowel_consonant(w: &[u8], from: usize) -> usize {
    (from..w.len().saturating_sub(1))
        .find(|&i| is_vowel(w[i]) && !is_vowel(w[i + 1]))
        .map_or(w.len(), |i| i + 2)
}

/// Start offsets of the half-open regions `r1..len` and `r2..len`.
///
/// Computed once after the prelude; a region start may end up past the
/// end of the word once suffixes are removed, which reads as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regions {
    r1: usize,
    r2: usize,
}

impl Regions {
    fn of(w: &[u8]) -> Self {
        let r1 = R1_PREFIXES
            .iter()
            .find(|p| w.starts_with(p.as_bytes()))
            .map_or_else(|| after_vowel_consonant(w, 0), |p| p.len());
        let r2 = after_vowel_consonant(w, r1);
        Regions { r1, r2 }
    }
}

/// Ends in non-vowel, vowel, non-vowel (other than w, x, Y); or is exactly
/// vowel + non-vowel.
fn ends_with_short_syllable(w: &[u8]) -> bool {
    match *w {
        [a, b] => is_vowel(a) && !is_vowel(b),
        [.., a, b, c] => {
            !is_vowel(a) && is_vowel(b) && !is_vowel(c) && !matches!(c, b'w' | b'x' | b'Y')
        }
        _ => false,
    }
}

/// R1 is empty, or the word ends in a short syllable.
fn is_short_word(w: &[u8], regions: Regions) -> bool {
    regions.r1 >= w.len() || ends_with_short_syllable(w)
}

fn finalize(w: Vec<u8>) -> String {
    w.into_iter()
        .map(|c| if c == b'Y' { 'y' } else { char::from(c) })
        .collect()
}

// ==========================================================================
// Rule tables
// ==========================================================================

#[derive(Debug, Clone, Copy)]
enum Region {
    R1,
    R2,
}

#[derive(Debug, Clone, Copy)]
enum Guard {
    Always,
    /// The character before the suffix must be one of these
    PrecededBy(&'static [u8]),
}

/// One `(suffix, replacement, region)` entry of a step table.
#[derive(Debug, Clone, Copy)]
struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    region: Region,
    guard: Guard,
}

const fn r1(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule {
        suffix,
        replacement,
        region: Region::R1,
        guard: Guard::Always,
    }
}

const fn r2(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule {
        suffix,
        replacement,
        region: Region::R2,
        guard: Guard::Always,
    }
}

const fn guarded(rule: Rule, preceded_by: &'static [u8]) -> Rule {
    Rule {
        guard: Guard::PrecededBy(preceded_by),
        ..rule
    }
}

/// Step 2, longest suffixes first.
const STEP2: &[Rule] = &[
    r1("ization", "ize"),
    r1("ational", "ate"),
    r1("fulness", "ful"),
    r1("ousness", "ous"),
    r1("iveness", "ive"),
    r1("tional", "tion"),
    r1("biliti", "ble"),
    r1("lessli", "less"),
    r1("entli", "ent"),
    r1("ation", "ate"),
    r1("alism", "al"),
    r1("aliti", "al"),
    r1("ousli", "ous"),
    r1("iviti", "ive"),
    r1("fulli", "ful"),
    r1("enci", "ence"),
    r1("anci", "ance"),
    r1("abli", "able"),
    r1("izer", "ize"),
    r1("ator", "ate"),
    r1("alli", "al"),
    r1("bli", "ble"),
    r1("eli", "e"),
    guarded(r1("ogi", "og"), b"l"),
    guarded(r1("li", ""), b"cdeghkmnrt"),
];

/// Step 3, longest suffixes first. `ative` additionally requires R2.
const STEP3: &[Rule] = &[
    r1("ational", "ate"),
    r1("tional", "tion"),
    r2("ative", ""),
    r1("alize", "al"),
    r1("icate", "ic"),
    r1("iciti", "ic"),
    r1("ical", "ic"),
    r1("ness", ""),
    r1("ful", ""),
];

/// Step 4, longest suffixes first. Every suffix must lie in R2.
const STEP4: &[Rule] = &[
    r2("ement", ""),
    r2("ance", ""),
    r2("ence", ""),
    r2("able", ""),
    r2("ible", ""),
    r2("ment", ""),
    r2("ant", ""),
    r2("ent", ""),
    r2("ism", ""),
    r2("ate", ""),
    r2("iti", ""),
    r2("ous", ""),
    r2("ive", ""),
    r2("ize", ""),
    guarded(r2("ion", ""), b"st"),
    r2("al", ""),
    r2("er", ""),
    r2("ic", ""),
];

/// Find the longest listed suffix and apply it if its conditions hold.
///
/// Shorter suffixes are never retried when the longest one is rejected.
fn apply_longest(w: &mut Vec<u8>, rules: &[Rule], regions: Regions) {
    let Some(rule) = rules.iter().find(|r| ends_with(w, r.suffix)) else {
        return;
    };
    let start = w.len() - rule.suffix.len();

    let region_start = match rule.region {
        Region::R1 => regions.r1,
        Region::R2 => regions.r2,
    };
    if start < region_start {
        return;
    }

    if let Guard::PrecededBy(allowed) = rule.guard {
        let preceding = start.checked_sub(1).map(|i| w[i]);
        if !preceding.is_some_and(|c| allowed.contains(&c)) {
            return;
        }
    }

    w.truncate(start);
    w.extend_from_slice(rule.replacement.as_bytes());
}

// ==========================================================================
// Steps
// ==========================================================================

/// Step 0: possessive markers
fn step0(w: &mut Vec<u8>) {
    for suffix in ["'s'", "'s", "'"] {
        if ends_with(w, suffix) {
            w.truncate(w.len() - suffix.len());
            return;
        }
    }
}

/// Step 1a: plurals
fn step1a(w: &mut Vec<u8>) {
    let n = w.len();
    if ends_with(w, "sses") {
        w.truncate(n - 2);
    } else if ends_with(w, "ied") || ends_with(w, "ies") {
        // "cries" -> "cri", "ties" -> "tie"
        w.truncate(if n > 4 { n - 2 } else { n - 1 });
    } else if ends_with(w, "ss") || ends_with(w, "us") {
        // unchanged
    } else if ends_with(w, "s") && w[..n - 1].iter().any(|&c| is_vowel(c)) {
        w.truncate(n - 1);
    }
}

/// Step 1b: past tense / gerunds
fn step1b(w: &mut Vec<u8>, regions: Regions) {
    const SUFFIXES: &[&str] = &["eedly", "ingly", "edly", "eed", "ing", "ed"];

    let Some(suffix) = SUFFIXES.iter().find(|s| ends_with(w, s)) else {
        return;
    };
    let start = w.len() - suffix.len();

    if suffix.starts_with("eed") {
        if start >= regions.r1 {
            w.truncate(start);
            w.extend_from_slice(b"ee");
        }
        return;
    }

    if !w[..start].iter().any(|&c| is_vowel(c)) {
        return;
    }
    w.truncate(start);

    if ends_with(w, "at") || ends_with(w, "bl") || ends_with(w, "iz") {
        w.push(b'e');
    } else if ends_with_droppable_double(w) {
        w.pop();
    } else if is_short_word(w, regions) {
        w.push(b'e');
    }
}

/// Trailing bb/dd/ff/gg/mm/nn/pp/rr/tt not preceded by exactly `a`, `e`
/// or `o`, so "add", "egg" and "off" keep their double.
fn ends_with_droppable_double(w: &[u8]) -> bool {
    const DOUBLES: &[&str] = &["bb", "dd", "ff", "gg", "mm", "nn", "pp", "rr", "tt"];

    DOUBLES.iter().any(|d| ends_with(w, d))
        && !matches!(&w[..w.len() - 2], [b'a'] | [b'e'] | [b'o'])
}

/// Step 1c: y -> i after a non-vowel that is not the first letter
fn step1c(w: &mut [u8]) {
    let n = w.len();
    if n > 2 && matches!(w[n - 1], b'y' | b'Y') && !is_vowel(w[n - 2]) {
        w[n - 1] = b'i';
    }
}

/// Step 5: trailing -e and -ll
fn step5(w: &mut Vec<u8>, regions: Regions) {
    let n = w.len();
    let last = n.checked_sub(1);

    match last.map(|i| w[i]) {
        Some(b'e') => {
            let pos = n - 1;
            if pos >= regions.r2 || (pos >= regions.r1 && !ends_with_cv_e(w)) {
                w.pop();
            }
        }
        Some(b'l') => {
            let pos = n - 1;
            if pos >= regions.r2 && n >= 2 && w[n - 2] == b'l' {
                w.pop();
            }
        }
        _ => {}
    }
}

/// Ends in non-vowel, vowel, `e`.
fn ends_with_cv_e(w: &[u8]) -> bool {
    match *w {
        [.., a, b, b'e'] => !is_vowel(a) && is_vowel(b),
        _ => false,
    }
}

// ==========================================================================
// Tests
// ==========================================================================
