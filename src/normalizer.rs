const LEGAL_SUFFIXES: [&str; 7] = ["inc", "ltd", "llc", "llp", "corp", "co", "gmbh"];

/// Maps a raw partner display name to its canonical join key.
///
/// Total and idempotent for listing text. The mapping is deliberately
/// many-to-one and lossy: two genuinely distinct names can collapse to
/// the same key (e.g. "Acme" and "Acme Inc."). Callers group by key but
/// keep the first-seen display name for output.
///
/// Pipeline, order-sensitive:
/// 1. NBSP to space, collapse whitespace runs, trim.
/// 2. Drop legal-entity suffix words, tolerating adjacent punctuation.
/// 3. Strip period, comma, apostrophe.
/// 4. Ampersand becomes the word "and".
/// 5. Lowercase, trim.
pub fn normalize(raw: &str) -> String {
    let spaced = raw.replace('\u{00A0}', " ");
    let kept: Vec<&str> = spaced
        .split_whitespace()
        .filter(|word| !is_legal_suffix(word))
        .collect();

    kept.join(" ")
        .replace(['.', ',', '\''], "")
        .replace('&', "and")
        .to_lowercase()
        .trim()
        .to_string()
}

fn is_legal_suffix(word: &str) -> bool {
    // Adjacent punctuation acts as a word boundary: a token like "Co.,"
    // still names a suffix. The trimmed-off characters are exactly the
    // ones step 3 deletes anyway, so dropping the whole token is safe.
    let core = word.trim_matches(['.', ',', '\'']);
    LEGAL_SUFFIXES.iter().any(|s| core.eq_ignore_ascii_case(s))
}
