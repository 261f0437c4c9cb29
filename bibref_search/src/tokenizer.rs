//! Query tokenization.

/// Split a raw query into words and quoted phrases.
///
/// Whitespace separates words unless it is quoted or escaped. A `"`
/// toggles quoting and always ends the word in progress, even mid-word.
/// A backslash makes the next character literal, quotes included. Empty
/// words are never produced.
#[must_use]
pub fn parse_query(query: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    let mut quoted = false;

    for c in query.chars() {
        if escaped {
            current.push(c);
            escaped = false;
            continue;
        }

        match c {
            '\\' => escaped = true,
            '"' => {
                flush(&mut current, &mut words);
                quoted = !quoted;
            }
            c if c.is_whitespace() && !quoted => flush(&mut current, &mut words),
            c => current.push(c),
        }
    }
    flush(&mut current, &mut words);

    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
