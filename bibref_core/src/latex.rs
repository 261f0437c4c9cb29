//! LaTeX markup removal for plain-text comparisons.

/// Single-character commands that only decorate the following letter.
const ACCENT_COMMANDS: &[char] = &['"', '`', '\'', '^', '~', '=', '.'];

/// Strip LaTeX commands and grouping braces from field content.
///
/// `\emph{Deep} Learning` becomes `Deep Learning`, `G\"{o}del` becomes
/// `Godel`, `\&` becomes `&` and `\\` becomes a single backslash.
#[must_use]
pub fn strip_latex_commands(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => out.push('\\'),
                Some(next) if next.is_ascii_alphabetic() => {
                    while chars.next_if(char::is_ascii_alphabetic).is_some() {}
                    // An argument brace directly after the name belongs to the command.
                    chars.next_if_eq(&'{');
                }
                Some(next) if ACCENT_COMMANDS.contains(&next) => {
                    chars.next_if_eq(&'{');
                }
                Some(next) => out.push(next),
                None => {}
            },
            '{' | '}' => {}
            _ => out.push(c),
        }
    }

    out
}
