//! Placeholder substitution for note filenames and note bodies.
//!
//! A template is plain text with literal tokens such as `YYMMDD` or `%topic%`.
//! Each [`TokenTable`] is an ordered list of `(token, resolver)` pairs; rendering
//! scans the input once, left to right, and at every position emits the first
//! entry whose token matches. Resolver output is never rescanned, so a topic
//! that happens to contain a token is inserted verbatim.
//!
//! Filenames and bodies use different tables. Filename templates treat the
//! bare words `topic`, `permanent` and `literature` as the topic, while body
//! templates only recognise `%topic%` and add the dashed date forms.

use chrono::NaiveDateTime;

/// Everything a resolver may draw from.
#[derive(Debug, Clone, Copy)]
pub struct Substitution<'a> {
    pub time: NaiveDateTime,
    pub topic: &'a str,
}

type Resolver = fn(&Substitution<'_>) -> String;

pub struct TokenTable {
    entries: &'static [(&'static str, Resolver)],
}

fn date_weekday(s: &Substitution<'_>) -> String {
    s.time.format("%Y-%m-%d %A").to_string()
}

fn date_dashed(s: &Substitution<'_>) -> String {
    s.time.format("%Y-%m-%d").to_string()
}

fn date_long(s: &Substitution<'_>) -> String {
    s.time.format("%Y%m%d").to_string()
}

fn date_short(s: &Substitution<'_>) -> String {
    s.time.format("%y%m%d").to_string()
}

fn time_seconds(s: &Substitution<'_>) -> String {
    s.time.format("%H%M%S").to_string()
}

fn time_minutes(s: &Substitution<'_>) -> String {
    s.time.format("%H%M").to_string()
}

fn topic(s: &Substitution<'_>) -> String {
    s.topic.to_string()
}

/// Tokens recognised in filename templates.
pub const FILENAME_TOKENS: TokenTable = TokenTable {
    entries: &[
        ("YYYYMMDD", date_long),
        ("YYMMDD", date_short),
        ("HHMMSS", time_seconds),
        ("HHMM", time_minutes),
        ("topic", topic),
        ("permanent", topic),
        ("literature", topic),
    ],
};

/// Tokens recognised in note body templates.
pub const CONTENT_TOKENS: TokenTable = TokenTable {
    entries: &[
        ("YYYY-MM-DD A", date_weekday),
        ("YYYY-MM-DD", date_dashed),
        ("YYYYMMDD", date_long),
        ("YYMMDD", date_short),
        ("HHMMSS", time_seconds),
        ("HHMM", time_minutes),
        ("%topic%", topic),
    ],
};

impl TokenTable {
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    pub fn render(&self, input: &str, subst: &Substitution<'_>) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        'scan: while !rest.is_empty() {
            for (token, resolve) in self.entries {
                if let Some(after) = rest.strip_prefix(token) {
                    out.push_str(&resolve(subst));
                    rest = after;
                    continue 'scan;
                }
            }
            // No token here; copy one char.
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                out.push(c);
            }
            rest = chars.as_str();
        }

        out
    }
}

pub fn render_filename(template: &str, subst: &Substitution<'_>) -> String {
    FILENAME_TOKENS.render(template, subst)
}

pub fn render_line(line: &str, subst: &Substitution<'_>) -> String {
    CONTENT_TOKENS.render(line, subst)
}
