use std::fmt;

/// A maximal run of non-whitespace characters borrowed from its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordToken<'a>(&'a str);

impl<'a> WordToken<'a> {
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl AsRef<str> for WordToken<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for WordToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Split `line` into whitespace-delimited tokens, scanning left to right.
///
/// Any character for which [`char::is_whitespace`] holds is a delimiter and
/// never part of a token. Blank or empty lines yield nothing.
pub fn tokenize(line: &str) -> Vec<WordToken<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (true, Some(begin)) => {
                tokens.push(WordToken(&line[begin..idx]));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(WordToken(&line[begin..]));
    }

    tokens
}
