//! Splitting raw path strings into segments.

/// Iterator over the non-empty runs of a string between separator characters.
///
/// Consecutive separators collapse, and leading or trailing separators
/// produce no empty segment. The iterator borrows the input, so a fresh
/// scan is just another call to [`tokenize`].
///
/// # Examples
///
/// ```
/// use fspath::path::tokenize::tokenize;
///
/// let parts: Vec<&str> = tokenize("//usr///local/", &['/']).collect();
/// assert_eq!(parts, ["usr", "local"]);
///
/// assert_eq!(tokenize("", &['/']).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    remaining: &'a str,
    separators: &'a [char],
}

/// Tokenize `input` on any of `separators`.
#[must_use]
pub fn tokenize<'a>(input: &'a str, separators: &'a [char]) -> Tokens<'a> {
    Tokens {
        remaining: input,
        separators,
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let seps = self.separators;
        self.remaining = self.remaining.trim_start_matches(|c: char| seps.contains(&c));
        if self.remaining.is_empty() {
            return None;
        }

        match self.remaining.find(|c: char| seps.contains(&c)) {
            Some(pos) => {
                let token = &self.remaining[..pos];
                self.remaining = &self.remaining[pos..];
                Some(token)
            }
            None => {
                let token = self.remaining;
                self.remaining = "";
                Some(token)
            }
        }
    }
}
