use anyhow::Context;
use std::str::SplitWhitespace;

/// Whitespace-delimited integer reader. Line breaks carry no meaning.
pub struct Scanner<'a> {
    tokens: SplitWhitespace<'a>,
    consumed: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
            consumed: 0,
        }
    }

    pub fn next_i64(&mut self, what: &str) -> anyhow::Result<i64> {
        let token = self
            .tokens
            .next()
            .with_context(|| format!("unexpected end of input while reading {}", what))?;
        self.consumed += 1;
        token
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("invalid integer {:?} for {}", token, what))
    }

    pub fn next_usize(&mut self, what: &str) -> anyhow::Result<usize> {
        let v = self.next_i64(what)?;
        usize::try_from(v).map_err(|_| anyhow::anyhow!("{} must be non-negative, got {}", what, v))
    }

    pub fn next_u32(&mut self, what: &str) -> anyhow::Result<u32> {
        let v = self.next_i64(what)?;
        u32::try_from(v).map_err(|_| anyhow::anyhow!("{} must be non-negative, got {}", what, v))
    }

    /// Tokens read so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.tokens.clone().count()
    }
}

/// Reports tokens left after the last trial: an error when `strict`, a warning otherwise.
pub fn finish(scanner: &Scanner<'_>, strict: bool) -> anyhow::Result<()> {
    let left = scanner.remaining();
    if left == 0 {
        return Ok(());
    }
    if strict {
        anyhow::bail!(
            "{} unread token(s) after the last trial (token {} onward)",
            left,
            scanner.consumed() + 1
        );
    }
    log::warn!("ignoring {} token(s) after the last trial", left);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{finish, Scanner};

    #[test]
    fn reads_across_line_breaks() {
        let mut s = Scanner::new("2\n 3 4\n\n-5\t6");
        assert_eq!(s.next_usize("count").unwrap(), 2);
        assert_eq!(s.next_i64("a").unwrap(), 3);
        assert_eq!(s.next_u32("b").unwrap(), 4);
        assert_eq!(s.next_i64("c").unwrap(), -5);
        assert_eq!(s.consumed(), 4);
        assert_eq!(s.remaining(), 1);
    }

    #[test]
    fn end_of_input_names_the_missing_field() {
        let mut s = Scanner::new("  \n");
        let err = s.next_i64("trial count").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected end of input while reading trial count"
        );
    }

    #[test]
    fn rejects_garbage_and_negative_counts() {
        let mut s = Scanner::new("abc -1");
        let err = s.next_i64("N").unwrap_err();
        assert!(err.to_string().contains("invalid integer \"abc\""));
        let err = s.next_usize("N").unwrap_err();
        assert!(err.to_string().contains("must be non-negative, got -1"));
    }

    #[test]
    fn trailing_tokens_fail_only_in_strict_mode() {
        let mut s = Scanner::new("1 2 3");
        s.next_i64("a").unwrap();
        assert!(finish(&s, false).is_ok());
        let err = finish(&s, true).unwrap_err();
        assert!(err.to_string().contains("2 unread token(s)"));
        assert!(err.to_string().contains("token 2 onward"));
    }
}
