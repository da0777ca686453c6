use logos::Logos;

/// The two lexical pieces of a numeral.
///
/// Matched one at a time against the unread input, so the scanner never
/// materializes more than the token it is about to consume. A mantissa is
/// always a complete literal on its own; an exponent only extends it when
/// the marker is followed by digits.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum NumeralPart {
    /// `42`, `4.`, `4.25`
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    Mantissa,
    /// `e5`, `E-3`, `e+12`
    #[regex(r"[eE][+-]?[0-9]+")]
    Exponent,
}

/// Returns `true` for characters that may begin a name.
#[must_use]
pub const fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` for characters that may continue a name.
#[must_use]
pub const fn is_name_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A cursor over the source text.
///
/// The scanner exposes the character under the cursor and a handful of ways
/// to move past it; the parser decides what to read next by looking at that
/// character. Positions are byte offsets.
///
/// A numeral and a name need no separator between them: `12abc` reads as the
/// number `12` with the cursor left on `a`.
///
/// # Example
/// ```
/// use postfix_calc::interpreter::scanner::Scanner;
///
/// let mut scanner = Scanner::new("  0.43e+1 *x");
/// scanner.skip_whitespace();
/// assert_eq!(scanner.read_number(), Some(4.3));
/// assert_eq!(scanner.current(), Some('*'));
/// scanner.advance_after_token();
/// assert_eq!(scanner.read_name(), Some("x"));
/// assert_eq!(scanner.current(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src str,
    pos:    usize,
}

impl<'src> Scanner<'src> {
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    /// The character under the cursor, or `None` at the end of the input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Moves the cursor past any ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_whitespace()).len();
    }

    /// Steps over the current character, then over any whitespace after it.
    pub fn advance_after_token(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
        self.skip_whitespace();
    }

    /// Reads the numeral under the cursor and skips the whitespace after it.
    ///
    /// The literal is `digits [ '.' digits* ] [ exponent ]`; a leading sign
    /// is never part of it. Returns `None`, without moving, if the cursor is
    /// not on a digit.
    pub fn read_number(&mut self) -> Option<f64> {
        let start = self.pos;
        let mut end = Self::match_part(self.rest(), NumeralPart::Mantissa)?;
        if let Some(len) = Self::match_part(&self.source[start + end..], NumeralPart::Exponent) {
            end += len;
        }

        let value = self.source[start..start + end].parse().ok()?;
        self.pos = start + end;
        self.skip_whitespace();
        Some(value)
    }

    /// Length of `part` if it matches at the very start of `input`.
    fn match_part(input: &str, part: NumeralPart) -> Option<usize> {
        let mut lexer = NumeralPart::lexer(input);
        match lexer.next() {
            Some(Ok(found)) if found == part && lexer.span().start == 0 => Some(lexer.span().end),
            _ => None,
        }
    }

    /// Reads the name under the cursor.
    ///
    /// Whitespace after the name is left in place. Returns `None`, without
    /// moving, if the cursor is not on a letter or `_`.
    pub fn read_name(&mut self) -> Option<&'src str> {
        let rest = self.rest();
        if !rest.starts_with(is_name_start) {
            return None;
        }

        let len = rest.find(|c: char| !is_name_continue(c)).unwrap_or(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }
}
