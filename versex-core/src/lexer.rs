//! Deterministic matcher for the citation grammar
//!
//! ```text
//! citation  := ordinal? book ' '? ref range? (',' ' '? cont)*
//! ordinal   := [1-3] ' '?
//! book      := [A-Za-z]+ (' ' [oO][fF] ' ' ("songs" | "solomon"))?
//! ref       := digits ':' digits
//! range     := '-' digits (':' digits)?
//! cont      := digits (':' digits)? range?
//! ```
//!
//! Every optional part is greedy and falls back to "absent" when the rest of
//! the grammar cannot follow it. Matching never backtracks more than one
//! optional part, so the cost is linear in the candidate length.

/// Byte bounds of one lexical match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub start: usize,
    /// End of the book token (before the optional space)
    pub book_end: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy)]
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8], pos: usize) -> Self {
        Self { bytes, pos }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        self.eat_if(|b| b == byte)
    }

    fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.peek() {
            Some(b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// One or more bytes matching `pred`
    fn eat_run(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        let start = self.pos;
        while self.eat_if(&pred) {}
        self.pos > start
    }

    fn eat_digits(&mut self) -> bool {
        self.eat_run(|b| b.is_ascii_digit())
    }

    fn eat_ignore_case(&mut self, word: &str) -> bool {
        let end = self.pos + word.len();
        match self.bytes.get(self.pos..end) {
            Some(slice) if slice.eq_ignore_ascii_case(word.as_bytes()) => {
                self.pos = end;
                true
            }
            _ => false,
        }
    }

    /// Run `f` on a copy; commit the copy only on success
    fn attempt(&mut self, f: impl FnOnce(&mut Self) -> bool) -> bool {
        let mut probe = *self;
        if f(&mut probe) {
            *self = probe;
            true
        } else {
            false
        }
    }
}

/// Match the citation grammar starting exactly at `start`
pub(crate) fn match_at(bytes: &[u8], start: usize) -> Option<Candidate> {
    let cursor = Cursor::new(bytes, start);

    let mut with_ordinal = cursor;
    if with_ordinal.eat_if(|b| matches!(b, b'1'..=b'3')) {
        with_ordinal.eat(b' ');
        if let Some(candidate) = match_book(with_ordinal, start) {
            return Some(candidate);
        }
    }

    match_book(cursor, start)
}

fn match_book(mut cursor: Cursor<'_>, start: usize) -> Option<Candidate> {
    if !cursor.eat_run(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let mut with_suffix = cursor;
    if song_suffix(&mut with_suffix) {
        if let Some(candidate) = match_body(with_suffix, start) {
            return Some(candidate);
        }
    }

    match_body(cursor, start)
}

/// `" of Songs"` or `" of Solomon"`
fn song_suffix(cursor: &mut Cursor<'_>) -> bool {
    cursor.attempt(|c| {
        c.eat(b' ')
            && c.eat_ignore_case("of")
            && c.eat(b' ')
            && (c.eat_ignore_case("songs") || c.eat_ignore_case("solomon"))
    })
}

fn match_body(mut cursor: Cursor<'_>, start: usize) -> Option<Candidate> {
    let book_end = cursor.pos;
    cursor.eat(b' ');

    if !(cursor.eat_digits() && cursor.eat(b':') && cursor.eat_digits()) {
        return None;
    }
    range(&mut cursor);

    while cursor.attempt(|c| {
        if !c.eat(b',') {
            return false;
        }
        c.eat(b' ');
        if !c.eat_digits() {
            return false;
        }
        c.attempt(|c| c.eat(b':') && c.eat_digits());
        range(c);
        true
    }) {}

    Some(Candidate {
        start,
        book_end,
        end: cursor.pos,
    })
}

/// Optional `-N` or `-N:M`
fn range(cursor: &mut Cursor<'_>) -> bool {
    cursor.attempt(|c| {
        if !(c.eat(b'-') && c.eat_digits()) {
            return false;
        }
        c.attempt(|c| c.eat(b':') && c.eat_digits());
        true
    })
}

/// Byte offset where the chapter/verse body of a citation starts
///
/// Skips a leading ordinal, then returns the first ASCII digit after it.
pub(crate) fn body_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut cursor = Cursor::new(bytes, 0);
    if cursor.eat_if(|b| matches!(b, b'1'..=b'3')) {
        cursor.eat(b' ');
    }

    bytes[cursor.pos..]
        .iter()
        .position(u8::is_ascii_digit)
        .map(|offset| cursor.pos + offset)
}
