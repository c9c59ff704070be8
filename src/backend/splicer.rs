//! Position-aware text splicer.
//!
//! Edits are expressed against offsets in the *original* source. The splicer keeps a running
//! `delta` (the net length change of all previous edits) and maps each original offset to the
//! current buffer before editing.
//!
//! ## Notes
//! - Edits within one pass must be issued in non-decreasing original position. Earlier positions
//!   would be shifted by edits that happened after them and corrupt the buffer.
//! - [`Splicer::rebase`] starts a new pass from a zero delta. It is only correct when every edit of
//!   the new pass lies before every edit of the previous passes.

/// A buffer under edit, with offset bookkeeping.
#[derive(Debug)]
pub struct Splicer {
    output: String,
    delta: isize,
    /// Last original position edited in the current pass (order check in debug builds).
    last_position: usize,
}

impl Splicer {
    pub fn new(source: &str) -> Self {
        Self {
            output: source.to_string(),
            delta: 0,
            last_position: 0,
        }
    }

    /// Map an original offset to the current buffer.
    fn shifted(&self, position: usize) -> usize {
        position
            .checked_add_signed(self.delta)
            .unwrap_or(0)
            .min(self.output.len())
    }

    fn track(&mut self, position: usize) {
        debug_assert!(
            position >= self.last_position,
            "splice at {position} issued after an edit at {}",
            self.last_position
        );
        self.last_position = position;
    }

    /// Insert `text` at an original offset.
    pub fn insert(&mut self, text: &str, position: usize) {
        self.track(position);
        let pos = self.shifted(position);
        self.output.insert_str(pos, text);
        self.delta += text.len() as isize;
    }

    /// Replace the `old.len()` bytes starting at an original offset with `new`.
    pub fn replace(&mut self, old: &str, new: &str, position: usize) {
        self.track(position);
        let pos = self.shifted(position);
        let end = (pos + old.len()).min(self.output.len());
        self.output.replace_range(pos..end, new);
        self.delta += new.len() as isize - old.len() as isize;
    }

    /// Whether the buffer up to an original offset ends with `;`, ignoring trailing whitespace.
    pub fn ends_with_terminator(&self, position: usize) -> bool {
        let pos = self.shifted(position);
        self.output
            .get(..pos)
            .is_some_and(|head| head.trim_end().ends_with(';'))
    }

    /// Start a new pass whose edits all precede the edits already applied.
    pub fn rebase(&mut self) {
        self.delta = 0;
        self.last_position = 0;
    }

    pub fn finish(self) -> String {
        self.output
    }
}
