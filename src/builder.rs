//! Outline builder turning a flat record stream into a topic tree.

use generational_arena::Index;
use tracing::{instrument, warn};

use crate::arena::{Outline, DEFAULT_LANG};
use crate::errors::{OutlineError, OutlineResult};
use crate::parser::{LineEvent, LineParser, TopicRecord};

/// Constructs a topic tree from records in document order.
///
/// Keeps a single cursor on the most recently attached node. Each record's
/// placement is decided from the depth delta between record and cursor, so
/// the whole build is one forward pass without lookahead or buffering.
pub struct OutlineBuilder {
    outline: Outline,
    cursor: Index,
    cursor_depth: usize,
    lang_seen: bool,
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::with_default_lang(DEFAULT_LANG)
    }

    /// Builder whose outline carries `lang` until a header overrides it.
    pub fn with_default_lang(lang: &str) -> Self {
        let outline = Outline::new(lang);
        let cursor = outline.root();
        Self {
            outline,
            cursor,
            cursor_depth: 0,
            lang_seen: false,
        }
    }

    /// Record a `lang:` header. The first one wins; later tags are ignored
    /// so a stray marker deep in the page cannot flip the language.
    #[instrument(level = "trace", skip(self))]
    pub fn header(&mut self, tag: &str) {
        if !self.lang_seen {
            self.outline.set_lang(tag);
            self.lang_seen = true;
        }
    }

    /// Attach the next record relative to the cursor.
    ///
    /// A record deeper than the cursor nests under it, no matter how far
    /// the indentation jumped. Equal or shallower climbs parent links back
    /// to the record's level and attaches as a sibling there. Climbing past
    /// the virtual root means the source dedented below its own top level;
    /// the build fails rather than guessing a parent.
    #[instrument(level = "trace", skip(self))]
    pub fn push(&mut self, record: TopicRecord) -> OutlineResult<()> {
        let parent = if record.depth > self.cursor_depth {
            if record.depth > self.cursor_depth + 1 {
                warn!(
                    "record {} jumps from depth {} to {}, tree stays flatter than the indentation",
                    record.id, self.cursor_depth, record.depth
                );
            }
            self.cursor
        } else {
            // One step per dedent level, plus one more onto the parent the
            // new sibling attaches under.
            let mut target = self.cursor;
            for _ in 0..=(self.cursor_depth - record.depth) {
                target = match self.outline.parent(target) {
                    Some(parent_idx) => parent_idx,
                    None => {
                        return Err(OutlineError::UnderIndented {
                            id: record.id,
                            title: record.title,
                            depth: record.depth,
                        });
                    }
                };
            }
            target
        };

        self.cursor_depth = record.depth;
        self.cursor = self.outline.attach(record, parent);
        Ok(())
    }

    /// Finish the build and hand the outline over.
    pub fn finish(self) -> Outline {
        self.outline
    }

    /// One-pass build over raw outline lines with the compiled-in default
    /// language.
    pub fn build_from_lines<'a, I>(lines: I) -> OutlineResult<Outline>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::build_from_lines_with_lang(lines, DEFAULT_LANG)
    }

    /// One-pass build over raw outline lines.
    ///
    /// Lines the scanner does not recognize are skipped without touching
    /// the cursor, so prose between two bullets never changes how the
    /// second bullet attaches.
    #[instrument(level = "debug", skip(lines))]
    pub fn build_from_lines_with_lang<'a, I>(lines: I, default_lang: &str) -> OutlineResult<Outline>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let parser = LineParser::new();
        let mut builder = Self::with_default_lang(default_lang);

        for line in lines {
            match parser.parse_line(line) {
                Some(LineEvent::Header(tag)) => builder.header(&tag),
                Some(LineEvent::Topic(record)) => builder.push(record)?,
                None => {}
            }
        }

        Ok(builder.finish())
    }
}
