//! Greedy word wrapping against measured text widths.

use core::cell::RefCell;

use heapless::Vec;
use log::{debug, warn};

/// Upper bound on wrapped output lines kept for one paragraph.
pub const MAX_WRAPPED_LINES: usize = 64;

/// Wrapped output: every line borrows from the source paragraph.
pub type WrappedText<'a> = Vec<&'a str, MAX_WRAPPED_LINES>;

/// Pixel width oracle for the font a surface draws with.
pub trait TextMeasure {
    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> u32;

    /// Identifies the font metrics; wraps computed under another key are stale.
    fn metrics_key(&self) -> u32;
}

/// Monospace metrics: every glyph advances by the same amount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedAdvance {
    pub advance: u32,
    pub spacing: u32,
}

impl FixedAdvance {
    pub const fn new(advance: u32, spacing: u32) -> Self {
        Self { advance, spacing }
    }
}

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str) -> u32 {
        let glyphs = text.chars().count() as u32;
        if glyphs == 0 {
            return 0;
        }

        glyphs
            .saturating_mul(self.advance)
            .saturating_add((glyphs - 1).saturating_mul(self.spacing))
    }

    fn metrics_key(&self) -> u32 {
        (self.advance << 16) | (self.spacing & 0xFFFF)
    }
}

/// Wraps each source line independently.
///
/// Blank source lines stay as empty output lines. Words are accumulated until
/// the next one would make the line wider than `max_width`; a single word that
/// is already too wide gets a line of its own.
pub fn wrap_paragraph<'a, M>(source: &[&'a str], max_width: u32, measure: &M) -> WrappedText<'a>
where
    M: TextMeasure + ?Sized,
{
    let mut out = WrappedText::new();
    let mut overflowed = false;

    let mut push = |out: &mut WrappedText<'a>, line: &'a str| {
        if out.push(line).is_err() && !overflowed {
            overflowed = true;
            warn!(
                "text-wrap: output exceeds {} lines, dropping the rest",
                MAX_WRAPPED_LINES
            );
        }
    };

    for &line in source {
        if line.trim().is_empty() {
            push(&mut out, "");
            continue;
        }

        // Current line as a byte span of `line`; empty while start == end.
        let mut start = 0usize;
        let mut end = 0usize;
        let mut word_start = 0usize;

        for word in line.split(' ') {
            let word_end = word_start + word.len();
            let candidate_start = if start == end { word_start } else { start };
            let candidate = &line[candidate_start..word_end];

            if measure.text_width(candidate) > max_width {
                if start != end {
                    push(&mut out, &line[start..end]);
                }
                start = word_start;
                end = word_end;
            } else {
                start = candidate_start;
                end = word_end;
            }

            word_start = word_end + 1;
        }

        if start != end {
            push(&mut out, &line[start..end]);
        }
    }

    out
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct WrapKey {
    max_width: u32,
    metrics: u32,
}

#[derive(Debug)]
struct CachedWrap<'a> {
    key: WrapKey,
    lines: WrappedText<'a>,
}

/// Memoized [`wrap_paragraph`] for one fixed source paragraph.
///
/// Recomputing is always safe: the same width and metrics yield the same
/// lines.
#[derive(Debug)]
pub struct WrapCache<'a> {
    source: &'a [&'a str],
    slot: RefCell<Option<CachedWrap<'a>>>,
}

impl<'a> WrapCache<'a> {
    pub const fn new(source: &'a [&'a str]) -> Self {
        Self {
            source,
            slot: RefCell::new(None),
        }
    }

    /// Drops the memoized wrap so the next query recomputes it.
    pub fn invalidate(&self) {
        self.slot.replace(None);
    }

    /// Number of wrapped lines for the given width and metrics.
    pub fn line_count<M>(&self, max_width: u32, measure: &M) -> usize
    where
        M: TextMeasure + ?Sized,
    {
        self.with_lines(max_width, measure, |lines| lines.len())
    }

    /// Runs `f` over the wrapped lines, rewrapping first if the key changed.
    pub fn with_lines<M, R, F>(&self, max_width: u32, measure: &M, f: F) -> R
    where
        M: TextMeasure + ?Sized,
        F: FnOnce(&[&'a str]) -> R,
    {
        let key = WrapKey {
            max_width,
            metrics: measure.metrics_key(),
        };

        let stale = self.slot.borrow().as_ref().map(|cached| cached.key) != Some(key);
        if stale {
            let lines = wrap_paragraph(self.source, max_width, measure);
            debug!(
                "text-wrap: rewrapped {} source lines into {} at width={}",
                self.source.len(),
                lines.len(),
                max_width
            );
            self.slot.replace(Some(CachedWrap { key, lines }));
        }

        let slot = self.slot.borrow();
        match slot.as_ref() {
            Some(cached) => f(&cached.lines),
            None => f(&[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONO: FixedAdvance = FixedAdvance::new(6, 0);

    #[test]
    fn blank_lines_survive_as_empty_lines() {
        let source = ["one", "", "   ", "two"];
        let lines = wrap_paragraph(&source, 60, &MONO);
        assert_eq!(lines.as_slice(), &["one", "", "", "two"]);
    }

    #[test]
    fn greedy_wrap_breaks_before_the_overflowing_word() {
        // 10 glyphs fit in 60px.
        let source = ["aaa bbb ccc ddd"];
        let lines = wrap_paragraph(&source, 60, &MONO);
        assert_eq!(lines.as_slice(), &["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn exact_fit_does_not_break() {
        let source = ["aaaa bbbbb"];
        let lines = wrap_paragraph(&source, 60, &MONO);
        assert_eq!(lines.as_slice(), &["aaaa bbbbb"]);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let source = ["hi supercalifragilistic yo"];
        let lines = wrap_paragraph(&source, 60, &MONO);
        assert_eq!(lines.as_slice(), &["hi", "supercalifragilistic", "yo"]);
    }

    #[test]
    fn measure_counts_glyphs_not_bytes() {
        assert_eq!(MONO.text_width("é•a"), 18);
        assert_eq!(FixedAdvance::new(5, 1).text_width("abc"), 17);
        assert_eq!(MONO.text_width(""), 0);
    }

    #[test]
    fn overflow_keeps_the_first_lines() {
        let source = ["x"; MAX_WRAPPED_LINES + 5];
        let lines = wrap_paragraph(&source, 60, &MONO);
        assert_eq!(lines.len(), MAX_WRAPPED_LINES);
    }

    #[test]
    fn cache_rewraps_when_width_or_metrics_change() {
        let source = ["aaa bbb ccc ddd"];
        let cache = WrapCache::new(&source);

        assert_eq!(cache.line_count(60, &MONO), 2);
        assert_eq!(cache.line_count(120, &MONO), 1);
        assert_eq!(cache.line_count(60, &FixedAdvance::new(12, 0)), 4);

        cache.invalidate();
        cache.with_lines(60, &MONO, |lines| {
            assert_eq!(lines, &["aaa bbb", "ccc ddd"]);
        });
    }
}
