//! Draws a digit onto the LED matrix.
//!
//! See [`Renderer`] for the clear-then-draw sequence.

use crate::digit::Digit;
use crate::glyph::{ColorTable, GlyphTable, LED_MATRIX_LEN};
use crate::led_strip::{Frame1d, FrameWriter};

/// Owns the matrix frame buffer and the writer that flushes it.
///
/// Each [`render`](Self::render) is two flushes: an all-off frame, then the glyph. Only the
/// main loop should hold a `Renderer`; it is the single owner of the frame buffer.
///
/// # Example
///
/// ```rust,no_run
/// use digit_pad::digit::Digit;
/// use digit_pad::glyph::{COLORS, GLYPHS};
/// use digit_pad::led_strip::FrameWriter;
/// use digit_pad::renderer::Renderer;
///
/// async fn example(writer: impl FrameWriter<25>) -> digit_pad::Result<()> {
///     let mut renderer = Renderer::new(writer, &GLYPHS, &COLORS);
///     renderer.render(Digit::new(7)?).await;
///     Ok(())
/// }
/// ```
pub struct Renderer<'a, W> {
    writer: W,
    glyphs: &'a GlyphTable,
    colors: &'a ColorTable,
    frame: Frame1d<LED_MATRIX_LEN>,
}

impl<'a, W: FrameWriter<LED_MATRIX_LEN>> Renderer<'a, W> {
    /// Creates a renderer with a blank frame buffer. Nothing is sent until the first call.
    #[must_use]
    pub const fn new(writer: W, glyphs: &'a GlyphTable, colors: &'a ColorTable) -> Self {
        Self {
            writer,
            glyphs,
            colors,
            frame: Frame1d::new(),
        }
    }

    /// Blank the matrix: clear the buffer and flush it.
    pub async fn blank(&mut self) {
        self.frame.clear();
        self.writer.write_frame(&self.frame).await;
    }

    /// Show `digit`: blank the matrix, then flush its glyph in its color.
    ///
    /// # Panics
    ///
    /// Panics if the tables have no entry for `digit`. Both tables are sized by
    /// [`Digit::COUNT`], so this marks a corrupted table rather than bad input.
    pub async fn render(&mut self, digit: Digit) {
        self.blank().await;

        let (Some(glyph), Some(&color)) =
            (self.glyphs.get(digit.index()), self.colors.get(digit.index()))
        else {
            panic!("no glyph or color for digit {digit}");
        };
        for (index, _) in glyph.iter().enumerate().filter(|(_, lit)| **lit) {
            self.frame.set(index, color);
        }
        self.writer.write_frame(&self.frame).await;
    }

    /// The frame most recently flushed.
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<LED_MATRIX_LEN> {
        &self.frame
    }

    /// Give back the writer.
    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }
}
