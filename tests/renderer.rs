#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for drawing digits onto the matrix.

use digit_pad::digit::Digit;
use digit_pad::glyph::{COLORS, GLYPHS, LED_MATRIX_LEN};
use digit_pad::led_strip::{Frame1d, FrameWriter, Rgb};
use digit_pad::renderer::Renderer;
use embassy_futures::block_on;

#[derive(Default)]
struct RecordingWriter {
    flushes: Vec<Frame1d<LED_MATRIX_LEN>>,
}

impl FrameWriter<LED_MATRIX_LEN> for RecordingWriter {
    async fn write_frame(&mut self, frame: &Frame1d<LED_MATRIX_LEN>) {
        self.flushes.push(*frame);
    }
}

fn expected_frame(digit: Digit) -> Frame1d<LED_MATRIX_LEN> {
    let mut frame = Frame1d::new();
    for (index, lit) in GLYPHS[digit.index()].iter().enumerate() {
        if *lit {
            frame[index] = COLORS[digit.index()];
        }
    }
    frame
}

#[test]
fn every_digit_renders_its_glyph_in_its_color() {
    for value in 0..=9 {
        let digit = Digit::new(value).unwrap();
        let mut renderer = Renderer::new(RecordingWriter::default(), &GLYPHS, &COLORS);

        block_on(renderer.render(digit));

        let frame = renderer.frame();
        for (index, pixel) in frame.iter().enumerate() {
            let expected = if GLYPHS[digit.index()][index] {
                COLORS[digit.index()]
            } else {
                Rgb::new(0, 0, 0)
            };
            assert_eq!(*pixel, expected, "digit {value}, pixel {index}");
        }
    }
}

#[test]
fn render_flushes_blank_then_glyph() {
    for value in 0..=9 {
        let digit = Digit::new(value).unwrap();
        let mut renderer = Renderer::new(RecordingWriter::default(), &GLYPHS, &COLORS);

        block_on(renderer.render(digit));

        let writer = renderer.into_writer();
        assert_eq!(writer.flushes.len(), 2, "digit {value}");
        assert!(writer.flushes[0].is_blank(), "digit {value}");
        assert_eq!(writer.flushes[1], expected_frame(digit), "digit {value}");
    }
}

#[test]
fn rerender_leaves_no_pixels_from_previous_digit() {
    let mut renderer = Renderer::new(RecordingWriter::default(), &GLYPHS, &COLORS);

    block_on(renderer.render(Digit::new(8).unwrap()));
    block_on(renderer.render(Digit::new(1).unwrap()));

    assert_eq!(*renderer.frame(), expected_frame(Digit::new(1).unwrap()));
    let writer = renderer.into_writer();
    assert_eq!(writer.flushes.len(), 4);
    assert!(writer.flushes[2].is_blank());
}

#[test]
fn increment_from_four_redraws_five() {
    let mut renderer = Renderer::new(RecordingWriter::default(), &GLYPHS, &COLORS);
    block_on(renderer.render(Digit::new(4).unwrap()));
    block_on(renderer.render(Digit::new(5).unwrap()));

    let writer = renderer.into_writer();
    let five = writer.flushes[3];
    assert!(five.iter().any(|pixel| *pixel == COLORS[5]));
    assert_eq!(five, expected_frame(Digit::new(5).unwrap()));
}

#[test]
fn blank_sends_one_all_off_frame() {
    let mut renderer = Renderer::new(RecordingWriter::default(), &GLYPHS, &COLORS);
    block_on(renderer.blank());

    let writer = renderer.into_writer();
    assert_eq!(writer.flushes.len(), 1);
    assert!(writer.flushes[0].is_blank());
}

#[test]
fn every_glyph_lights_something_and_glyphs_are_distinct() {
    for (value, glyph) in GLYPHS.iter().enumerate() {
        assert!(glyph.iter().any(|lit| *lit), "glyph {value} is empty");
        for other in GLYPHS.iter().skip(value + 1) {
            assert_ne!(glyph, other, "glyph {value} duplicates a later glyph");
        }
    }
}
