//! Two-button digit counter shown on a 5×5 NeoPixel-style (WS2812) matrix, for Pico 1 and 2.
//!
//! Button "A" steps the digit down and button "B" steps it up, clamped to `0..=9`.
//! Each accepted press lights a feedback LED for 200 ms, a third LED blinks as a
//! heartbeat, and every change is redrawn on the matrix (blank first, then the glyph).
//!
//! See [`DigitPad`](crate::digit_pad::DigitPad) for the assembled device and the
//! `demos/digit_pad.rs` binary for the firmware entry point.
//!
//! # Glossary
//!
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the RP2040/RP2350 state machines that generate the WS2812 bit timing without the CPU.
//! - **Digit:** integer `0..=9` selecting which glyph and color are shown.
//! - **Glyph mask:** fixed 25-element lit/unlit pattern for a digit, in matrix wiring order.
//! - **Debounce window:** minimum spacing (200 ms) between accepted presses of the same button.
//! - **Flush:** one complete transmission of the frame buffer, including the latch gap.
//! - **Indicator:** a feedback LED that lights on an accepted press and turns itself off.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: the Cortex-M runtime is required on hardware
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature (or 'host' for tests)");

pub mod button;
pub mod digit;
#[cfg(not(feature = "host"))]
pub mod digit_pad;
mod error;
pub mod glyph;
#[cfg(not(feature = "host"))]
pub mod hardware;
pub mod heartbeat;
pub mod indicator;
pub mod led_strip;
pub mod main_loop;
pub mod renderer;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
