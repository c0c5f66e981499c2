#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the digit type and the shared counter.

use digit_pad::Error;
use digit_pad::digit::{Digit, DigitCounter};

#[test]
fn digit_new_accepts_zero_through_nine() {
    for value in 0..=9 {
        let digit = Digit::new(value).expect("0..=9 is a digit");
        assert_eq!(digit.value(), value);
        assert_eq!(digit.index(), usize::from(value));
    }
}

#[test]
fn digit_new_rejects_ten_and_above() {
    assert!(matches!(Digit::new(10), Err(Error::DigitOutOfRange(10))));
    assert!(matches!(Digit::try_from(255), Err(Error::DigitOutOfRange(255))));
}

#[test]
fn digit_steps_stop_at_the_ends() {
    assert_eq!(Digit::ZERO.decremented(), None);
    assert_eq!(Digit::MAX.incremented(), None);
    assert_eq!(Digit::ZERO.incremented(), Some(Digit::new(1).unwrap()));
    assert_eq!(Digit::MAX.decremented(), Some(Digit::new(8).unwrap()));
}

#[test]
fn digit_displays_as_number() {
    assert_eq!(Digit::new(7).unwrap().to_string(), "7");
}

#[test]
fn counter_decrements_from_nine_down_to_zero_then_holds() {
    let counter = DigitCounter::new(Digit::MAX);
    let mut observed = vec![counter.get().value()];
    for _ in 0..12 {
        counter.decrement();
        observed.push(counter.get().value());
    }
    assert_eq!(observed, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 0, 0, 0]);
}

#[test]
fn counter_increments_from_zero_up_to_nine_then_holds() {
    let counter = DigitCounter::default();
    let mut observed = vec![counter.get().value()];
    for _ in 0..12 {
        counter.increment();
        observed.push(counter.get().value());
    }
    assert_eq!(observed, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 9, 9, 9]);
}

#[test]
fn counter_reports_only_real_changes() {
    let counter = DigitCounter::new(Digit::ZERO);
    assert_eq!(counter.decrement(), None);
    assert_eq!(counter.increment(), Some(Digit::new(1).unwrap()));
    assert_eq!(counter.decrement(), Some(Digit::ZERO));

    let counter = DigitCounter::new(Digit::MAX);
    assert_eq!(counter.increment(), None);
    assert_eq!(counter.get(), Digit::MAX);
}
