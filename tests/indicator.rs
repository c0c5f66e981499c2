#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for indicator timing.

use std::cell::RefCell;
use std::convert::Infallible;

use digit_pad::indicator::{
    INDICATOR_ON_DURATION, IndicatorStatic, IndicatorTimer, run_indicator,
};
use embassy_futures::block_on;
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::{ErrorType, OutputPin};

fn at_ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

#[test]
fn trigger_arms_for_200_ms() {
    let mut timer = IndicatorTimer::new();
    assert!(!timer.is_armed());

    let deadline = timer.trigger(at_ms(1_000));

    assert_eq!(deadline, at_ms(1_200));
    assert_eq!(timer.deadline(), Some(at_ms(1_200)));
    assert!(timer.is_armed());
}

#[test]
fn expires_exactly_at_deadline_and_only_once() {
    let mut timer = IndicatorTimer::new();
    timer.trigger(at_ms(1_000));

    assert!(!timer.expire(at_ms(1_199)));
    assert!(timer.is_armed());
    assert!(timer.expire(at_ms(1_200)));
    assert!(!timer.is_armed());
    assert!(!timer.expire(at_ms(1_300)));
}

#[test]
fn retrigger_replaces_deadline_from_retrigger_instant() {
    let mut timer = IndicatorTimer::new();
    timer.trigger(at_ms(1_000));
    timer.trigger(at_ms(1_150));

    assert_eq!(timer.deadline(), Some(at_ms(1_350)));
    assert!(!timer.expire(at_ms(1_200)));
    assert!(timer.expire(at_ms(1_350)));
}

#[test]
fn disarmed_timer_never_expires() {
    let mut timer = IndicatorTimer::default();
    assert!(!timer.expire(at_ms(u64::from(u32::MAX))));
    assert_eq!(timer.deadline(), None);
}

#[test]
fn separate_timers_do_not_affect_each_other() {
    let mut green = IndicatorTimer::new();
    let blue = IndicatorTimer::new();

    green.trigger(at_ms(500));

    assert!(green.is_armed());
    assert!(!blue.is_armed());
}

struct RecordingPin<'a> {
    edges: &'a RefCell<Vec<(bool, Instant)>>,
}

impl ErrorType for RecordingPin<'_> {
    type Error = Infallible;
}

impl OutputPin for RecordingPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.edges.borrow_mut().push((false, Instant::now()));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.edges.borrow_mut().push((true, Instant::now()));
        Ok(())
    }
}

#[test]
fn task_loop_lights_pin_then_turns_it_off_after_on_duration() {
    let edges = RefCell::new(Vec::new());
    let indicator_static = IndicatorStatic::new();

    let triggered_at = Instant::now();
    indicator_static.trigger_at(triggered_at);

    let script = async {
        Timer::after(Duration::from_millis(50)).await;
        let lit_midway = indicator_static.is_lit();
        Timer::after(INDICATOR_ON_DURATION).await;
        (lit_midway, indicator_static.is_lit())
    };
    let pin = RecordingPin { edges: &edges };
    let (lit_midway, lit_after) =
        match block_on(select(run_indicator(pin, &indicator_static), script)) {
            Either::First(never) => never,
            Either::Second(levels) => levels,
        };

    assert!(lit_midway);
    assert!(!lit_after);

    let edges = edges.into_inner();
    assert_eq!(edges.len(), 2);
    let (first_level, _) = edges[0];
    let (second_level, turned_off_at) = edges[1];
    assert!(first_level);
    assert!(!second_level);
    assert!(turned_off_at >= triggered_at + INDICATOR_ON_DURATION);
}
