use std::cell::RefCell;
use std::rc::Rc;

use choreo::{ease, Animated, Jitter, RepeatTween, Sine, Tween};
use mockall::predicate::eq;


use mock::Spy;

fn assert_close(actual: f32, expected: f32) {
	assert!(
		(actual - expected).abs() < 1e-5,
		"expected {expected}, got {actual}"
	);
}

#[test]
fn tween_reaches_target_and_detaches() {
	let value = Animated::new(0.0f32);
	value.animate_to(1.0, 1.0, ease::linear);

	assert_eq!(value.get(), 0.0);
	assert!(value.has_behavior());

	value.update(0.25);
	assert_eq!(value.get(), 0.25);
	value.update(0.5);
	assert_eq!(value.get(), 0.75);
	value.update(0.5);
	assert_eq!(value.get(), 1.0);
	assert!(!value.has_behavior());

	value.update(1.0);
	assert_eq!(value.get(), 1.0);
}

#[test]
fn tween_is_complete_exactly_at_duration() {
	use choreo::Behavior;

	let mut tween = Tween::new(2.0, 4.0, 1.0).with_ease(ease::quad_in);

	assert_eq!(tween.update(0.5), 2.5);
	assert!(!tween.is_complete());
	assert_eq!(tween.update(0.5), 4.0);
	assert!(tween.is_complete());
	assert_eq!(tween.update(0.5), 4.0);
	assert_eq!(tween.elapsed(), 1.5);
}

#[test]
fn zero_duration_tween_completes_immediately() {
	let value = Animated::new(1.0f32);
	value.animate_to(5.0, 0.0, ease::linear);

	assert_eq!(value.get(), 5.0);
	assert!(!value.has_behavior());
}

#[test]
fn animate_starts_from_the_given_value() {
	let value = Animated::new(0.0f64);
	value.animate(3.0, 5.0, 2.0, ease::linear);
	assert_eq!(value.get(), 3.0);

	value.update(1.0);
	assert_eq!(value.get(), 4.0);

	value.animate_by(-4.0, 1.0, ease::linear);
	value.update(1.0);
	assert_eq!(value.get(), 0.0);
}

#[test]
fn direct_set_clears_the_behavior() {
	let value = Animated::new(0.0f32);
	value.animate_to(1.0, 1.0, ease::linear);
	value.update(0.5);

	value.set(3.0);
	assert!(!value.has_behavior());

	value.update(0.5);
	assert_eq!(value.get(), 3.0);
	assert!(!value.clear_behavior());
}

#[test]
fn changed_fires_only_on_change() {
	let value = Animated::new(1.0f32);
	let mock = mock::SharedMock::new();

	value.changed().connect({
		let mock = mock.clone();
		move |(new, old)| mock.get().changed(*new, *old)
	});

	mock.get().expect_changed().with(eq(2.0), eq(1.0)).times(1).return_const(());
	value.set(1.0);
	value.set(2.0);
	value.set(2.0);
	mock.get().checkpoint();

	// A finished tween keeps sampling `to`, only the first write counts.
	mock.get().expect_changed().with(eq(4.0), eq(2.0)).times(1).return_const(());
	value.animate_to(4.0, 0.0, ease::linear);
	value.update(1.0);
	mock.get().checkpoint();
}

#[test]
fn watch_reports_the_current_value_first() {
	let value = Animated::new(7);
	let log = Rc::new(RefCell::new(vec![]));

	let connection = value.watch({
		let log = log.clone();
		move |change| log.borrow_mut().push(*change)
	});

	value.set(8);
	connection.disconnect();
	value.set(9);

	assert_eq!(*log.borrow(), vec![(7, 7), (8, 7)]);
}

#[test]
fn integer_values_truncate_samples() {
	let value = Animated::new(0);
	value.animate_to(10.0, 1.0, ease::linear);

	value.update(0.25);
	assert_eq!(value.get(), 2);
	value.update(0.75);
	assert_eq!(value.get(), 10);
}

#[test]
fn listener_may_write_the_value_it_observes() {
	let value = Animated::new(0.0f32);
	let log = Rc::new(RefCell::new(vec![]));

	value.changed().connect({
		let value = value.clone();
		move |(new, _)| {
			if *new > 5.0 {
				value.set(5.0);
			}
		}
	});
	value.changed().connect({
		let log = log.clone();
		move |change| log.borrow_mut().push(*change)
	});

	value.set(10.0);

	assert_eq!(value.get(), 5.0);
	assert_eq!(*log.borrow(), vec![(10.0, 0.0), (5.0, 10.0)]);
}

#[test]
fn binding_mirrors_its_target() {
	let source = Animated::new(1.0f32);
	let mirror = Animated::new(0.0f32);
	let doubled = Animated::new(0);

	mirror.bind_to(&source);
	doubled.bind_to_with(&source, |value| value * 2.0);
	assert_eq!(mirror.get(), 1.0);
	assert_eq!(doubled.get(), 2);

	source.set(3.0);
	mirror.update(0.1);
	doubled.update(0.1);
	assert_eq!(mirror.get(), 3.0);
	assert_eq!(doubled.get(), 6);
	assert!(mirror.has_behavior());

	mirror.set(0.0);
	source.set(4.0);
	mirror.update(0.1);
	assert_eq!(mirror.get(), 0.0);
}

#[test]
fn write_during_sampling_wins_over_the_sample() {
	let source = Animated::new(1.0f32);
	let value = Animated::new(0.0f32);

	value.bind_to_with(&source, {
		let value = value.clone();
		move |sample| {
			if sample > 2.0 {
				value.set(-1.0);
			}
			sample
		}
	});
	assert_eq!(value.get(), 1.0);
	assert!(value.has_behavior());

	source.set(3.0);
	value.update(0.1);

	assert_eq!(value.get(), -1.0);
	assert!(!value.has_behavior());
}

#[test]
fn repeat_tween_yoyos_and_settles_on_the_last_cycle() {
	let value = Animated::new(0.0f32);
	value.set_behavior(RepeatTween::new(0.0, 1.0, 1.0).cycles(2).yoyo(true));

	value.update(0.5);
	assert_eq!(value.get(), 0.5);
	value.update(0.5);
	assert_eq!(value.get(), 1.0);
	value.update(0.25);
	assert_eq!(value.get(), 0.75);
	value.update(0.75);
	assert_eq!(value.get(), 0.0);
	assert!(!value.has_behavior());
}

#[test]
fn repeat_tween_without_cycles_never_completes() {
	let value = Animated::new(0.0f32);
	value.set_behavior(RepeatTween::new(0.0, 2.0, 1.0));

	for _ in 0..9 {
		value.update(0.5);
	}

	assert!(value.has_behavior());
	assert_eq!(value.get(), 1.0);
}

#[test]
fn jitter_is_reproducible_and_bounded() {
	let first = Animated::new(0.0f32);
	let second = Animated::new(0.0f32);
	first.set_behavior(Jitter::with_seed(10.0, 2.0, 7));
	second.set_behavior(Jitter::with_seed(10.0, 2.0, 7));

	let mut distinct = false;
	let mut previous = first.get();
	for _ in 0..100 {
		first.update(0.016);
		second.update(0.016);

		assert_eq!(first.get(), second.get());
		assert!(first.get() >= 8.0 && first.get() <= 12.0);
		distinct |= first.get() != previous;
		previous = first.get();
	}

	assert!(distinct);
	assert!(first.has_behavior());
}

#[test]
fn sine_oscillates_and_settles_on_start() {
	let value = Animated::new(0.0f32);
	value.set_behavior(Sine::new(0.0, 1.0, 1.0).with_cycles(1.0));
	assert_close(value.get(), 0.0);

	value.update(0.5);
	assert_close(value.get(), 0.5);
	value.update(0.5);
	assert_close(value.get(), 1.0);
	assert!(value.has_behavior());

	value.update(1.0);
	assert_eq!(value.get(), 0.0);
	assert!(!value.has_behavior());
}

#[test]
fn sine_speed_is_animatable() {
	let value = Animated::new(0.0f32);
	let sine = Sine::new(0.0, 1.0, 1.0);
	let speed = sine.speed().clone();
	value.set_behavior(sine);

	speed.set(2.0);
	value.update(1.0);
	assert_close(value.get(), 0.5);

	speed.set(0.0);
	value.update(1.0);
	assert_close(value.get(), 0.5);
}

#[test]
fn sine_offset_shifts_the_phase() {
	let value = Animated::new(0.0f32);
	value.set_behavior(Sine::new(0.0, 1.0, 1.0).with_offset(1.0));
	assert_close(value.get(), 1.0);
}
