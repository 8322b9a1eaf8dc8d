use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::{Animated, Behavior};

/// Oscillates between `start` and `end` along a sine wave.
///
/// `speed` is the number of seconds one half-cycle (start to end) takes.
/// It is an [`Animated`] value of its own, so the oscillation can speed up
/// or slow down over time. A full cycle goes start → end → start.
pub struct Sine {
	start: f32,
	end: f32,
	/// Zero oscillates forever.
	cycles: f32,
	speed: Animated<f32>,
	phase: f32,
	travelled: f32,
}

impl Sine {
	pub fn new(start: f32, end: f32, speed: f32) -> Self {
		Sine {
			start,
			end,
			cycles: 0.0,
			speed: Animated::new(speed),
			phase: FRAC_PI_2,
			travelled: 0.0,
		}
	}

	pub fn with_cycles(mut self, cycles: f32) -> Self {
		self.cycles = cycles;
		self
	}

	/// Starts the wave `offset` seconds in, for staggering several sines.
	pub fn with_offset(mut self, offset: f32) -> Self {
		self.phase = FRAC_PI_2 + offset * self.rate();
		self
	}

	/// Handle to the half-cycle duration. Clone it before handing the sine
	/// to a value to keep control over the speed.
	pub fn speed(&self) -> &Animated<f32> {
		&self.speed
	}

	/// Phase advanced per second. A non-positive speed freezes the wave.
	fn rate(&self) -> f32 {
		let speed = self.speed.get();
		if speed > 0.0 {
			PI / speed
		} else {
			0.0
		}
	}
}

impl Behavior for Sine {
	fn update(&mut self, dt: f32) -> f32 {
		self.speed.update(dt);
		let step = dt * self.rate();
		self.phase += step;
		self.travelled += step;

		if self.is_complete() {
			return self.start;
		}

		let half = (self.start - self.end) * 0.5;
		let center = self.end + half;
		center + self.phase.sin() * half
	}

	fn is_complete(&self) -> bool {
		self.cycles > 0.0 && self.travelled / TAU >= self.cycles
	}
}
