use crate::ease::{self, Ease};
use crate::Behavior;

/// Interpolates from `from` to `to` over `duration` seconds.
#[derive(Debug, Clone)]
pub struct Tween {
	from: f32,
	to: f32,
	duration: f32,
	ease: Ease,
	elapsed: f32,
}

impl Tween {
	pub fn new(from: f32, to: f32, duration: f32) -> Self {
		Tween {
			from,
			to,
			duration,
			ease: ease::linear,
			elapsed: 0.0,
		}
	}

	pub fn with_ease(mut self, ease: Ease) -> Self {
		self.ease = ease;
		self
	}

	pub fn elapsed(&self) -> f32 {
		self.elapsed
	}

	pub fn duration(&self) -> f32 {
		self.duration
	}
}

impl Behavior for Tween {
	fn update(&mut self, dt: f32) -> f32 {
		self.elapsed += dt;

		if self.elapsed >= self.duration {
			self.to
		} else {
			self.from + (self.to - self.from) * (self.ease)(self.elapsed / self.duration)
		}
	}

	fn is_complete(&self) -> bool {
		self.elapsed >= self.duration
	}
}

/// A tween that plays over and over, optionally reversing direction
/// on every cycle.
#[derive(Debug, Clone)]
pub struct RepeatTween {
	from: f32,
	to: f32,
	duration: f32,
	ease: Ease,
	/// Zero repeats forever.
	cycles: u32,
	yoyo: bool,

	elapsed: f32,
	count: u32,
	forward: bool,
	complete: bool,
}

impl RepeatTween {
	pub fn new(from: f32, to: f32, duration: f32) -> Self {
		RepeatTween {
			from,
			to,
			duration,
			ease: ease::linear,
			cycles: 0,
			yoyo: false,
			elapsed: 0.0,
			count: 0,
			forward: true,
			complete: false,
		}
	}

	pub fn with_ease(mut self, ease: Ease) -> Self {
		self.ease = ease;
		self
	}

	/// Number of cycles to play before completing, `0` for forever.
	pub fn cycles(mut self, cycles: u32) -> Self {
		self.cycles = cycles;
		self
	}

	pub fn yoyo(mut self, yoyo: bool) -> Self {
		self.yoyo = yoyo;
		self
	}

	/// Cycles finished so far.
	pub fn count(&self) -> u32 {
		self.count
	}

	fn end_value(&self) -> f32 {
		if self.forward {
			self.to
		} else {
			self.from
		}
	}

	fn sample(&self) -> f32 {
		let progress = if self.duration > 0.0 {
			self.elapsed / self.duration
		} else {
			1.0
		};
		let t = if self.forward { progress } else { 1.0 - progress };
		self.from + (self.to - self.from) * (self.ease)(t)
	}
}

impl Behavior for RepeatTween {
	fn update(&mut self, dt: f32) -> f32 {
		if self.complete {
			return self.end_value();
		}

		self.elapsed += dt;
		if self.elapsed >= self.duration {
			self.count += 1;
			if self.cycles > 0 && self.count >= self.cycles {
				self.complete = true;
				return self.end_value();
			}

			self.elapsed = 0.0;
			if self.yoyo {
				self.forward = !self.forward;
			}
		}

		self.sample()
	}

	fn is_complete(&self) -> bool {
		self.complete
	}
}
