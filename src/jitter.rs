use crate::Behavior;

/// Samples `base ± strength` uniformly on every update. Never completes.
///
/// The noise is a hash of `(seed, step)`, so two jitters with the same
/// seed produce the same sequence.
#[derive(Debug, Clone)]
pub struct Jitter {
	pub base: f32,
	pub strength: f32,
	seed: u64,
	step: u64,
}

impl Jitter {
	pub fn new(base: f32, strength: f32) -> Self {
		Jitter::with_seed(base, strength, 0)
	}

	pub fn with_seed(base: f32, strength: f32, seed: u64) -> Self {
		Jitter {
			base,
			strength,
			seed,
			step: 0,
		}
	}

	/// Uniform in `[0, 1)`.
	fn next_unit(&mut self) -> f32 {
		let hash = fxhash::hash64(&(self.seed, self.step));
		self.step = self.step.wrapping_add(1);
		(hash >> 40) as f32 / (1u64 << 24) as f32
	}
}

impl Behavior for Jitter {
	fn update(&mut self, _dt: f32) -> f32 {
		let unit = self.next_unit();
		self.base + (2.0 * unit - 1.0) * self.strength
	}

	fn is_complete(&self) -> bool {
		false
	}
}
