use crate::ease::{self, Ease};
use crate::{Action, Animatable, Animated, Dispose, Progress, Tween};

/// Waits for `seconds` to pass.
#[derive(Debug, Clone)]
pub struct Delay {
	duration: f32,
	elapsed: f32,
}

impl Delay {
	pub fn new(seconds: f32) -> Self {
		Delay {
			duration: seconds,
			elapsed: 0.0,
		}
	}
}

impl Action for Delay {
	fn update(&mut self, dt: f32) -> Progress {
		self.elapsed += dt;
		if self.elapsed < self.duration {
			return Progress::Running;
		}

		let overtime = self.elapsed - self.duration;
		self.elapsed = 0.0;
		Progress::Done(overtime.clamp(0.0, dt.max(0.0)))
	}
}

/// Calls a function once per run and completes without using any time.
pub struct Call<F> {
	func: F,
}

impl<F> Call<F>
where
	F: FnMut(),
{
	pub fn new(func: F) -> Self {
		Call { func }
	}
}

impl<F> Action for Call<F>
where
	F: FnMut(),
{
	fn update(&mut self, dt: f32) -> Progress {
		(self.func)();
		Progress::Done(dt)
	}
}

/// An action backed by a closure.
pub struct FromFn<F> {
	func: F,
}

pub fn from_fn<F>(func: F) -> FromFn<F>
where
	F: FnMut(f32) -> Progress,
{
	FromFn { func }
}

impl<F> Action for FromFn<F>
where
	F: FnMut(f32) -> Progress,
{
	fn update(&mut self, dt: f32) -> Progress {
		(self.func)(dt)
	}
}

/// Drives a tween on a value from wherever it is when the action starts.
///
/// The action owns the ticking of its value while it runs, so the value
/// should not be updated elsewhere in the meantime. It completes when the
/// tween detaches, either because it finished or because something else
/// took over the value. Disposing the action detaches a tween it still owns.
struct Tweening<T> {
	value: Animated<T>,
	seconds: f32,
	ease: Ease,
	/// Generation the tween was attached under and the time it has run.
	running: Option<(u64, f32)>,
}

impl<T> Tweening<T>
where
	T: Animatable,
{
	fn new(value: &Animated<T>, seconds: f32) -> Self {
		Tweening {
			value: value.clone(),
			seconds,
			ease: ease::linear,
			running: None,
		}
	}

	fn update(&mut self, dt: f32, target: impl FnOnce(f32) -> f32) -> Progress {
		let (generation, elapsed) = match self.running {
			Some(running) => running,
			None => {
				let from = self.value.get().to_sample();
				let tween = Tween::new(from, target(from), self.seconds).with_ease(self.ease);
				(self.value.attach(Box::new(tween)), 0.0)
			}
		};

		self.value.update(dt);
		let elapsed = elapsed + dt;

		if self.value.generation() == generation {
			self.running = Some((generation, elapsed));
			return Progress::Running;
		}

		self.running = None;
		let overtime = elapsed - self.seconds;
		Progress::Done(overtime.clamp(0.0, dt.max(0.0)))
	}

	fn detach(&mut self) {
		if let Some((generation, _)) = self.running.take() {
			if self.value.generation() == generation {
				self.value.clear_behavior();
			}
		}
	}
}

/// Tweens a value to a fixed target.
pub struct AnimateTo<T> {
	tweening: Tweening<T>,
	to: f32,
}

impl<T> AnimateTo<T>
where
	T: Animatable,
{
	pub fn new(value: &Animated<T>, to: f32, seconds: f32) -> Self {
		AnimateTo {
			tweening: Tweening::new(value, seconds),
			to,
		}
	}

	pub fn with_ease(mut self, ease: Ease) -> Self {
		self.tweening.ease = ease;
		self
	}
}

impl<T> Action for AnimateTo<T>
where
	T: Animatable,
{
	fn update(&mut self, dt: f32) -> Progress {
		let to = self.to;
		self.tweening.update(dt, |_| to)
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		Some(self)
	}
}

/// Tweens a value by a delta relative to where it starts.
pub struct AnimateBy<T> {
	tweening: Tweening<T>,
	by: f32,
}

impl<T> AnimateBy<T>
where
	T: Animatable,
{
	pub fn new(value: &Animated<T>, by: f32, seconds: f32) -> Self {
		AnimateBy {
			tweening: Tweening::new(value, seconds),
			by,
		}
	}

	pub fn with_ease(mut self, ease: Ease) -> Self {
		self.tweening.ease = ease;
		self
	}
}

impl<T> Action for AnimateBy<T>
where
	T: Animatable,
{
	fn update(&mut self, dt: f32) -> Progress {
		let by = self.by;
		self.tweening.update(dt, |from| from + by)
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		Some(self)
	}
}

impl<T> Dispose for AnimateTo<T>
where
	T: Animatable,
{
	fn dispose(&mut self) {
		self.tweening.detach();
	}
}

impl<T> Dispose for AnimateBy<T>
where
	T: Animatable,
{
	fn dispose(&mut self) {
		self.tweening.detach();
	}
}
