use std::cell::{Cell, OnceCell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use crate::ease::Ease;
use crate::{Behavior, Binding, Connection, Signal, Tween};

/// A scalar that behaviors can drive. Behaviors produce `f32` samples,
/// integer types truncate them.
pub trait Animatable: Copy + PartialEq + 'static {
	fn from_sample(sample: f32) -> Self;
	fn to_sample(self) -> f32;
}

impl Animatable for f32 {
	fn from_sample(sample: f32) -> Self {
		sample
	}

	fn to_sample(self) -> f32 {
		self
	}
}

impl Animatable for f64 {
	fn from_sample(sample: f32) -> Self {
		sample as f64
	}

	fn to_sample(self) -> f32 {
		self as f32
	}
}

impl Animatable for i32 {
	fn from_sample(sample: f32) -> Self {
		sample as i32
	}

	fn to_sample(self) -> f32 {
		self as f32
	}
}

impl Animatable for i64 {
	fn from_sample(sample: f32) -> Self {
		sample as i64
	}

	fn to_sample(self) -> f32 {
		self as f32
	}
}

/// A value that is either set directly or driven every tick by a [`Behavior`].
///
/// Cloning produces another handle to the same value. Direct writes
/// and behaviors are exclusive: [`Animated::set`] detaches the behavior.
pub struct Animated<T> {
	body: Rc<AnimatedBody<T>>,
}

struct AnimatedBody<T> {
	value: Cell<T>,
	behavior: RefCell<Option<Box<dyn Behavior>>>,
	/// Bumped every time the behavior slot changes hands.
	generation: Cell<u64>,
	changed: OnceCell<Signal<(T, T)>>,
}

impl<T> Clone for Animated<T> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

impl<T> Default for Animated<T>
where
	T: Animatable + Default,
{
	fn default() -> Self {
		Animated::new(Default::default())
	}
}

impl<T> Animated<T>
where
	T: Animatable,
{
	pub fn new(value: T) -> Self {
		Animated {
			body: Rc::new(AnimatedBody {
				value: Cell::new(value),
				behavior: RefCell::new(None),
				generation: Cell::new(0),
				changed: OnceCell::new(),
			}),
		}
	}

	#[inline]
	pub fn get(&self) -> T {
		self.body.value.get()
	}

	/// Writes the value directly, detaching any behavior. A behavior being
	/// sampled at the time of the write is discarded along with its sample.
	pub fn set(&self, value: T) {
		let previous = self.body.behavior.borrow_mut().take();
		self.bump();
		drop(previous);
		self.assign(value);
	}

	/// Emitted with `(new, old)` whenever the value actually changes.
	pub fn changed(&self) -> &Signal<(T, T)> {
		self.body.changed.get_or_init(Signal::new)
	}

	/// Calls `listener` with `(current, current)` right away and then on
	/// every change.
	pub fn watch(&self, mut listener: impl FnMut(&(T, T)) + 'static) -> Connection {
		let value = self.get();
		listener(&(value, value));
		self.changed().connect(listener)
	}

	pub fn has_behavior(&self) -> bool {
		self.body.behavior.borrow().is_some()
	}

	/// Attaches a behavior and samples it once at `t = 0`.
	pub fn set_behavior(&self, behavior: impl Behavior) {
		self.attach(Box::new(behavior));
	}

	/// Returns `true` if a behavior was attached.
	pub fn clear_behavior(&self) -> bool {
		let previous = self.body.behavior.borrow_mut().take();
		if previous.is_some() {
			self.bump();
		}
		previous.is_some()
	}

	pub fn update(&self, dt: f32) {
		let behavior = self.body.behavior.borrow_mut().take();
		let Some(mut behavior) = behavior else {
			return;
		};

		let generation = self.body.generation.get();
		let sample = behavior.update(dt);

		// Written or replaced while sampling, the later write wins.
		if self.body.generation.get() != generation {
			return;
		}

		if behavior.is_complete() {
			self.bump();
		} else {
			*self.body.behavior.borrow_mut() = Some(behavior);
		}

		self.assign(T::from_sample(sample));
	}

	/// Tweens from `from` to `to` over `seconds`.
	pub fn animate(&self, from: T, to: f32, seconds: f32, ease: Ease) {
		self.set(from);
		self.animate_to(to, seconds, ease);
	}

	/// Tweens from the current value to `to` over `seconds`.
	pub fn animate_to(&self, to: f32, seconds: f32, ease: Ease) {
		let from = self.get().to_sample();
		self.set_behavior(Tween::new(from, to, seconds).with_ease(ease));
	}

	/// Tweens from the current value by `by` over `seconds`.
	pub fn animate_by(&self, by: f32, seconds: f32, ease: Ease) {
		let from = self.get().to_sample();
		self.set_behavior(Tween::new(from, from + by, seconds).with_ease(ease));
	}

	/// Mirrors `target` until another behavior or a direct write replaces
	/// the binding.
	pub fn bind_to<S: Animatable>(&self, target: &Animated<S>) {
		self.set_behavior(Binding::new(target));
	}

	pub fn bind_to_with<S: Animatable>(
		&self,
		target: &Animated<S>,
		transform: impl Fn(f32) -> f32 + 'static,
	) {
		self.set_behavior(Binding::with_transform(target, transform));
	}

	/// Attaches `behavior` and returns the generation it was attached under.
	/// The generation changes as soon as the behavior is detached.
	pub(crate) fn attach(&self, behavior: Box<dyn Behavior>) -> u64 {
		*self.body.behavior.borrow_mut() = Some(behavior);
		let generation = self.bump();
		self.update(0.0);
		generation
	}

	pub(crate) fn generation(&self) -> u64 {
		self.body.generation.get()
	}

	fn bump(&self) -> u64 {
		let generation = self.body.generation.get().wrapping_add(1);
		self.body.generation.set(generation);
		generation
	}

	fn assign(&self, value: T) {
		let old = self.body.value.replace(value);
		if old != value {
			if let Some(changed) = self.body.changed.get() {
				changed.emit((value, old));
			}
		}
	}
}

impl<T> Debug for Animated<T>
where
	T: Animatable + Debug,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Animated")
			.field("value", &self.get())
			.field("animating", &self.has_behavior())
			.finish()
	}
}
