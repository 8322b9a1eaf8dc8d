use crate::{Animatable, Animated, Behavior};

/// Mirrors another animated value, optionally through a transform.
/// Never completes.
pub struct Binding<S> {
	target: Animated<S>,
	transform: Option<Box<dyn Fn(f32) -> f32>>,
}

impl<S> Binding<S>
where
	S: Animatable,
{
	pub fn new(target: &Animated<S>) -> Self {
		Binding {
			target: target.clone(),
			transform: None,
		}
	}

	pub fn with_transform(target: &Animated<S>, transform: impl Fn(f32) -> f32 + 'static) -> Self {
		Binding {
			target: target.clone(),
			transform: Some(Box::new(transform)),
		}
	}
}

impl<S> Behavior for Binding<S>
where
	S: Animatable,
{
	fn update(&mut self, _dt: f32) -> f32 {
		let value = self.target.get().to_sample();
		match &self.transform {
			Some(transform) => transform(value),
			None => value,
		}
	}

	fn is_complete(&self) -> bool {
		false
	}
}
