pub mod ease;
pub mod macros;

mod action;
mod animated;
mod binding;
mod children;
mod first_of;
mod jitter;
mod parallel;
mod repeat;
mod script;
mod sequence;
mod signal;
mod sine;
mod tween;

pub use action::{from_fn, AnimateBy, AnimateTo, Call, Delay, FromFn};
pub use animated::{Animatable, Animated};
pub use binding::Binding;
pub use children::ChildId;
pub use ease::Ease;
pub use first_of::FirstOf;
pub use jitter::Jitter;
pub use parallel::Parallel;
pub use repeat::Repeat;
pub use script::{ActionHandle, Script, ScriptConfig, ScriptState};
pub use sequence::Sequence;
pub use signal::{Connection, Signal};
pub use sine::Sine;
pub use tween::{RepeatTween, Tween};

/// A unit of work advanced once per tick.
pub trait Action {
	/// Advances the action by `dt` seconds.
	///
	/// Returns [`Progress::Running`] when the whole `dt` was consumed and
	/// the action is not finished yet, or [`Progress::Done`] carrying the
	/// part of `dt` that was not needed to finish.
	fn update(&mut self, dt: f32) -> Progress;

	/// Exposes the disposal capability of this action, if it has one.
	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		None
	}
}

impl<A: Action + ?Sized> Action for Box<A> {
	fn update(&mut self, dt: f32) -> Progress {
		(**self).update(dt)
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		(**self).disposable()
	}
}

/// Releases resources held by an action or a listener registration.
pub trait Dispose {
	fn dispose(&mut self);
}

/// A stateful function of elapsed time that drives an [`Animated`] value.
pub trait Behavior: 'static {
	/// Advances by `dt` seconds and returns the new sample.
	fn update(&mut self, dt: f32) -> f32;

	/// Whether the behavior has nothing left to do. Once `true`
	/// the owning value detaches it.
	fn is_complete(&self) -> bool;
}

/// Outcome of a single [`Action::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Progress {
	/// Still in progress, the whole tick was consumed.
	Running,
	/// Completed during this tick with the given overtime left over.
	Done(f32),
}

impl Progress {
	/// Reads the raw float protocol: negative means running,
	/// anything else is the overtime of a completed action.
	pub fn from_raw(raw: f32) -> Self {
		if raw < 0.0 {
			Progress::Running
		} else {
			Progress::Done(raw)
		}
	}

	pub fn into_raw(self) -> f32 {
		match self {
			Progress::Running => -1.0,
			Progress::Done(overtime) => overtime,
		}
	}

	pub fn is_done(&self) -> bool {
		matches!(self, Progress::Done(_))
	}

	pub fn overtime(&self) -> Option<f32> {
		match self {
			Progress::Running => None,
			Progress::Done(overtime) => Some(*overtime),
		}
	}
}

impl From<Progress> for f32 {
	fn from(progress: Progress) -> Self {
		progress.into_raw()
	}
}
