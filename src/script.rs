use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use crate::{Action, Animated};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptConfig {
	/// Initial value of [`Script::time_scale`].
	pub time_scale: f32,
	/// Destroy the script once it runs out of actions.
	pub destroy_on_complete: bool,
	/// Ignore the host scale passed to [`Script::update_scaled`].
	pub unscaled_time: bool,
}

impl Default for ScriptConfig {
	fn default() -> Self {
		ScriptConfig {
			time_scale: 1.0,
			destroy_on_complete: false,
			unscaled_time: false,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptState {
	/// Nothing to run.
	Idle,
	Running,
	/// Terminal. Updates are ignored and new actions are dropped.
	Destroyed,
}

/// Token returned by [`Script::run`] to cancel the submitted action.
#[derive(Clone)]
pub struct ActionHandle {
	body: Rc<HandleBody>,
}

struct HandleBody {
	removed: Cell<bool>,
	/// Empty while the action is being updated and after disposal.
	action: RefCell<Option<Box<dyn Action>>>,
}

impl ActionHandle {
	fn new(action: Box<dyn Action>) -> Self {
		ActionHandle {
			body: Rc::new(HandleBody {
				removed: Cell::new(false),
				action: RefCell::new(Some(action)),
			}),
		}
	}

	fn removed() -> Self {
		ActionHandle {
			body: Rc::new(HandleBody {
				removed: Cell::new(true),
				action: RefCell::new(None),
			}),
		}
	}

	/// Cancels the action. Safe to call from inside the action's own update,
	/// in which case it is disposed as soon as that update returns.
	///
	/// Returns `false` if the handle was already disposed.
	pub fn dispose(&self) -> bool {
		if self.body.removed.replace(true) {
			return false;
		}

		let action = self.body.action.borrow_mut().take();
		if let Some(action) = action {
			dispose_action(action);
		}
		true
	}

	pub fn is_removed(&self) -> bool {
		self.body.removed.get()
	}

	/// Advances the action and returns whether it should stay in the script.
	fn tick(&self, dt: f32) -> bool {
		if self.body.removed.get() {
			return false;
		}

		let action = self.body.action.borrow_mut().take();
		let Some(mut action) = action else {
			return false;
		};

		let progress = action.update(dt);

		if self.body.removed.get() {
			tracing::trace!("action disposed during its own update");
			dispose_action(action);
			return false;
		}

		if progress.is_done() {
			self.body.removed.set(true);
			dispose_action(action);
			return false;
		}

		*self.body.action.borrow_mut() = Some(action);
		true
	}
}

impl Debug for ActionHandle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionHandle")
			.field("removed", &self.is_removed())
			.finish()
	}
}

fn dispose_action(mut action: Box<dyn Action>) {
	if let Some(disposable) = action.disposable() {
		disposable.dispose();
	}
}

/// Owns a set of running actions and advances them once per host tick.
///
/// ```
/// use choreo::{Animated, AnimateTo, Delay, Script, Sequence};
///
/// let alpha = Animated::new(0.0f32);
/// let mut script = Script::new();
/// script.run(
/// 	Sequence::new()
/// 		.with(Delay::new(0.5))
/// 		.with(AnimateTo::new(&alpha, 1.0, 1.0)),
/// );
///
/// script.update(0.5);
/// script.update(0.5);
/// assert_eq!(alpha.get(), 0.5);
/// ```
pub struct Script {
	config: ScriptConfig,
	time_scale: Animated<f32>,
	handles: Vec<ActionHandle>,
	state: ScriptState,
	paused: bool,
}

impl Default for Script {
	fn default() -> Self {
		Script::new()
	}
}

impl Script {
	pub fn new() -> Self {
		Script::with_config(ScriptConfig::default())
	}

	pub fn with_config(config: ScriptConfig) -> Self {
		Script {
			config,
			time_scale: Animated::new(config.time_scale),
			handles: Vec::new(),
			state: ScriptState::Idle,
			paused: false,
		}
	}

	pub fn destroy_on_complete(mut self, destroy_on_complete: bool) -> Self {
		self.config.destroy_on_complete = destroy_on_complete;
		self
	}

	pub fn unscaled_time(mut self, unscaled_time: bool) -> Self {
		self.config.unscaled_time = unscaled_time;
		self
	}

	/// Starts running `action` from the next update.
	pub fn run(&mut self, action: impl Action + 'static) -> ActionHandle {
		if self.state == ScriptState::Destroyed {
			tracing::warn!("action submitted to a destroyed script was dropped");
			dispose_action(Box::new(action));
			return ActionHandle::removed();
		}

		let handle = ActionHandle::new(Box::new(action));
		self.handles.push(handle.clone());

		if self.state == ScriptState::Idle {
			tracing::debug!("script started");
			self.state = ScriptState::Running;
		}

		handle
	}

	pub fn update(&mut self, dt: f32) {
		self.update_scaled(dt, 1.0);
	}

	/// Advances every action by `dt` scaled by [`Script::time_scale`] and by
	/// `host_scale`. A non-positive host scale is treated as a paused host
	/// clock and the raw `dt` is used instead, as with unscaled time.
	pub fn update_scaled(&mut self, dt: f32, host_scale: f32) {
		if self.paused || self.state == ScriptState::Destroyed {
			return;
		}

		self.time_scale.update(dt);

		let host_scale = if self.config.unscaled_time || host_scale <= 0.0 {
			1.0
		} else {
			host_scale
		};
		let dt = dt * self.time_scale.get() * host_scale;

		tracing::trace!(dt, actions = self.handles.len(), "script tick");

		self.handles.retain(|handle| handle.tick(dt));

		if self.handles.is_empty() && self.state == ScriptState::Running {
			self.finish();
		}
	}

	/// Disposes every running action.
	pub fn stop_all(&mut self) {
		for handle in std::mem::take(&mut self.handles) {
			handle.dispose();
		}

		if self.state == ScriptState::Running {
			self.finish();
		}
	}

	pub fn pause(&mut self) {
		self.paused = true;
	}

	pub fn resume(&mut self) {
		self.paused = false;
	}

	pub fn is_paused(&self) -> bool {
		self.paused
	}

	pub fn is_running(&self) -> bool {
		self.state == ScriptState::Running
	}

	pub fn is_destroyed(&self) -> bool {
		self.state == ScriptState::Destroyed
	}

	pub fn state(&self) -> ScriptState {
		self.state
	}

	/// Number of actions not yet completed or reclaimed.
	pub fn len(&self) -> usize {
		self.handles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.handles.is_empty()
	}

	/// Multiplier applied to every tick. Animate it to slow down or speed up
	/// the whole script.
	pub fn time_scale(&self) -> &Animated<f32> {
		&self.time_scale
	}

	fn finish(&mut self) {
		if self.config.destroy_on_complete {
			tracing::debug!("script complete, destroying");
			self.state = ScriptState::Destroyed;
		} else {
			tracing::debug!("script complete");
			self.state = ScriptState::Idle;
		}
	}
}

impl Drop for Script {
	fn drop(&mut self) {
		if self.state == ScriptState::Running {
			self.stop_all();
		}
	}
}
