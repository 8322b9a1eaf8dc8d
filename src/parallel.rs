use crate::children::{ChildId, Children};
use crate::{Action, Dispose, Progress};

/// Runs all of its children side by side and completes once every one of
/// them has.
///
/// Every pending child sees the full tick. The overtime reported is what
/// remained after the slowest child that finished on the completing tick.
pub struct Parallel {
	children: Children,
}

impl Default for Parallel {
	fn default() -> Self {
		Parallel::new()
	}
}

impl Parallel {
	pub fn new() -> Self {
		Parallel {
			children: Children::new(),
		}
	}

	pub fn from_actions(actions: impl IntoIterator<Item = Box<dyn Action>>) -> Self {
		let mut parallel = Parallel::new();
		for action in actions {
			parallel.children.push(action);
		}
		parallel
	}

	pub fn with(mut self, action: impl Action + 'static) -> Self {
		self.add(action);
		self
	}

	pub fn add(&mut self, action: impl Action + 'static) -> ChildId {
		self.children.push(Box::new(action))
	}

	pub fn remove(&mut self, id: ChildId) -> bool {
		self.children.remove(id)
	}

	pub fn clear(&mut self) {
		self.children.clear();
	}

	pub fn len(&self) -> usize {
		self.children.live()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Action for Parallel {
	fn update(&mut self, dt: f32) -> Progress {
		if self.children.live() == 0 {
			return Progress::Running;
		}

		let mut pending = false;
		let mut overtime: Option<f32> = None;

		for slot in self.children.iter_mut() {
			if slot.done {
				continue;
			}
			let Some(action) = slot.action.as_mut() else {
				continue;
			};

			match action.update(dt) {
				Progress::Running => pending = true,
				Progress::Done(left) => {
					slot.done = true;
					overtime = Some(overtime.map_or(left, |min| min.min(left)));
				}
			}
		}

		if pending {
			return Progress::Running;
		}

		self.children.reset_done();
		Progress::Done(overtime.unwrap_or(dt))
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		Some(self)
	}
}

impl Dispose for Parallel {
	fn dispose(&mut self) {
		self.children.dispose();
	}
}
