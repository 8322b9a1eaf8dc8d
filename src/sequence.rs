use crate::children::{ChildId, Children};
use crate::{Action, Dispose, Progress};

/// Runs its children one after another.
///
/// Each child gets whatever is left of the tick after the children before
/// it finished, so several short children can complete within one update.
/// Once the last child completes the sequence rewinds and can be run again.
pub struct Sequence {
	children: Children,
	index: usize,
}

impl Default for Sequence {
	fn default() -> Self {
		Sequence::new()
	}
}

impl Sequence {
	pub fn new() -> Self {
		Sequence {
			children: Children::new(),
			index: 0,
		}
	}

	pub fn from_actions(actions: impl IntoIterator<Item = Box<dyn Action>>) -> Self {
		let mut sequence = Sequence::new();
		for action in actions {
			sequence.children.push(action);
		}
		sequence
	}

	pub fn with(mut self, action: impl Action + 'static) -> Self {
		self.add(action);
		self
	}

	pub fn add(&mut self, action: impl Action + 'static) -> ChildId {
		self.children.push(Box::new(action))
	}

	/// Removes a child without shifting the others. Returns `false` if it
	/// was already removed.
	pub fn remove(&mut self, id: ChildId) -> bool {
		self.children.remove(id)
	}

	pub fn clear(&mut self) {
		self.children.clear();
		self.index = 0;
	}

	/// Number of children that were not removed.
	pub fn len(&self) -> usize {
		self.children.live()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Action for Sequence {
	fn update(&mut self, dt: f32) -> Progress {
		if self.children.live() == 0 {
			return Progress::Running;
		}

		let mut budget = dt;
		while let Some(slot) = self.children.get_mut(self.index) {
			let Some(action) = slot.action.as_mut() else {
				self.index += 1;
				continue;
			};

			match action.update(budget) {
				Progress::Running => return Progress::Running,
				Progress::Done(overtime) => {
					budget = overtime;
					self.index += 1;
				}
			}
		}

		self.index = 0;
		Progress::Done(budget)
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		Some(self)
	}
}

impl Dispose for Sequence {
	fn dispose(&mut self) {
		self.children.dispose();
		self.index = 0;
	}
}
