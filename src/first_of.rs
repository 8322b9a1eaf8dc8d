use crate::children::{ChildId, Children};
use crate::{Action, Dispose, Progress};

/// Races its children and completes as soon as one of them does.
///
/// Children are updated in the order they were added and the race stops
/// at the first completion, so later children miss that tick. The others
/// are left as they are.
pub struct FirstOf {
	children: Children,
}

impl Default for FirstOf {
	fn default() -> Self {
		FirstOf::new()
	}
}

impl FirstOf {
	pub fn new() -> Self {
		FirstOf {
			children: Children::new(),
		}
	}

	pub fn from_actions(actions: impl IntoIterator<Item = Box<dyn Action>>) -> Self {
		let mut first_of = FirstOf::new();
		for action in actions {
			first_of.children.push(action);
		}
		first_of
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

impl Action for FirstOf {
	fn update(&mut self, dt: f32) -> Progress {
		for slot in self.children.iter_mut() {
			let Some(action) = slot.action.as_mut() else {
				continue;
			};

			if let Progress::Done(overtime) = action.update(dt) {
				return Progress::Done(overtime);
			}
		}

		Progress::Running
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		Some(self)
	}
}

impl Dispose for FirstOf {
	fn dispose(&mut self) {
		self.children.dispose();
	}
}
