use smallvec::SmallVec;

use crate::Action;

/// Identifies a child inside the composite it was added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildId(u64);

pub(crate) struct Slot {
	pub(crate) id: ChildId,
	/// `None` once removed. The slot itself stays so indices remain stable.
	pub(crate) action: Option<Box<dyn Action>>,
	/// Completed and waiting for its siblings.
	pub(crate) done: bool,
}

/// Ordered child storage shared by the list composites.
pub(crate) struct Children {
	slots: SmallVec<[Slot; 4]>,
	next_id: u64,
}

impl Children {
	pub(crate) fn new() -> Self {
		Children {
			slots: SmallVec::new_const(),
			next_id: 0,
		}
	}

	pub(crate) fn push(&mut self, action: Box<dyn Action>) -> ChildId {
		let id = ChildId(self.next_id);
		self.next_id += 1;
		self.slots.push(Slot {
			id,
			action: Some(action),
			done: false,
		});
		id
	}

	/// Returns `false` if `id` is unknown or was already removed.
	pub(crate) fn remove(&mut self, id: ChildId) -> bool {
		match self.slots.iter_mut().find(|slot| slot.id == id) {
			Some(slot) => slot.action.take().is_some(),
			None => false,
		}
	}

	pub(crate) fn clear(&mut self) {
		self.slots.clear();
	}

	pub(crate) fn live(&self) -> usize {
		self.slots.iter().filter(|slot| slot.action.is_some()).count()
	}

	pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
		self.slots.get_mut(index)
	}

	pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Slot> {
		self.slots.iter_mut()
	}

	pub(crate) fn reset_done(&mut self) {
		for slot in &mut self.slots {
			slot.done = false;
		}
	}

	/// Disposes every child that can be disposed and empties the list.
	pub(crate) fn dispose(&mut self) {
		for mut slot in self.slots.drain(..) {
			if let Some(disposable) = slot.action.as_mut().and_then(|action| action.disposable()) {
				disposable.dispose();
			}
		}
	}
}
