use crate::{Action, Dispose, Progress};

/// Replays one action a number of times, or forever.
///
/// Leftover time from a completion is fed straight back into the next run
/// within the same tick, as long as the run actually used some of it.
pub struct Repeat {
	action: Option<Box<dyn Action>>,
	/// `None` repeats forever.
	count: Option<u32>,
	completed: u32,
}

impl Repeat {
	pub fn new(action: impl Action + 'static, count: Option<u32>) -> Self {
		Repeat {
			action: Some(Box::new(action)),
			count,
			completed: 0,
		}
	}

	pub fn times(action: impl Action + 'static, count: u32) -> Self {
		Repeat::new(action, Some(count))
	}

	pub fn forever(action: impl Action + 'static) -> Self {
		Repeat::new(action, None)
	}

	/// Completions so far in the current run.
	pub fn completed(&self) -> u32 {
		self.completed
	}
}

impl Action for Repeat {
	fn update(&mut self, dt: f32) -> Progress {
		if self.count == Some(0) {
			return Progress::Done(0.0);
		}
		let Some(action) = self.action.as_mut() else {
			return Progress::Running;
		};

		let mut budget = dt;
		loop {
			let Progress::Done(overtime) = action.update(budget) else {
				return Progress::Running;
			};

			self.completed += 1;
			if let Some(count) = self.count {
				if self.completed >= count {
					self.completed = 0;
					return Progress::Done(overtime);
				}
			}

			if overtime <= 0.0 || overtime >= budget {
				return Progress::Running;
			}
			budget = overtime;
		}
	}

	fn disposable(&mut self) -> Option<&mut dyn Dispose> {
		Some(self)
	}
}

impl Dispose for Repeat {
	fn dispose(&mut self) {
		if let Some(disposable) = self.action.as_mut().and_then(|action| action.disposable()) {
			disposable.dispose();
		}
		self.action = None;
		self.completed = 0;
	}
}
