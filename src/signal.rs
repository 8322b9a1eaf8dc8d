use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::{Rc, Weak};

type Listener<A> = Rc<RefCell<dyn FnMut(&A)>>;

/// An ordered multi-listener event.
///
/// Listeners may connect, disconnect or emit on the same signal while it
/// is dispatching. Such requests are queued and replayed in order once the
/// current emission has walked every listener.
pub struct Signal<A = ()> {
	body: Rc<SignalBody<A>>,
}

impl<A> Clone for Signal<A> {
	fn clone(&self) -> Self {
		Self {
			body: self.body.clone(),
		}
	}
}

impl<A: 'static> Default for Signal<A> {
	fn default() -> Self {
		Signal::new()
	}
}

struct SignalBody<A> {
	inner: RefCell<SignalInner<A>>,
	tasks: RefCell<VecDeque<Task<A>>>,
	this: Weak<SignalBody<A>>,
}

struct SignalInner<A> {
	slots: Vec<Slot<A>>,
	free: Vec<usize>,
	head: Head,
}

/// `Dispatching` replaces the list head while listeners are walked.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Head {
	Idle(Option<usize>),
	Dispatching,
}

struct Slot<A> {
	listener: Option<Listener<A>>,
	next: Option<usize>,
	generation: u32,
	stay_connected: bool,
	detached: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct ConnectionId {
	index: usize,
	generation: u32,
}

enum Task<A> {
	Link(ConnectionId, bool),
	Unlink(ConnectionId),
	Emit(A),
}

impl<A: 'static> Signal<A> {
	pub fn new() -> Self {
		Signal {
			body: Rc::new_cyclic(|this| SignalBody {
				inner: RefCell::new(SignalInner {
					slots: Vec::new(),
					free: Vec::new(),
					head: Head::Idle(None),
				}),
				tasks: RefCell::new(VecDeque::new()),
				this: this.clone(),
			}),
		}
	}

	/// Appends a listener after every existing one.
	pub fn connect(&self, listener: impl FnMut(&A) + 'static) -> Connection {
		self.body.connect(Rc::new(RefCell::new(listener)), false)
	}

	/// Prepends a listener so it fires before every existing one.
	pub fn connect_prioritized(&self, listener: impl FnMut(&A) + 'static) -> Connection {
		self.body.connect(Rc::new(RefCell::new(listener)), true)
	}

	/// Returns `false` if the connection is not attached to this signal
	/// any more.
	pub fn disconnect(&self, connection: &Connection) -> bool {
		let owner = connection.signal.as_ptr() as *const u8;
		if owner != Rc::as_ptr(&self.body) as *const u8 {
			return false;
		}
		self.body.disconnect(connection.id)
	}

	pub fn emit(&self, args: A) {
		if self.body.is_dispatching() {
			self.body.defer(Task::Emit(args));
		} else {
			self.body.dispatch(args);
		}
	}

	pub fn has_listeners(&self) -> bool {
		match self.body.inner.borrow().head {
			Head::Idle(head) => head.is_some(),
			Head::Dispatching => true,
		}
	}
}

impl<A: 'static> SignalBody<A> {
	fn is_dispatching(&self) -> bool {
		self.inner.borrow().head == Head::Dispatching
	}

	fn connect(&self, listener: Listener<A>, prioritize: bool) -> Connection {
		let id = self.inner.borrow_mut().allocate(listener);

		if self.is_dispatching() {
			self.defer(Task::Link(id, prioritize));
		} else {
			self.inner.borrow_mut().link(id, prioritize);
		}

		Connection {
			signal: self.this.clone() as Weak<dyn Detach>,
			id,
		}
	}

	fn disconnect(&self, id: ConnectionId) -> bool {
		let mut inner = self.inner.borrow_mut();
		if !inner.is_live(id) {
			return false;
		}

		if inner.head == Head::Dispatching {
			inner.slots[id.index].detached = true;
			std::mem::drop(inner);
			self.defer(Task::Unlink(id));
		} else {
			inner.unlink(id);
		}

		true
	}

	fn defer(&self, task: Task<A>) {
		let mut tasks = self.tasks.borrow_mut();
		tasks.push_back(task);
		tracing::trace!(pending = tasks.len(), "signal task deferred");
	}

	fn dispatch(&self, args: A) {
		let head = self.begin_dispatch();

		let mut cursor = head;
		while let Some(index) = cursor {
			let (listener, next, id) = {
				let inner = self.inner.borrow();
				let slot = &inner.slots[index];
				(
					slot.listener.clone(),
					slot.next,
					ConnectionId {
						index,
						generation: slot.generation,
					},
				)
			};

			if let Some(listener) = listener {
				(listener.borrow_mut())(&args);
			}

			let once = {
				let inner = self.inner.borrow();
				inner.is_live(id) && !inner.slots[index].stay_connected
			};
			if once {
				self.disconnect(id);
			}

			cursor = next;
		}

		self.end_dispatch(head);
	}

	fn begin_dispatch(&self) -> Option<usize> {
		let mut inner = self.inner.borrow_mut();
		match std::mem::replace(&mut inner.head, Head::Dispatching) {
			Head::Idle(head) => head,
			Head::Dispatching => {
				tracing::error!("signal dispatch entered while already dispatching");
				panic!("Signal was dispatched while it was already dispatching");
			}
		}
	}

	fn end_dispatch(&self, head: Option<usize>) {
		self.inner.borrow_mut().head = Head::Idle(head);

		loop {
			let task = self.tasks.borrow_mut().pop_front();
			let Some(task) = task else {
				break;
			};

			match task {
				Task::Link(id, prioritize) => self.inner.borrow_mut().link(id, prioritize),
				Task::Unlink(id) => self.inner.borrow_mut().unlink(id),
				Task::Emit(args) => self.dispatch(args),
			}
		}
	}
}

impl<A> SignalInner<A> {
	fn allocate(&mut self, listener: Listener<A>) -> ConnectionId {
		let index = match self.free.pop() {
			Some(index) => {
				let slot = &mut self.slots[index];
				slot.listener = Some(listener);
				slot.next = None;
				slot.stay_connected = true;
				slot.detached = false;
				index
			}
			None => {
				self.slots.push(Slot {
					listener: Some(listener),
					next: None,
					generation: 0,
					stay_connected: true,
					detached: false,
				});
				self.slots.len() - 1
			}
		};

		ConnectionId {
			index,
			generation: self.slots[index].generation,
		}
	}

	fn is_live(&self, id: ConnectionId) -> bool {
		self.slots.get(id.index).map_or(false, |slot| {
			slot.generation == id.generation && slot.listener.is_some() && !slot.detached
		})
	}

	fn head(&self) -> Option<usize> {
		match self.head {
			Head::Idle(head) => head,
			Head::Dispatching => unreachable!("signal list touched while dispatching"),
		}
	}

	fn link(&mut self, id: ConnectionId, prioritize: bool) {
		if !self.is_live(id) {
			return;
		}

		if prioritize {
			self.slots[id.index].next = self.head();
			self.head = Head::Idle(Some(id.index));
			return;
		}

		let mut tail = None;
		let mut cursor = self.head();
		while let Some(index) = cursor {
			tail = Some(index);
			cursor = self.slots[index].next;
		}

		match tail {
			Some(tail) => self.slots[tail].next = Some(id.index),
			None => self.head = Head::Idle(Some(id.index)),
		}
	}

	fn unlink(&mut self, id: ConnectionId) {
		let slot = &self.slots[id.index];
		if slot.generation != id.generation || slot.listener.is_none() {
			return;
		}

		let mut prev: Option<usize> = None;
		let mut cursor = self.head();
		while let Some(index) = cursor {
			let next = self.slots[index].next;
			if index == id.index {
				match prev {
					Some(prev) => self.slots[prev].next = next,
					None => self.head = Head::Idle(next),
				}
				break;
			}
			prev = Some(index);
			cursor = next;
		}

		let slot = &mut self.slots[id.index];
		slot.listener = None;
		slot.next = None;
		slot.detached = false;
		slot.generation = slot.generation.wrapping_add(1);
		self.free.push(id.index);
	}
}

trait Detach {
	fn detach(&self, id: ConnectionId) -> bool;
	fn set_once(&self, id: ConnectionId);
	fn is_live(&self, id: ConnectionId) -> bool;
}

impl<A: 'static> Detach for SignalBody<A> {
	fn detach(&self, id: ConnectionId) -> bool {
		self.disconnect(id)
	}

	fn set_once(&self, id: ConnectionId) {
		let mut inner = self.inner.borrow_mut();
		if inner.is_live(id) {
			inner.slots[id.index].stay_connected = false;
		}
	}

	fn is_live(&self, id: ConnectionId) -> bool {
		self.inner.borrow().is_live(id)
	}
}

/// A listener registration returned by [`Signal::connect`].
///
/// Dropping a connection does not disconnect it.
#[derive(Clone)]
pub struct Connection {
	signal: Weak<dyn Detach>,
	id: ConnectionId,
}

impl Connection {
	/// Disconnects the listener right after its next invocation.
	pub fn once(self) -> Self {
		if let Some(signal) = self.signal.upgrade() {
			signal.set_once(self.id);
		}
		self
	}

	/// Returns `false` if the listener was already disconnected
	/// or the signal is gone.
	pub fn disconnect(&self) -> bool {
		match self.signal.upgrade() {
			Some(signal) => signal.detach(self.id),
			None => false,
		}
	}

	pub fn is_connected(&self) -> bool {
		self.signal
			.upgrade()
			.map_or(false, |signal| signal.is_live(self.id))
	}
}

impl crate::Dispose for Connection {
	fn dispose(&mut self) {
		self.disconnect();
	}
}

impl Debug for Connection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Connection")
			.field("index", &self.id.index)
			.field("connected", &self.is_connected())
			.finish()
	}
}

impl<A> Debug for Signal<A> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.body.inner.borrow();
		f.debug_struct("Signal")
			.field("slots", &(inner.slots.len() - inner.free.len()))
			.field("dispatching", &(inner.head == Head::Dispatching))
			.finish()
	}
}
