use std::cell::RefCell;
use std::rc::Rc;

use choreo::{Connection, Dispose, Signal};
use mockall::predicate::eq;


use mock::Spy;

fn recorder<A: Copy + 'static>(log: &Rc<RefCell<Vec<(u32, A)>>>, tag: u32) -> impl FnMut(&A) + 'static {
	let log = log.clone();
	move |args: &A| log.borrow_mut().push((tag, *args))
}

#[test]
fn listeners_fire_in_connection_order() {
	let signal = Signal::<u32>::new();
	let log = Rc::new(RefCell::new(vec![]));

	signal.connect(recorder(&log, 1));
	signal.connect(recorder(&log, 2));
	signal.connect_prioritized(recorder(&log, 3));

	signal.emit(7);

	assert_eq!(*log.borrow(), vec![(3, 7), (1, 7), (2, 7)]);
}

#[test]
fn connect_during_emit_waits_for_the_next_emission() {
	let signal = Signal::<()>::new();
	let mock = mock::SharedMock::new();

	signal.connect({
		let signal = signal.clone();
		let mock = mock.clone();
		move |_| {
			mock.get().fired(1);
			signal.connect({
				let mock = mock.clone();
				move |_| mock.get().fired(2)
			});
		}
	});

	mock.get().expect_fired().with(eq(1)).times(1).return_const(());
	mock.get().expect_fired().with(eq(2)).times(0).return_const(());
	signal.emit(());
	mock.get().checkpoint();

	mock.get().expect_fired().with(eq(1)).times(1).return_const(());
	mock.get().expect_fired().with(eq(2)).times(1).return_const(());
	signal.emit(());
	mock.get().checkpoint();
}

#[test]
fn self_disconnect_finishes_the_current_emission() {
	let signal = Signal::<()>::new();
	let mock = mock::SharedMock::new();
	let own: Rc<RefCell<Option<Connection>>> = Rc::new(RefCell::new(None));

	let connection = signal.connect({
		let own = own.clone();
		let mock = mock.clone();
		move |_| {
			mock.get().fired(1);
			if let Some(connection) = own.borrow().as_ref() {
				assert!(connection.disconnect());
				assert!(!connection.disconnect());
			}
		}
	});
	*own.borrow_mut() = Some(connection.clone());

	signal.connect({
		let mock = mock.clone();
		move |_| mock.get().fired(2)
	});

	mock.get().expect_fired().with(eq(1)).times(1).return_const(());
	mock.get().expect_fired().with(eq(2)).times(1).return_const(());
	signal.emit(());
	mock.get().checkpoint();

	assert!(!connection.is_connected());

	mock.get().expect_fired().with(eq(1)).times(0).return_const(());
	mock.get().expect_fired().with(eq(2)).times(1).return_const(());
	signal.emit(());
	mock.get().checkpoint();
}

#[test]
fn listener_removed_mid_emission_still_fires_once() {
	let signal = Signal::<()>::new();
	let log = Rc::new(RefCell::new(vec![]));
	let second: Rc<RefCell<Option<Connection>>> = Rc::new(RefCell::new(None));

	signal.connect({
		let log = log.clone();
		let second = second.clone();
		move |_| {
			log.borrow_mut().push(1);
			if let Some(connection) = second.borrow_mut().take() {
				connection.disconnect();
			}
		}
	});
	*second.borrow_mut() = Some(signal.connect({
		let log = log.clone();
		move |_| log.borrow_mut().push(2)
	}));

	signal.emit(());
	signal.emit(());

	assert_eq!(*log.borrow(), vec![1, 2, 1]);
}

#[test]
fn once_disconnects_after_firing() {
	let signal = Signal::<u32>::new();
	let mock = mock::SharedMock::new();

	let connection = signal
		.connect({
			let mock = mock.clone();
			move |value| mock.get().fired(*value)
		})
		.once();

	mock.get().expect_fired().with(eq(1)).times(1).return_const(());
	signal.emit(1);
	signal.emit(2);
	mock.get().checkpoint();

	assert!(!connection.is_connected());
	assert!(!signal.has_listeners());
}

#[test]
fn nested_emits_run_after_the_outer_one() {
	let signal = Signal::<u32>::new();
	let log = Rc::new(RefCell::new(vec![]));

	signal.connect({
		let signal = signal.clone();
		let log = log.clone();
		move |value| {
			log.borrow_mut().push((1, *value));
			if *value == 0 {
				signal.emit(1);
				signal.emit(2);
			}
		}
	});
	signal.connect(recorder(&log, 2));

	signal.emit(0);

	assert_eq!(
		*log.borrow(),
		vec![(1, 0), (2, 0), (1, 1), (2, 1), (1, 2), (2, 2)]
	);
}

#[test]
fn disconnect_reports_stale_connections() {
	let signal = Signal::<()>::new();
	let other = Signal::<()>::new();

	let first = signal.connect(|_| {});
	assert!(signal.has_listeners());
	assert!(!other.disconnect(&first));
	assert!(signal.disconnect(&first));
	assert!(!signal.disconnect(&first));
	assert!(!signal.has_listeners());

	// The freed slot is reused, the old connection must not reach the new one.
	let second = signal.connect(|_| {});
	assert!(!first.disconnect());
	assert!(second.is_connected());

	let mut second = second;
	second.dispose();
	assert!(!second.is_connected());
}

#[test]
fn connections_outlive_their_signal() {
	let signal = Signal::<()>::new();
	let connection = signal.connect(|_| {});

	drop(signal);

	assert!(!connection.is_connected());
	assert!(!connection.disconnect());
}
