pub use enclose::*;

/// Builds a [`Call`](crate::Call) action, optionally cloning captures first.
///
/// ```
/// use choreo::{call, Animated};
///
/// let value = Animated::new(0);
/// let _reset = call!((value) => value.set(0));
/// ```
#[macro_export]
macro_rules! call {
    (( $($d_tt:tt)* ) => $($b:tt)*) => {
        $crate::Call::new($crate::macros::enclose!(($( $d_tt )*) move || { $($b)* }))
    };
    ($($b:tt)*) => {
        $crate::Call::new(move || { $($b)* })
    };
}

#[macro_export]
macro_rules! sequence {
    ($($action:expr),* $(,)?) => {
        $crate::Sequence::from_actions([$(Box::new($action) as Box<dyn $crate::Action>),*])
    };
}

#[macro_export]
macro_rules! parallel {
    ($($action:expr),* $(,)?) => {
        $crate::Parallel::from_actions([$(Box::new($action) as Box<dyn $crate::Action>),*])
    };
}

#[macro_export]
macro_rules! first_of {
    ($($action:expr),* $(,)?) => {
        $crate::FirstOf::from_actions([$(Box::new($action) as Box<dyn $crate::Action>),*])
    };
}
