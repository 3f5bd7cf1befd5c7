use std::fmt::Arguments;
use std::io::Write;

use crate::unstable_sealed::UnstableSealed;

///
/// Trait for objects that observe a running computation, currently only by
/// receiving its progress log.
///
/// Algorithms that may take a long time (like [`crate::algorithms::lll::lll_with_controller()`]
/// and [`crate::algorithms::lll::delta::estimate_delta_with_controller()`]) take a controller,
/// and document the symbols they log. Use [`LogProgress`] to print them, or [`DontObserve`]
/// to ignore them.
///
pub trait ComputationController: Clone + UnstableSealed {

    fn log(&self, _args: Arguments) {}

    ///
    /// Runs the given step of the computation, logging its description before
    /// and a marker after it.
    ///
    fn run_computation<F, T>(&self, description: Arguments, computation: F) -> T
        where F: FnOnce(&Self) -> T
    {
        self.log(format_args!("{}", description));
        let result = computation(self);
        self.log(format_args!("done\n"));
        return result;
    }
}

#[macro_export]
macro_rules! log_progress {
    ($controller:expr, $($args:tt)*) => {
        ($controller).log(std::format_args!($($args)*))
    };
}

///
/// Prints all progress messages to stdout.
///
/// We use `print!` instead of writing to `Stdout` directly, since
/// this works with output capture in tests.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct LogProgress;

impl UnstableSealed for LogProgress {}

impl ComputationController for LogProgress {

    fn log(&self, args: Arguments) {
        print!("{}", args);
        // a failed flush only delays the output
        let _ = std::io::stdout().flush();
    }
}

///
/// Discards all progress messages.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct DontObserve;

impl UnstableSealed for DontObserve {}

impl ComputationController for DontObserve {}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RecordProgress {
    log: std::rc::Rc<std::cell::RefCell<String>>
}

#[cfg(test)]
impl RecordProgress {

    pub(crate) fn recorded(&self) -> String {
        self.log.borrow().clone()
    }
}

#[cfg(test)]
impl UnstableSealed for RecordProgress {}

#[cfg(test)]
impl ComputationController for RecordProgress {

    fn log(&self, args: Arguments) {
        std::fmt::Write::write_fmt(&mut *self.log.borrow_mut(), args).unwrap();
    }
}

#[test]
fn test_run_computation() {
    let controller = RecordProgress::default();
    let result = controller.run_computation(format_args!("step(n={}) ", 3), |controller| {
        log_progress!(controller, ".");
        log_progress!(controller, ".");
        5
    });
    assert_eq!(5, result);
    assert_eq!("step(n=3) ..done\n", controller.recorded());
}

#[test]
fn test_log_progress() {
    log_progress!(LogProgress, "(test)");
    log_progress!(DontObserve, "(test)");
}
