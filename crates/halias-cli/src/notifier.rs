//! Console notices.

use halias_core::{Notice, Notifier};

/// Prints notices to stdout, one per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        println!("{notice}");
    }
}
