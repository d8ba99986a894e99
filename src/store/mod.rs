//! Store Module
//!
//! The persistence boundary the registry serializes its table into.
//!
//! ## Responsibilities
//! - Hold exactly one string value (the JSON text of the pattern table)
//! - Return the last written value, or `""` if nothing was written
//! - Overwrite wholesale on every write
//!
//! ## Failure Model
//! The trait is infallible. Backends that can fail (the file backend)
//! log the failure and degrade to "nothing stored" on read and to a
//! dropped write on write.
//!
//! ## Backends
//! ```text
//! ┌───────────────┐     ┌──────────────────────────────┐
//! │  MemoryStore  │     │          FileStore           │
//! │ RwLock<String>│     │ {path}  (tmp file + rename)  │
//! └───────────────┘     └──────────────────────────────┘
//! ```

use std::rc::Rc;
use std::sync::Arc;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Opaque single-value string store
pub trait Store {
    /// Last written value, or `""` when nothing has been written
    fn get(&self) -> String;

    /// Replace the stored value
    fn set(&self, value: String);

    /// Restore the initial empty state
    fn reset(&self);
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self) -> String {
        (**self).get()
    }

    fn set(&self, value: String) {
        (**self).set(value)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self) -> String {
        (**self).get()
    }

    fn set(&self, value: String) {
        (**self).set(value)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

impl<S: Store + ?Sized> Store for Arc<S> {
    fn get(&self) -> String {
        (**self).get()
    }

    fn set(&self, value: String) {
        (**self).set(value)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

impl<S: Store + ?Sized> Store for Rc<S> {
    fn get(&self) -> String {
        (**self).get()
    }

    fn set(&self, value: String) {
        (**self).set(value)
    }

    fn reset(&self) {
        (**self).reset()
    }
}
