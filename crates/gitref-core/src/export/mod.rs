//! Exporting the HEAD reference to a text file
//!
//! An export runs three steps, stopping at the first failure:
//!
//! 1. read HEAD of the first repository ([`resolve_commit_reference`])
//! 2. pick the destination folder ([`resolve_destination`])
//! 3. write `<reference>.txt` without replacing anything ([`create_reference_file`])
//!
//! [`ReferenceExporter`] strings the steps together and reports the outcome
//! through a [`Notifier`](crate::capability::Notifier).
//!
//! # Example
//!
//! ```ignore
//! use gitref_core::export::ReferenceExporter;
//!
//! let exporter = ReferenceExporter::new(&git, &config, &OsFilesystem, &notifier);
//! let outcome = exporter.execute();
//! ```

mod destination;
mod exporter;
mod reference;
mod writer;

#[cfg(test)]
pub(crate) mod testing;

pub use destination::{default_destination, resolve_destination, DESKTOP_DIR};
pub use exporter::{failure_message, success_message, Outcome, ReferenceExporter};
pub use reference::{resolve_commit_reference, resolve_reference, ResolvedReference};
pub use writer::{create_reference_file, reference_content, CREDITS_LINE};
