//! Migration engine — rewrite Draw command registrations to macro form.
//!
//! Leaf-first: the tokenizer splits argument lists, the locator finds
//! balanced call expressions, the converter classifies them into canonical
//! macros, the signature rewriter handles declaration headers, and the
//! runner applies everything across a file tree.

mod convert;
mod locator;
mod rewrite;
mod runner;
mod signature;
mod tokenizer;

pub use convert::{convert_call, DEFAULT_GROUP, FILE_MARKER};
pub use locator::{locate_calls, CallSpan};
pub use rewrite::{rewrite_buffer, BufferRewrite, NEW_INCLUDE, OLD_INCLUDE};
pub use runner::{migrate_path, FileOutcome, MigrateOptions, MigrationResult};
pub use signature::rewrite_signatures;
pub use tokenizer::split_arguments;
