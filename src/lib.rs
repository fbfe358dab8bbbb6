pub mod cli;
pub mod config;
pub mod decode;
mod error;
pub mod extract;
pub mod io;
mod matcher;
mod reconstruct;
pub mod rewrite;
pub mod scan;
mod types;

pub use error::{Result, RlsError};
pub use extract::{extract, ExtractStats, Extraction};
pub use io::{read_document, write_document};
pub use matcher::matches;
pub use reconstruct::reconstruct;
pub use rewrite::{output_name, remove_rules, splice_include};
pub use types::{Action, ActionKind, KeptRule, RequestedAction, Rule, Span};
