//! Provscript: builder for provenance-instrumented POSIX shell scripts.
//!
//! A host workflow tool uses this library to assemble reproducible,
//! self-documenting run scripts for a given project version. A [`Script`]
//! accumulates shell statements in insertion order; every command added
//! through the structured paths is wrapped in provenance markers that record
//! the command text, its start time, its exit status, and its completion
//! time in a dedicated log file (`~/prov.txt`). Command stdout and stderr
//! are captured in a combined output file (`~/output.txt`).
//!
//! Command arguments can be declared as script-level positional inputs. The
//! rendered script then carries `argN=$N` declarations, an argument-count
//! guard, and auto-generated usage text describing each input.
//!
//! # Usage
//!
//! ```
//! use provscript::Script;
//!
//! let mut script = Script::new();
//! script.add_invocation("echo", &["hello"])?;
//! let text = script.construct();
//! assert!(text.contains("echo \"hello\" > ~/output.txt 2> ~/output.txt"));
//! # Ok::<(), provscript::ScriptError>(())
//! ```
//!
//! Rendering and persistence are separate steps: [`Script::construct`]
//! renders the full script text from the accumulated state (and may be
//! called again after further appends), while [`Script::persist`] writes the
//! rendered text to a `.sh` file and fails if the script has not been
//! constructed.
//!
//! This crate only generates script text; it never executes the result.

pub mod error;
pub mod escape;
pub mod script;

pub use error::{Result, ScriptError};
pub use escape::printf_escape;
pub use script::{Script, filename_for_version};
