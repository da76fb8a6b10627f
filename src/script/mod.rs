//! Script document model and append operations.
//!
//! A [`Script`] accumulates shell statements plus the bookkeeping for
//! run-time positional arguments (names, `argN=$N` declarations, usage
//! text). Statements are append-only and render in insertion order; nothing
//! is ever reordered or edited in place.
//!
//! Every command added through [`Script::add_program_invocation`] or
//! [`Script::add_literal_statement`] is bracketed by provenance markers: a
//! start marker recording the command text and start time, and a completion
//! marker recording `$?` and the completion time. Both go to `~/prov.txt`.
//! The first statement in the document truncates its redirect target; every
//! later statement appends.

mod persist;
mod render;


pub use persist::filename_for_version;

use crate::error::{Result, ScriptError};
use crate::escape::printf_escape;

/// Redirect target for script provenance records, relative to `~`.
pub const PROVENANCE_FILENAME: &str = "prov.txt";
/// Redirect target for the combined stdout/stderr of executed commands,
/// relative to `~`.
pub const COMMAND_OUTPUT_FILENAME: &str = "output.txt";
/// Conventional file for a source-control commit identifier. Reserved for
/// callers; never written by this crate.
pub const SHA1_KEY_FILENAME: &str = "SHA1Key.txt";

/// Prefix label for the command text in a start marker.
pub const COMMAND_LABEL: &str = "command";
/// Prefix label for the epoch seconds at which a command started.
pub const START_TIME_LABEL: &str = "time started";
/// Prefix label for the epoch seconds at which a command completed.
pub const COMPLETED_TIME_LABEL: &str = "time completed";
/// Prefix label for the exit status of a completed command.
pub const EXIT_STATUS_LABEL: &str = "exit status";
/// Prefix label callers use when recording the script version.
pub const VERSION_LABEL: &str = "version";

/// A shell script under construction.
///
/// Created empty, grown only by appends, rendered by [`Script::construct`],
/// and written to disk by [`Script::persist`]. One caller builds one
/// document in one linear sequence of calls; there is no sharing.
#[derive(Debug, Default)]
pub struct Script {
    /// Shell statements in execution order.
    statements: Vec<String>,
    /// Display names of declared variable arguments.
    arg_names: Vec<String>,
    /// `argN=$N` assignment lines, index-aligned with `arg_names`.
    arg_declarations: Vec<String>,
    /// Usage descriptions, index-aligned with `arg_names`.
    usage_statements: Vec<String>,
    /// Rendered script text; empty until constructed.
    rendered: String,
    /// Set once `construct` has produced `rendered`.
    constructed: bool,
    /// Free-form version tag for caller-facing file naming. Not used by
    /// rendering.
    version: Option<String>,
}

impl Script {
    /// Create an empty script document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty script document tagged with a version. Versions are
    /// generally incremental, starting at "1" for the first script persisted
    /// for a project.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// The version tag, if one was given at creation.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Accumulated statements in execution order.
    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Display names of declared variable arguments, in declaration order.
    pub fn arg_names(&self) -> &[String] {
        &self.arg_names
    }

    /// `argN=$N` declaration lines, in declaration order.
    pub fn arg_declarations(&self) -> &[String] {
        &self.arg_declarations
    }

    /// Usage text per variable argument, in declaration order.
    pub fn usage_statements(&self) -> &[String] {
        &self.usage_statements
    }

    /// Whether `construct` has run.
    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// The rendered script text, once constructed.
    pub fn rendered(&self) -> Option<&str> {
        self.constructed.then_some(self.rendered.as_str())
    }

    /// Add a program invocation, instrumented with provenance markers.
    ///
    /// `args`, `variable`, and `usage` must have equal length; a mismatch
    /// fails with [`ScriptError::ArgumentListMismatch`] and commits nothing.
    ///
    /// Arguments flagged in `variable` become run-time positional inputs:
    /// each records its display name and usage text, receives the next
    /// 1-based `argN=$N` declaration, and appears in the command line as
    /// `"$argN"`. Unflagged arguments are emitted as quoted literals, with
    /// no escaping applied.
    ///
    /// `use_relative_path` invokes the executable as `./name` instead of
    /// leaving resolution to the shell PATH.
    ///
    /// Appends exactly three statements: start marker, command line (stdout
    /// and stderr captured in `~/output.txt`), completion marker.
    pub fn add_program_invocation(
        &mut self,
        executable: &str,
        args: &[&str],
        variable: &[bool],
        usage: &[&str],
        use_relative_path: bool,
    ) -> Result<()> {
        if args.len() != variable.len() || args.len() != usage.len() {
            return Err(ScriptError::ArgumentListMismatch {
                args: args.len(),
                variable: variable.len(),
                usage: usage.len(),
            });
        }

        let first = self.statements.is_empty();
        let prefix = if use_relative_path { "./" } else { "" };
        let mut parts = vec![format!("{prefix}{executable}")];
        for (arg, flagged) in args.iter().zip(variable) {
            if *flagged {
                let index = self.arg_declarations.len() + 1;
                self.arg_names.push((*arg).to_string());
                self.arg_declarations.push(format!("arg{index}=${index}"));
                parts.push(format!("\"$arg{index}\""));
            } else {
                parts.push(format!("\"{arg}\""));
            }
        }
        for (usage_text, flagged) in usage.iter().zip(variable) {
            if *flagged {
                self.usage_statements.push((*usage_text).to_string());
            }
        }
        let command = parts.join(" ");

        self.push_start_marker(&command, !first);
        let tok = if first { ">" } else { ">>" };
        self.statements.push(format!(
            "{command} {tok} ~/{out} 2{tok} ~/{out}",
            out = COMMAND_OUTPUT_FILENAME
        ));
        self.push_completion_marker();
        Ok(())
    }

    /// Shortcut for an invocation with no variable arguments, resolved via
    /// the shell PATH (builtins, `cd`, `mkdir`, and the like).
    pub fn add_invocation(&mut self, executable: &str, args: &[&str]) -> Result<()> {
        let variable = vec![false; args.len()];
        let usage = vec![""; args.len()];
        self.add_program_invocation(executable, args, &variable, &usage, false)
    }

    /// Shortcut for an invocation with no variable arguments, run as a
    /// `./name` local executable.
    pub fn add_invocation_from_dir(&mut self, executable: &str, args: &[&str]) -> Result<()> {
        let variable = vec![false; args.len()];
        let usage = vec![""; args.len()];
        self.add_program_invocation(executable, args, &variable, &usage, true)
    }

    /// Split a raw command line into shell words and add it as a
    /// PATH-resolved invocation with all-literal arguments.
    ///
    /// Fails with [`ScriptError::CommandParse`] on unbalanced quoting and
    /// [`ScriptError::EmptyCommandLine`] when nothing remains after
    /// splitting.
    pub fn add_command_line(&mut self, line: &str) -> Result<()> {
        let words = shell_words::split(line)?;
        let (executable, rest) = words.split_first().ok_or(ScriptError::EmptyCommandLine)?;
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.add_invocation(executable, &args)
    }

    /// Add a statement verbatim, instrumented with provenance markers.
    ///
    /// No escaping or quoting is applied to `statement`; callers may use raw
    /// shell syntax (pipes, control flow) here. Stdout goes to `output_file`
    /// (default `~/output.txt`) per the `append` flag; stderr always
    /// appends. Any file name may be given, so there is no safeguard against
    /// clobbering output a previous statement redirected to the same file.
    pub fn add_literal_statement(
        &mut self,
        statement: &str,
        output_file: Option<&str>,
        append: bool,
    ) {
        let default = format!("~/{COMMAND_OUTPUT_FILENAME}");
        let file = output_file.unwrap_or(&default);
        let first = self.statements.is_empty();
        self.push_start_marker(statement, !first);
        let tok = if append { ">>" } else { ">" };
        self.statements
            .push(format!("{statement} {tok} {file} 2>> {file}"));
        self.push_completion_marker();
    }

    /// Add a bare `printf "<prefix>: <value>\n"` annotation redirected to
    /// `file` (default `prov.txt`) under `~`. The value is printf-escaped.
    /// Not a timed command, so no start/completion markers.
    pub fn add_provenance_note(
        &mut self,
        prefix: &str,
        value: &str,
        file: Option<&str>,
        append: bool,
    ) {
        let escaped = printf_escape(value);
        let file = file.unwrap_or(PROVENANCE_FILENAME);
        let tok = if append { ">>" } else { ">" };
        self.statements.push(format!(
            "printf \"{prefix}: {escaped}\\n\" {tok} ~/{file} 2{tok} ~/{file}"
        ));
    }

    /// Record that a command is about to run: its (escaped) text and the
    /// epoch seconds at which the script reached it.
    fn push_start_marker(&mut self, command_text: &str, append: bool) {
        let escaped = printf_escape(command_text);
        let tok = if append { ">>" } else { ">" };
        self.statements.push(format!(
            "printf \"{COMMAND_LABEL}: {escaped}\\n{START_TIME_LABEL}: `date +%s`\\n\" \
             {tok} ~/{prov} 2{tok} ~/{prov}",
            prov = PROVENANCE_FILENAME
        ));
    }

    /// Record the exit status and completion time of the command just
    /// emitted. Always appends; a start marker precedes it, so the
    /// provenance file can never be fresh here.
    fn push_completion_marker(&mut self) {
        self.statements.push(format!(
            "printf \"{EXIT_STATUS_LABEL}: $?\\n{COMPLETED_TIME_LABEL}: `date +%s`\\n\" \
             >> ~/{prov} 2>> ~/{prov}",
            prov = PROVENANCE_FILENAME
        ));
    }
}
