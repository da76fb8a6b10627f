//! Rendering the accumulated document into script text.

use super::Script;
use chrono::Local;

impl Script {
    /// Render the full script text from the accumulated state, store it,
    /// and mark the document constructed.
    ///
    /// May be called again after further appends; each call fully
    /// re-renders. Rendering never fails, and aside from the generation
    /// timestamp in the header comment it is deterministic for identical
    /// accumulated state.
    ///
    /// The layout is: shebang, generation-timestamp comment, `argN=$N`
    /// declarations, an argument-count guard that prints usage and exits 1
    /// on mismatch, then every statement in insertion order.
    pub fn construct(&mut self) -> &str {
        let expected = self.arg_declarations.len();
        let mut out = String::new();

        out.push_str("#!/bin/bash\n");
        out.push_str("# script created on: ");
        out.push_str(&Local::now().to_rfc2822());
        out.push_str("\n\n");

        for declaration in &self.arg_declarations {
            out.push_str(declaration);
            out.push('\n');
        }

        out.push('\n');
        out.push_str(&format!("if [ \"$#\" -ne {expected} ]; then\n"));
        out.push_str(&format!(
            "\techo \"wrong number of arguments. expected {expected}\"\n"
        ));
        out.push_str("\techo \"usage: ");
        out.push_str(" ${0##*/}");
        for name in &self.arg_names {
            out.push_str(&format!(" <{name}>"));
        }
        out.push_str("\"\n");
        for (position, usage) in self.usage_statements.iter().enumerate() {
            out.push_str(&format!(
                "\techo \"{}.<{}>:{}\"\n",
                position + 1,
                self.arg_names[position],
                usage
            ));
        }
        out.push_str("exit 1\n");
        out.push_str("fi\n\n");

        for statement in &self.statements {
            out.push_str(statement);
            out.push('\n');
        }

        self.rendered = out;
        self.constructed = true;
        &self.rendered
    }
}
