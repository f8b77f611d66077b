//! Console command dispatch for the Linkshelf binary.
//!
//! Parses one input line into a `Command`. Kept separate from `main` so the
//! parsing can be unit-tested independently.

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the rendered view.
    List,
    /// Fill the form interactively and submit it.
    Add,
    /// Delete the bookmark with the given id (after confirmation).
    Delete(i64),
    /// Print usage help.
    Help,
    /// Exit the client.
    Quit,
}

/// Parse an input line into a `Command`.
///
/// Returns `Err(String)` with a user-facing message for unknown verbs or a
/// malformed delete id.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let verb = parts.next().ok_or("empty command")?;

    match verb {
        "list" | "ls" => Ok(Command::List),
        "add" => Ok(Command::Add),
        "delete" | "del" | "rm" => {
            let arg = parts.next().ok_or("missing id: usage is 'delete <id>'")?;
            let id: i64 = arg
                .parse()
                .map_err(|_| format!("invalid id '{}': must be a number", arg))?;
            Ok(Command::Delete(id))
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}', try 'help'", other)),
    }
}

/// Usage text for the `help` command.
pub fn usage() -> &'static str {
    "Commands:\n  \
     list           show the rendered bookmarks\n  \
     add            add a bookmark (prompts for title, url, tags)\n  \
     delete <id>    delete a bookmark after confirmation\n  \
     help           show this message\n  \
     quit           exit"
}
