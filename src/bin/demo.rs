//! Builds a small tree, draws it, deletes one key and draws it again.
//!
//! The key to delete is the first argument, or the first line of stdin when no argument is
//! given.

use std::io::{self, BufRead, Write};
use std::num::ParseIntError;

use bstree::boxed::Tree;
use thiserror::Error;

const KEYS: [i32; 7] = [50, 30, 20, 40, 70, 60, 80];

#[derive(Debug, Error)]
enum DemoError {
    #[error("could not read the key to delete")]
    Io(#[from] io::Error),
    #[error("no key to delete was given")]
    MissingKey,
    #[error("`{input}` is not an integer key")]
    InvalidKey {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

/// Reads the key to delete, prompting on `out` when it has to come from stdin.
fn read_key(out: &mut impl Write) -> Result<i32, DemoError> {
    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            write!(out, "Key to delete: ")?;
            out.flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let input = input.trim();
    if input.is_empty() {
        return Err(DemoError::MissingKey);
    }
    input.parse().map_err(|source| DemoError::InvalidKey {
        input: input.to_owned(),
        source,
    })
}

fn describe(key: Option<&i32>) -> String {
    key.map_or_else(|| "none".to_owned(), i32::to_string)
}

fn print_stats(out: &mut impl Write, tree: &Tree<i32>) -> io::Result<()> {
    writeln!(out, "Pre-order:  {:?}", tree.pre_order())?;
    writeln!(out, "In-order:   {:?}", tree.in_order())?;
    writeln!(out, "Post-order: {:?}", tree.post_order())?;
    writeln!(out, "Minimum: {}", describe(tree.min()))?;
    writeln!(out, "Maximum: {}", describe(tree.max()))?;
    writeln!(out, "Height:  {}", tree.height())?;
    writeln!(out, "Nodes:   {}", tree.len())?;
    writeln!(out, "Leaves:  {}", tree.count_leaves())
}

fn main() -> Result<(), DemoError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut tree: Tree<i32> = KEYS.iter().copied().collect();
    write!(out, "{}", tree)?;
    print_stats(&mut out, &tree)?;

    let key = read_key(&mut out)?;
    if tree.delete(&key) {
        writeln!(out, "Deleted {}", key)?;
    } else {
        writeln!(out, "{} is not in the tree", key)?;
    }

    write!(out, "{}", tree)?;
    print_stats(&mut out, &tree)?;
    Ok(())
}
