// Title-to-id resolution over a freshly fetched task list collection.
// The cache only accelerates lookups; anything that mutates remote state
// resolves against live data.

use std::io::{BufRead, Write};

use crate::api::TaskList;
use crate::error::Result;
use crate::prompt::prompt_index_choice;

/// Outcome of resolving a title to a single task list id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Selected(String),
    NotFound,
    Cancelled,
}

/// Ids of all task lists whose title matches `title` exactly
/// (case-sensitive), in input order. Duplicates in the input are preserved.
pub fn resolve_ids<'a>(title: &str, tasklists: &'a [TaskList]) -> Vec<&'a str> {
    matching(title, tasklists).map(|t| t.id.as_str()).collect()
}

fn matching<'t, 'a>(
    title: &'t str,
    tasklists: &'a [TaskList],
) -> impl Iterator<Item = &'a TaskList> {
    tasklists.iter().filter(move |t| t.title == title)
}

/// Resolve `title` against `tasklists`, prompting on ambiguity.
///
/// Zero matches yields `NotFound` (the caller decides how to report it).
/// A single match is selected without prompting. Multiple matches are
/// enumerated with their ids and the user picks one or cancels.
pub fn choose_tasklist(
    title: &str,
    tasklists: &[TaskList],
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> Result<Resolution> {
    let candidates: Vec<&TaskList> = matching(title, tasklists).collect();

    match candidates.as_slice() {
        [] => Ok(Resolution::NotFound),
        [only] => Ok(Resolution::Selected(only.id.clone())),
        _ => {
            writeln!(writer, "Multiple task lists share the title '{}':", title)?;
            for (idx, candidate) in candidates.iter().enumerate() {
                writeln!(writer, "{}. {} (id: {})", idx + 1, candidate.title, candidate.id)?;
            }

            let choice =
                prompt_index_choice(reader, writer, candidates.len(), "Select a task list", None)?;
            Ok(match choice {
                Some(idx) => Resolution::Selected(candidates[idx].id.clone()),
                None => Resolution::Cancelled,
            })
        }
    }
}
