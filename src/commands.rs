// Command handlers.
// Each handler wires the API client, the title/id cache, and user config
// together for one subcommand.

use std::io;

use chrono::{DateTime, Utc};
use log::debug;

use crate::api::{NewTask, TaskStatus, TasksClient};
use crate::cache::TasklistCache;
use crate::cli::Selector;
use crate::config::Config;
use crate::error::{GtasksError, Result};
use crate::prompt::prompt_index_choice;
use crate::resolve::{Resolution, choose_tasklist};

/// How a command finished, as seen by the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdOutcome {
    Completed,
    Cancelled,
}

/// `gtasks lists`: print the user's task lists, refreshing the cache.
pub async fn lists(
    client: &TasksClient,
    cache: &mut TasklistCache,
    config: &Config,
    limit: Option<usize>,
    show_ids: bool,
) -> Result<CmdOutcome> {
    let tasklists = client.list_tasklists(limit).await?;
    cache.update_from_items(&tasklists)?;

    if tasklists.is_empty() {
        println!("No task lists found for this account.");
        return Ok(CmdOutcome::Completed);
    }

    for tasklist in &tasklists {
        let default_marker = if config.default_tasklist_title() == Some(tasklist.title.as_str()) {
            " (default)"
        } else {
            ""
        };
        if show_ids {
            println!("- [{}] {}{}", tasklist.id, tasklist.title, default_marker);
        } else {
            println!("- {}{}", tasklist.title, default_marker);
        }
    }
    Ok(CmdOutcome::Completed)
}

/// `gtasks tasks`: print tasks from the selected task list.
pub async fn tasks(
    client: &TasksClient,
    cache: &mut TasklistCache,
    config: &Config,
    selector: &Selector,
    limit: Option<usize>,
    show_ids: bool,
) -> Result<CmdOutcome> {
    // Read-only listing may trust the cache for resolution.
    let Some(tasklist_id) = target_tasklist_id(client, cache, config, selector, false).await?
    else {
        return Ok(CmdOutcome::Cancelled);
    };

    let tasks = client.list_tasks(&tasklist_id, limit).await?;
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(CmdOutcome::Completed);
    }

    for task in &tasks {
        if show_ids {
            print!("- [{}] {}", task.id, task.title);
        } else {
            print!("- {}", task.title);
        }
        if let Some(due) = &task.due {
            print!(" (Due: {})", due.to_rfc3339());
        }
        if task.status == TaskStatus::Completed {
            print!(" (completed)");
        }
        println!();
        if let Some(notes) = &task.notes {
            println!("    Notes: {}", notes);
        }
    }
    Ok(CmdOutcome::Completed)
}

/// `gtasks add`: create a task in the selected task list.
pub async fn add(
    client: &TasksClient,
    cache: &mut TasklistCache,
    config: &Config,
    selector: &Selector,
    title: String,
    notes: Option<String>,
    due: Option<String>,
) -> Result<CmdOutcome> {
    let due = due.map(|s| parse_due(&s)).transpose()?;

    // Mutations resolve against live data, never the cache alone.
    let Some(tasklist_id) = target_tasklist_id(client, cache, config, selector, true).await?
    else {
        return Ok(CmdOutcome::Cancelled);
    };

    let body = NewTask { title, notes, due };
    let task = client.insert_task(&tasklist_id, &body).await?;
    println!("Created task: {}", task.title);
    Ok(CmdOutcome::Completed)
}

/// `gtasks delete`: delete a task from the selected task list.
pub async fn delete(
    client: &TasksClient,
    cache: &mut TasklistCache,
    config: &Config,
    selector: &Selector,
    task_id: String,
) -> Result<CmdOutcome> {
    let Some(tasklist_id) = target_tasklist_id(client, cache, config, selector, true).await?
    else {
        return Ok(CmdOutcome::Cancelled);
    };

    client.delete_task(&tasklist_id, &task_id).await?;
    println!("Deleted task {}.", task_id);
    Ok(CmdOutcome::Completed)
}

/// `gtasks set-default`: pick a task list interactively and persist its title.
pub async fn set_default(
    client: &TasksClient,
    cache: &mut TasklistCache,
    config: &mut Config,
) -> Result<CmdOutcome> {
    let tasklists = client.list_tasklists(None).await?;
    cache.update_from_items(&tasklists)?;

    if tasklists.is_empty() {
        println!("No task lists found for this account.");
        return Ok(CmdOutcome::Completed);
    }

    println!("Available task lists:");
    for (idx, tasklist) in tasklists.iter().enumerate() {
        println!("{}. {}", idx + 1, tasklist.title);
    }

    let mut reader = io::stdin().lock();
    let mut writer = io::stdout();
    let choice = prompt_index_choice(
        &mut reader,
        &mut writer,
        tasklists.len(),
        "Select a default task list",
        config.default_tasklist_title(),
    )?;

    match choice {
        Some(idx) => {
            let title = &tasklists[idx].title;
            config.set_default_tasklist_title(title)?;
            println!("Default task list set to: {}", title);
            Ok(CmdOutcome::Completed)
        }
        None => Ok(CmdOutcome::Cancelled),
    }
}

/// A selector decision that needed no network call.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    /// A usable task list id (explicit, or resolved through the cache).
    Id(String),
    /// A title that still has to be resolved against live data.
    ResolveTitle(String),
}

/// Locally decidable part of selector resolution.
///
/// Explicit ids pass through untouched. Explicit titles win over the
/// configured default; with neither, resolution fails. When `live` is false
/// a cached title short-circuits to its id.
fn local_target(
    selector: &Selector,
    config: &Config,
    cache: &TasklistCache,
    live: bool,
) -> Result<Target> {
    if let Some(id) = &selector.tasklist_id {
        return Ok(Target::Id(id.clone()));
    }

    let title = match (&selector.tasklist_title, config.default_tasklist_title()) {
        (Some(title), _) => title.clone(),
        (None, Some(default)) => default.to_string(),
        (None, None) => return Err(GtasksError::NoDefaultTasklist),
    };

    if !live && let Some(id) = cache.get_id(&title) {
        debug!("cache: resolved '{}' -> {}", title, id);
        return Ok(Target::Id(id.to_string()));
    }

    Ok(Target::ResolveTitle(title))
}

/// Resolve the selector to a task list id.
///
/// Explicit ids pass through untouched. Titles (explicit or the configured
/// default) are resolved against a live fetch of the task lists, or via the
/// cache fast path when `live` is false and the title is cached. Returns
/// `Ok(None)` when the user cancelled disambiguation.
async fn target_tasklist_id(
    client: &TasksClient,
    cache: &mut TasklistCache,
    config: &Config,
    selector: &Selector,
    live: bool,
) -> Result<Option<String>> {
    let title = match local_target(selector, config, cache, live)? {
        Target::Id(id) => return Ok(Some(id)),
        Target::ResolveTitle(title) => title,
    };

    let tasklists = client.list_tasklists(None).await?;
    cache.update_from_items(&tasklists)?;

    let mut reader = io::stdin().lock();
    let mut writer = io::stdout();
    match choose_tasklist(&title, &tasklists, &mut reader, &mut writer)? {
        Resolution::Selected(id) => Ok(Some(id)),
        Resolution::NotFound => Err(GtasksError::TasklistNotFound(title)),
        Resolution::Cancelled => Ok(None),
    }
}

fn parse_due(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| GtasksError::InvalidDueDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::api::TaskList;

    use super::*;

    fn selector(id: Option<&str>, title: Option<&str>) -> Selector {
        Selector {
            tasklist_id: id.map(str::to_string),
            tasklist_title: title.map(str::to_string),
        }
    }

    fn empty_cache(dir: &TempDir) -> TasklistCache {
        TasklistCache::load(dir.path().join("cache.json")).unwrap()
    }

    fn config(dir: &TempDir, default_title: Option<&str>) -> Config {
        let mut config = Config::load(dir.path().join("config.toml")).unwrap();
        if let Some(title) = default_title {
            config.set_default_tasklist_title(title).unwrap();
        }
        config
    }

    #[test]
    fn test_explicit_id_passes_through() {
        let dir = TempDir::new().unwrap();
        let cache = empty_cache(&dir);
        let config = config(&dir, Some("Default"));

        let target =
            local_target(&selector(Some("id1"), None), &config, &cache, true).unwrap();
        assert_eq!(target, Target::Id("id1".to_string()));
    }

    #[test]
    fn test_explicit_title_wins_over_default() {
        let dir = TempDir::new().unwrap();
        let cache = empty_cache(&dir);
        let config = config(&dir, Some("Default"));

        let target =
            local_target(&selector(None, Some("Explicit")), &config, &cache, true).unwrap();
        assert_eq!(target, Target::ResolveTitle("Explicit".to_string()));
    }

    #[test]
    fn test_falls_back_to_default_title() {
        let dir = TempDir::new().unwrap();
        let cache = empty_cache(&dir);
        let config = config(&dir, Some("Default"));

        let target = local_target(&selector(None, None), &config, &cache, true).unwrap();
        assert_eq!(target, Target::ResolveTitle("Default".to_string()));
    }

    #[test]
    fn test_no_selector_and_no_default_is_an_error() {
        let dir = TempDir::new().unwrap();
        let cache = empty_cache(&dir);
        let config = config(&dir, None);

        let err = local_target(&selector(None, None), &config, &cache, true).unwrap_err();
        assert!(matches!(err, GtasksError::NoDefaultTasklist));
    }

    #[test]
    fn test_cached_title_short_circuits_read_only_resolution() {
        let dir = TempDir::new().unwrap();
        let mut cache = empty_cache(&dir);
        cache
            .update_from_items(&[TaskList {
                id: "l1".to_string(),
                title: "Work".to_string(),
            }])
            .unwrap();
        let config = config(&dir, None);

        let target =
            local_target(&selector(None, Some("Work")), &config, &cache, false).unwrap();
        assert_eq!(target, Target::Id("l1".to_string()));
    }

    #[test]
    fn test_mutations_never_trust_the_cache() {
        let dir = TempDir::new().unwrap();
        let mut cache = empty_cache(&dir);
        cache
            .update_from_items(&[TaskList {
                id: "l1".to_string(),
                title: "Work".to_string(),
            }])
            .unwrap();
        let config = config(&dir, None);

        let target =
            local_target(&selector(None, Some("Work")), &config, &cache, true).unwrap();
        assert_eq!(target, Target::ResolveTitle("Work".to_string()));
    }

    #[test]
    fn test_cache_miss_falls_back_to_live_resolution() {
        let dir = TempDir::new().unwrap();
        let cache = empty_cache(&dir);
        let config = config(&dir, None);

        let target =
            local_target(&selector(None, Some("Work")), &config, &cache, false).unwrap();
        assert_eq!(target, Target::ResolveTitle("Work".to_string()));
    }

    #[test]
    fn test_parse_due_accepts_rfc3339() {
        let due = parse_due("2026-09-01T12:30:00+02:00").unwrap();
        assert_eq!(due.to_rfc3339(), "2026-09-01T10:30:00+00:00");
    }

    #[test]
    fn test_parse_due_rejects_other_formats() {
        let err = parse_due("tomorrow").unwrap_err();
        assert!(matches!(err, GtasksError::InvalidDueDate(_)));
    }
}
