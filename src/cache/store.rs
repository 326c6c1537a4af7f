// Persistent bidirectional cache mapping task list ids to titles.
// Canonical direction (id -> title) is persisted as JSON; title -> id is derived.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;

use crate::api::TaskList;
use crate::error::{GtasksError, Result};

/// Cache for mapping task list ids to titles (bidirectional).
///
/// Persists the id -> title mapping as a JSON object on disk so titles can be
/// resolved across CLI invocations. A reverse index (title -> id) is kept in
/// memory only. Titles are not unique: when several ids share a title, the
/// reverse index keeps whichever mapping was inserted last.
///
/// The remote service is always authoritative; this cache may be deleted and
/// rebuilt at any time. Concurrent CLI invocations against the same cache
/// file are unsupported and may race.
#[derive(Debug)]
pub struct TasklistCache {
    path: PathBuf,
    id_to_title: BTreeMap<String, String>,
    title_to_id: HashMap<String, String>,
}

impl TasklistCache {
    /// Load the cache from `path`.
    ///
    /// A missing file yields an empty cache. A file that exists but cannot
    /// be read or parsed fails with `CacheParse`; a corrupt cache is never
    /// silently reset.
    pub fn load(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path,
                id_to_title: BTreeMap::new(),
                title_to_id: HashMap::new(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|e| GtasksError::CacheParse {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let id_to_title: BTreeMap<String, String> =
            serde_json::from_str(&contents).map_err(|e| GtasksError::CacheParse {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let title_to_id = id_to_title
            .iter()
            .map(|(id, title)| (title.clone(), id.clone()))
            .collect();

        Ok(Self {
            path,
            id_to_title,
            title_to_id,
        })
    }

    /// Get the cached title for a task list id.
    pub fn get_title(&self, tasklist_id: &str) -> Option<&str> {
        self.id_to_title.get(tasklist_id).map(String::as_str)
    }

    /// Get a task list id by title.
    ///
    /// When several cached lists share the title, returns the one inserted
    /// most recently.
    pub fn get_id(&self, title: &str) -> Option<&str> {
        self.title_to_id.get(title).map(String::as_str)
    }

    pub fn contains_id(&self, tasklist_id: &str) -> bool {
        self.id_to_title.contains_key(tasklist_id)
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_title.is_empty()
    }

    pub fn len(&self) -> usize {
        self.id_to_title.len()
    }

    /// Merge task lists into the cache and persist it.
    ///
    /// Existing entries for the same id are overwritten; entries for other
    /// ids are kept. Items with an empty id are skipped. After saving, a
    /// non-fatal warning is printed to stderr if multiple cached lists share
    /// a title.
    pub fn update_from_items(&mut self, items: &[TaskList]) -> Result<()> {
        for item in items {
            if item.id.is_empty() {
                continue;
            }
            if let Some(old_title) = self.id_to_title.insert(item.id.clone(), item.title.clone())
                && self.title_to_id.get(&old_title).is_some_and(|id| *id == item.id)
            {
                self.title_to_id.remove(&old_title);
            }
            self.title_to_id.insert(item.title.clone(), item.id.clone());
        }
        debug!("cache: merged {} items, {} entries total", items.len(), self.len());
        self.save()?;
        self.warn_duplicate_titles(&mut io::stderr());
        Ok(())
    }

    /// Clear the cache in memory and delete the backing file.
    ///
    /// Idempotent: clearing when the file is already absent is not an error.
    pub fn clear(&mut self) -> Result<()> {
        self.id_to_title.clear();
        self.title_to_id.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        debug!("cache: cleared");
        Ok(())
    }

    /// Titles shared by more than one cached task list.
    pub fn duplicate_titles(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for title in self.id_to_title.values() {
            *counts.entry(title).or_default() += 1;
        }
        let mut duplicates: Vec<String> = counts
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(title, _)| title.to_string())
            .collect();
        duplicates.sort();
        duplicates
    }

    /// Persist the canonical id -> title mapping as pretty-printed JSON.
    ///
    /// BTreeMap keys give stable ordering, so the file diffs cleanly.
    /// Written atomically via temp file + rename, matching how the rest of
    /// the config directory is maintained.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.id_to_title)?;

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    /// Write the title-collision warning, if any titles collide.
    ///
    /// Non-fatal: write failures on the warning path are ignored.
    fn warn_duplicate_titles(&self, writer: &mut impl Write) {
        let duplicates = self.duplicate_titles();
        if duplicates.is_empty() {
            return;
        }

        let listed = duplicates
            .iter()
            .map(|title| format!("'{}'", title))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            writer,
            "Warning: multiple task lists share the same title: {}.\n\
             Use the task list id (instead of the title) to refer to these lists.\n\
             Run `gtasks lists --show-ids` to see the ids.",
            listed
        );
    }
}
