// 📚 Tool Store - single source of truth for the catalog
//
// Owns the insertion-ordered list of tools and the comparison selection.
// Every mutation re-serializes the whole list to the key-value store. A failed
// write keeps the in-memory change and comes back as a PersistenceWarning.

use std::collections::{BTreeSet, HashSet};

use crate::entities::{Category, Tool, ToolPatch};
use crate::error::{CatalogError, PersistenceWarning};
use crate::storage::KeyValueStore;

/// Key the catalog is stored under
pub const STORAGE_KEY: &str = "ai-tools";

// ============================================================================
// MUTATION RESULTS & EVENTS
// ============================================================================

/// What happened to the persisted snapshot after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    /// Collection written to storage
    Saved,
    /// Nothing changed, nothing written
    Unchanged,
    /// In-memory change kept, storage write failed
    NotSaved(PersistenceWarning),
}

impl SaveStatus {
    pub fn warning(&self) -> Option<&PersistenceWarning> {
        match self {
            SaveStatus::NotSaved(warning) => Some(warning),
            _ => None,
        }
    }
}

/// Change notification delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created { id: String },
    Updated { id: String },
    Deleted { id: String },
    SelectionChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&StoreEvent) + Send>;

// ============================================================================
// TOOL STORE
// ============================================================================

pub struct ToolStore {
    tools: Vec<Tool>,
    selected: BTreeSet<String>,
    storage: Box<dyn KeyValueStore>,
    key: String,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl ToolStore {
    /// Load the catalog stored under [`STORAGE_KEY`], falling back to `seed`
    pub fn load(storage: Box<dyn KeyValueStore>, seed: Vec<Tool>) -> Self {
        Self::load_with_key(storage, STORAGE_KEY, seed)
    }

    /// Load the catalog stored under `key`.
    ///
    /// A missing, unreadable or unparseable record means the store starts
    /// from `seed`. Storage is not written until the first mutation.
    pub fn load_with_key(storage: Box<dyn KeyValueStore>, key: &str, seed: Vec<Tool>) -> Self {
        let tools = match storage.get(key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Tool>>(&json) {
                Ok(tools) => {
                    tracing::info!(key, count = tools.len(), "loaded catalog from storage");
                    tools
                }
                Err(err) => {
                    tracing::warn!(key, error = %err, "stored catalog is unparseable, using seed data");
                    seed
                }
            },
            Ok(None) => {
                tracing::info!(key, count = seed.len(), "no stored catalog, using seed data");
                seed
            }
            Err(err) => {
                tracing::warn!(key, error = %format!("{:#}", err), "could not read storage, using seed data");
                seed
            }
        };

        ToolStore {
            tools: dedup_ids(tools),
            selected: BTreeSet::new(),
            storage,
            key: key.to_string(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// The live collection, in insertion order
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    /// Tools matching both the text query and the category filter, in
    /// insertion order.
    ///
    /// An empty text query matches everything. An empty or unrecognized
    /// category means no category filter.
    pub fn query(&self, text: &str, category: &str) -> Vec<&Tool> {
        self.query_category(text, Category::parse_filter(category))
    }

    /// Typed variant of [`ToolStore::query`]
    pub fn query_category(&self, text: &str, category: Option<Category>) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| category.map_or(true, |c| t.category == c))
            .filter(|t| t.matches_text(text))
            .collect()
    }

    /// Number of tools per category (categories with no tools included)
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|c| (*c, self.tools.iter().filter(|t| t.category == *c).count()))
            .collect()
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    pub fn selected_ids(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Select `id` if unselected, unselect it otherwise. Returns whether it
    /// is selected afterwards.
    pub fn toggle_selection(&mut self, id: &str) -> bool {
        let now_selected = if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        };

        self.notify(StoreEvent::SelectionChanged);
        now_selected
    }

    pub fn clear_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        self.selected.clear();
        self.notify(StoreEvent::SelectionChanged);
    }

    /// Selected tools in collection order (not selection order)
    pub fn selected_tools(&self) -> Vec<&Tool> {
        self.tools
            .iter()
            .filter(|t| self.selected.contains(&t.id))
            .collect()
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Append a tool. Fields are not validated; only an id collision is
    /// rejected, and then nothing changes.
    pub fn create(&mut self, tool: Tool) -> Result<SaveStatus, CatalogError> {
        if self.get_by_id(&tool.id).is_some() {
            return Err(CatalogError::DuplicateId(tool.id));
        }

        let id = tool.id.clone();
        self.tools.push(tool);
        tracing::debug!(%id, "tool created");

        let status = self.persist();
        self.notify(StoreEvent::Created { id });
        Ok(status)
    }

    /// Merge `patch` into the tool with `id`. Identity and creation time are
    /// never touched.
    pub fn update(&mut self, id: &str, patch: ToolPatch) -> Result<SaveStatus, CatalogError> {
        let tool = self
            .tools
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        tool.apply(patch);
        tracing::debug!(%id, "tool updated");

        let status = self.persist();
        self.notify(StoreEvent::Updated { id: id.to_string() });
        Ok(status)
    }

    /// Remove the tool and its selection entry together. Deleting an unknown
    /// id is a no-op.
    pub fn delete(&mut self, id: &str) -> SaveStatus {
        let before = self.tools.len();
        self.tools.retain(|t| t.id != id);
        let removed = self.tools.len() != before;
        let was_selected = self.selected.remove(id);

        if !removed {
            if was_selected {
                self.notify(StoreEvent::SelectionChanged);
            }
            return SaveStatus::Unchanged;
        }

        tracing::debug!(%id, "tool deleted");

        let status = self.persist();
        self.notify(StoreEvent::Deleted { id: id.to_string() });
        status
    }

    // ========================================================================
    // SUBSCRIPTIONS
    // ========================================================================

    /// Call `callback` after every successful mutation and selection change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&event);
        }
    }

    // ========================================================================
    // PERSISTENCE
    // ========================================================================

    fn persist(&mut self) -> SaveStatus {
        let result = serde_json::to_string(&self.tools)
            .map_err(anyhow::Error::from)
            .and_then(|json| self.storage.set(&self.key, &json));

        match result {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                let warning = PersistenceWarning {
                    key: self.key.clone(),
                    message: format!("{:#}", err),
                };
                tracing::warn!(key = %self.key, error = %warning.message, "failed to persist catalog");
                SaveStatus::NotSaved(warning)
            }
        }
    }
}

/// Keep the first tool for each id
fn dedup_ids(tools: Vec<Tool>) -> Vec<Tool> {
    let mut seen = HashSet::new();
    let before = tools.len();
    let unique: Vec<Tool> = tools
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect();

    if unique.len() != before {
        tracing::warn!(dropped = before - unique.len(), "dropped tools with duplicate ids");
    }
    unique
}

// ============================================================================
// TESTS
// ============================================================================
