//! # Core Store Framework
//!
//! This module defines the generic building blocks the inventory is built on.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all stored resource types must implement.
//! - [`ResourceStore`]: The generic, insertion-ordered store that owns entities.
//! - [`StoreError`]: Errors raised by the store itself.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Actions)
// =============================================================================

/// Trait that any resource entity must implement to be managed by a [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that stored resource types must satisfy,
/// the store's bookkeeping (uniqueness, ordering, logging) is written *once*.
///
/// We use "Associated Types" (type Id, type Action, etc.) to enforce type safety.
/// A `Product` only accepts a `StockAction`; the compiler rejects anything else.
pub trait Entity: Clone + Debug {
    /// The unique identifier for this entity (e.g., String, u64).
    type Id: Eq + Hash + Clone + Display + Debug;

    /// Enum representing resource-specific operations (e.g., `Sell`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// The error type returned when an action is rejected.
    type Error: Display;

    /// The key this entity is stored under. Must not change while stored.
    fn id(&self) -> &Self::Id;

    /// Handle a custom resource-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC ERRORS
// =============================================================================

/// Errors that can occur within the store itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
}

// =============================================================================
// 3. THE GENERIC STORE
// =============================================================================

/// The generic store that owns a collection of entities.
///
/// # Architecture Note
/// Entities have no existence outside the store: they are moved in by
/// [`insert`](Self::insert) and moved back out by [`remove`](Self::remove)
/// or [`retain`](Self::retain).
///
/// **Ordering**:
/// Iteration follows insertion order. Lookups go through the `HashMap`, while
/// `order` keeps the keys in the sequence they were inserted.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: Entity> {
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: Entity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> ResourceStore<T> {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Extract just the type name (e.g., "Product" instead of "inventory_recipe::model::product::Product")
    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let item = self.store.get(id);
        debug!(entity_type = Self::entity_type(), %id, found = item.is_some(), "Get");
        item
    }

    /// Inserts a new entity, rejecting ids that are already present.
    pub fn insert(&mut self, item: T) -> Result<(), StoreError> {
        let entity_type = Self::entity_type();
        let id = item.id().clone();
        debug!(entity_type, ?item, "Create");

        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Already exists");
            return Err(StoreError::AlreadyExists(id.to_string()));
        }

        self.order.push(id.clone());
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(())
    }

    /// Removes an entity, returning it. Absent ids leave the store untouched.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");
        match self.store.remove(id) {
            Some(item) => {
                self.order.retain(|key| key != id);
                info!(entity_type, %id, size = self.store.len(), "Deleted");
                Some(item)
            }
            None => {
                warn!(entity_type, %id, "Not found");
                None
            }
        }
    }

    /// Runs a custom action against one entity.
    ///
    /// Returns `None` when the id is absent, otherwise the action's own result.
    pub fn perform_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
    ) -> Option<Result<T::ActionResult, T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return None;
        };

        let result = item.handle_action(action);
        match &result {
            Ok(outcome) => info!(entity_type, %id, ?outcome, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        Some(result)
    }

    /// Iterates entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    /// Keeps only the entities matching `keep`, returning the removed ones in
    /// insertion order.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
        let entity_type = Self::entity_type();
        let doomed: Vec<T::Id> = self
            .iter()
            .filter(|item| !keep(item))
            .map(|item| item.id().clone())
            .collect();

        let removed: Vec<T> = doomed
            .iter()
            .filter_map(|id| self.store.remove(id))
            .collect();
        self.order.retain(|id| self.store.contains_key(id));

        for item in &removed {
            info!(entity_type, id = %item.id(), size = self.store.len(), "Deleted");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.order.clear();
        info!(entity_type = Self::entity_type(), size = 0, "Cleared");
    }
}

// =============================================================================
// 4. EXAMPLE USAGE (Test)
// =============================================================================
