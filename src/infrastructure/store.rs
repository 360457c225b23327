use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::customer::{Customer, CustomerId};
use crate::domain::repositories::StoreError;

/// Longest customer name the table accepts
pub const MAX_NAME_LENGTH: usize = 250;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Change {
    Insert(Customer),
    Update(Customer),
    Delete(CustomerId),
}

/// Writes staged by one session, applied by [`DbContext::commit`]
///
/// Each dispatched request gets its own change set, so a failed commit only
/// ever discards the writes of the request that made it.
#[derive(Debug, Default)]
pub struct ChangeSet {
    changes: Mutex<Vec<Change>>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.lock()?.is_empty())
    }

    fn push(&self, change: Change) -> Result<(), StoreError> {
        self.lock()?.push(change);
        Ok(())
    }

    fn take(&self) -> Result<Vec<Change>, StoreError> {
        Ok(std::mem::take(&mut *self.lock()?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Change>>, StoreError> {
        self.changes
            .lock()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

#[derive(Debug)]
struct State {
    customers: BTreeMap<CustomerId, Customer>,
    next_id: CustomerId,
}

impl Default for State {
    fn default() -> Self {
        Self {
            customers: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory customer table
///
/// Identifiers come from a sequence starting at 1 and are handed out when an
/// insert is staged. Reads only see committed rows; [`DbContext::commit`]
/// applies one change set in order, or none of it.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct DbContext {
    state: RwLock<State>,
}

impl DbContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn stage_insert(&self, changes: &ChangeSet, customer: Customer) -> Result<Customer, StoreError> {
        let id = {
            let mut state = self.write()?;
            let id = state.next_id;
            state.next_id += 1;
            id
        };

        let customer = customer.with_id(id);
        changes.push(Change::Insert(customer.clone()))?;

        Ok(customer)
    }

    pub(crate) fn stage_update(&self, changes: &ChangeSet, customer: Customer) -> Result<(), StoreError> {
        if self.read()?.customers.contains_key(&customer.id()) {
            changes.push(Change::Update(customer))?;
        }

        Ok(())
    }

    pub(crate) fn stage_delete(&self, changes: &ChangeSet, id: CustomerId) -> Result<(), StoreError> {
        if self.read()?.customers.contains_key(&id) {
            changes.push(Change::Delete(id))?;
        }

        Ok(())
    }

    pub fn find(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        Ok(self.read()?.customers.get(&id).cloned())
    }

    pub fn all(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.read()?.customers.values().cloned().collect())
    }

    /// Applies every change staged in `changes`
    ///
    /// The change set is drained either way. A constraint violation leaves the
    /// committed rows untouched; change sets of other sessions are unaffected.
    pub fn commit(&self, changes: &ChangeSet) -> Result<usize, StoreError> {
        let pending = changes.take()?;

        for change in &pending {
            if let Change::Insert(customer) | Change::Update(customer) = change {
                check_name(customer)?;
            }
        }

        let mut state = self.write()?;
        let applied = pending.len();
        for change in pending {
            match change {
                Change::Insert(customer) => {
                    state.customers.insert(customer.id(), customer);
                }
                Change::Update(customer) => {
                    if let Some(row) = state.customers.get_mut(&customer.id()) {
                        *row = customer;
                    }
                }
                Change::Delete(id) => {
                    state.customers.remove(&id);
                }
            }
        }

        Ok(applied)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

fn check_name(customer: &Customer) -> Result<(), StoreError> {
    let length = customer.name().chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(StoreError::Constraint {
            field: "name",
            reason: format!("{} characters exceeds the maximum of {}", length, MAX_NAME_LENGTH),
        });
    }

    Ok(())
}
