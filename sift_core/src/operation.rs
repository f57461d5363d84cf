//! State transitions over a search configuration.
//!
//! Every change to a [`SearchConfig`] is expressed as a [`SearchOperation`]
//! and applied with [`SearchConfig::apply`], which returns a new value and
//! leaves the original untouched.

use log::debug;

use crate::condition::{
    ConditionId, FilterCondition, FilterConditionUpdate, LogicalOperator, SearchConfig,
    SearchConfigPatch, SortCondition, SortConditionUpdate,
};

/// Operations that can be applied to a search configuration
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOperation {
    /// Append a filter condition
    AddCondition(FilterCondition),
    UpdateCondition {
        id: ConditionId,
        update: FilterConditionUpdate,
    },
    RemoveCondition(ConditionId),
    /// Move a filter condition from one index to another
    MoveCondition { from: usize, to: usize },
    /// Flip the enabled flag
    ToggleCondition(ConditionId),
    /// Append a copy of a condition under a new id
    DuplicateCondition(ConditionId),
    ClearConditions,
    AddSort(SortCondition),
    UpdateSort {
        id: ConditionId,
        update: SortConditionUpdate,
    },
    RemoveSort(ConditionId),
    MoveSort { from: usize, to: usize },
    /// Replace the whole sort list
    SetSorting(Vec<SortCondition>),
    ClearSorting,
    /// Set the free-text search; empty text clears it
    SetGlobalSearch(String),
    SetDefaultLogicalOperator(Option<LogicalOperator>),
    /// Shallow-merge a decoded partial configuration
    Merge(SearchConfigPatch),
    /// Replace the whole configuration
    Replace(SearchConfig),
}

impl SearchConfig {
    /// Applies an operation and returns the resulting configuration.
    ///
    /// Operations naming an unknown id or an out-of-range index yield an
    /// unchanged copy.
    pub fn apply(&self, operation: SearchOperation) -> SearchConfig {
        let mut next = self.clone();

        match operation {
            SearchOperation::AddCondition(condition) => next.filter_conditions.push(condition),
            SearchOperation::UpdateCondition { id, update } => {
                match next.filter_conditions.iter_mut().find(|c| c.id == id) {
                    Some(condition) => *condition = update.apply_to(condition),
                    None => debug!("No filter condition '{}' to update", id),
                }
            }
            SearchOperation::RemoveCondition(id) => next.filter_conditions.retain(|c| c.id != id),
            SearchOperation::MoveCondition { from, to } => {
                move_item(&mut next.filter_conditions, from, to)
            }
            SearchOperation::ToggleCondition(id) => {
                match next.filter_conditions.iter_mut().find(|c| c.id == id) {
                    Some(condition) => condition.enabled = !condition.enabled,
                    None => debug!("No filter condition '{}' to toggle", id),
                }
            }
            SearchOperation::DuplicateCondition(id) => match self.condition(id) {
                Some(condition) => next.filter_conditions.push(condition.duplicate()),
                None => debug!("No filter condition '{}' to duplicate", id),
            },
            SearchOperation::ClearConditions => next.filter_conditions.clear(),
            SearchOperation::AddSort(sort) => next.sort_conditions.push(sort),
            SearchOperation::UpdateSort { id, update } => {
                match next.sort_conditions.iter_mut().find(|s| s.id == id) {
                    Some(sort) => *sort = update.apply_to(sort),
                    None => debug!("No sort condition '{}' to update", id),
                }
            }
            SearchOperation::RemoveSort(id) => next.sort_conditions.retain(|s| s.id != id),
            SearchOperation::MoveSort { from, to } => move_item(&mut next.sort_conditions, from, to),
            SearchOperation::SetSorting(sorts) => next.sort_conditions = sorts,
            SearchOperation::ClearSorting => next.sort_conditions.clear(),
            SearchOperation::SetGlobalSearch(text) => {
                next.global_search = if text.is_empty() { None } else { Some(text) };
            }
            SearchOperation::SetDefaultLogicalOperator(operator) => {
                next.default_logical_operator = operator;
            }
            SearchOperation::Merge(patch) => next = self.merged(patch),
            SearchOperation::Replace(config) => next = config,
        }

        next
    }
}

/// Removes the item at `from` and reinserts it at `to`.
fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() {
        debug!(
            "Ignoring move from {} to {} in a list of {}",
            from,
            to,
            items.len()
        );
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
