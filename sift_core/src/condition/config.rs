use serde::{Deserialize, Serialize};

use super::types::{ConditionId, FilterCondition, LogicalOperator, SortCondition};

/// The aggregate of one editing session: filters, sorts, free text and the
/// default combinator.
///
/// Both condition lists keep their order exactly; filter order drives
/// AND/OR grouping and sort order is the sort priority.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    #[serde(default)]
    pub filter_conditions: Vec<FilterCondition>,
    #[serde(default)]
    pub sort_conditions: Vec<SortCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_logical_operator: Option<LogicalOperator>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        self.filter_conditions.push(condition);
        self
    }

    pub fn with_sort(mut self, sort: SortCondition) -> Self {
        self.sort_conditions.push(sort);
        self
    }

    pub fn with_global_search(mut self, text: impl Into<String>) -> Self {
        self.global_search = Some(text.into());
        self
    }

    pub fn with_default_logical_operator(mut self, operator: LogicalOperator) -> Self {
        self.default_logical_operator = Some(operator);
        self
    }

    pub fn condition(&self, id: ConditionId) -> Option<&FilterCondition> {
        self.filter_conditions.iter().find(|c| c.id == id)
    }

    pub fn sort(&self, id: ConditionId) -> Option<&SortCondition> {
        self.sort_conditions.iter().find(|s| s.id == id)
    }

    pub fn enabled_conditions(&self) -> impl Iterator<Item = &FilterCondition> {
        self.filter_conditions.iter().filter(|c| c.enabled)
    }

    /// The global search text, if it is non-empty.
    pub fn search_text(&self) -> Option<&str> {
        self.global_search.as_deref().filter(|text| !text.is_empty())
    }

    /// Shallow merge: every field present in the patch replaces the current one.
    pub fn merged(&self, patch: SearchConfigPatch) -> SearchConfig {
        SearchConfig {
            filter_conditions: patch
                .filter_conditions
                .unwrap_or_else(|| self.filter_conditions.clone()),
            sort_conditions: patch
                .sort_conditions
                .unwrap_or_else(|| self.sort_conditions.clone()),
            global_search: patch.global_search.or_else(|| self.global_search.clone()),
            default_logical_operator: patch
                .default_logical_operator
                .or(self.default_logical_operator),
        }
    }
}

/// A partial search configuration, as produced by decoding query parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchConfigPatch {
    pub filter_conditions: Option<Vec<FilterCondition>>,
    pub sort_conditions: Option<Vec<SortCondition>>,
    pub global_search: Option<String>,
    pub default_logical_operator: Option<LogicalOperator>,
}

impl SearchConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.filter_conditions.is_none()
            && self.sort_conditions.is_none()
            && self.global_search.is_none()
            && self.default_logical_operator.is_none()
    }

    /// The patch applied to an empty configuration.
    pub fn into_config(self) -> SearchConfig {
        SearchConfig::default().merged(self)
    }
}
