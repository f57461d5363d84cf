//! Editing sessions over a single search configuration.

use log::debug;
use std::fmt;

use sift_core::{
    ConditionError, ConditionId, ConditionValue, FieldSchema, FilterCondition,
    FilterConditionUpdate, LogicalOperator, Operator, OperatorCatalog, SearchConfig,
    SearchOperation, SortCondition, SortConditionUpdate, SortOrder, validate_config,
};

use crate::decode::decode;
use crate::encode::encode;
use crate::params::QueryParams;
use crate::query_string::{parse_query_string, to_query_string};

type ChangeListener = Box<dyn FnMut(&SearchConfig)>;

/// One editing session over a search configuration.
///
/// Every mutating call replaces the whole configuration and synchronously
/// notifies every registered listener with the new value. A session has a
/// single owner; it is neither `Send` nor `Sync`.
pub struct SearchSession {
    schema: FieldSchema,
    catalog: OperatorCatalog,
    initial: SearchConfig,
    config: SearchConfig,
    errors: Vec<ConditionError>,
    listeners: Vec<ChangeListener>,
}

impl SearchSession {
    /// Starts a session with an empty configuration.
    pub fn new(schema: FieldSchema, catalog: OperatorCatalog) -> Self {
        Self::with_initial(schema, catalog, SearchConfig::default())
    }

    /// Starts a session from a given configuration. `reset` returns to it.
    pub fn with_initial(schema: FieldSchema, catalog: OperatorCatalog, initial: SearchConfig) -> Self {
        Self {
            schema,
            catalog,
            config: initial.clone(),
            initial,
            errors: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Starts a session from previously encoded parameters, e.g. parsed from a URL.
    pub fn from_query_params(
        schema: FieldSchema,
        catalog: OperatorCatalog,
        params: &QueryParams,
    ) -> Self {
        let initial = decode(&catalog, params).into_config();
        Self::with_initial(schema, catalog, initial)
    }

    /// Registers a listener called with the new configuration after every change.
    pub fn on_change(&mut self, listener: impl FnMut(&SearchConfig) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    pub fn catalog(&self) -> &OperatorCatalog {
        &self.catalog
    }

    fn dispatch(&mut self, operation: SearchOperation) {
        self.config = self.config.apply(operation);
        for listener in self.listeners.iter_mut() {
            listener(&self.config);
        }
    }

    // Filter conditions

    /// Appends a filter condition and returns its id.
    pub fn add_condition(
        &mut self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<ConditionValue>,
    ) -> ConditionId {
        let condition = FilterCondition::new(field, operator, value);
        let id = condition.id;
        self.dispatch(SearchOperation::AddCondition(condition));
        id
    }

    /// Appends a value-less condition on `field` using the default operator
    /// for its type. Returns `None` when the field isn't in the schema.
    pub fn add_default_condition(&mut self, field: &str) -> Option<ConditionId> {
        let field_type = self.schema.field_type(field)?;
        let operator = self.catalog.default_operator(field_type)?.operator;
        Some(self.add_condition(field, operator, ConditionValue::Absent))
    }

    pub fn update_condition(&mut self, id: ConditionId, update: FilterConditionUpdate) {
        self.dispatch(SearchOperation::UpdateCondition { id, update });
    }

    pub fn remove_condition(&mut self, id: ConditionId) {
        self.dispatch(SearchOperation::RemoveCondition(id));
    }

    /// Moves a filter condition. Reordering changes how AND/OR combine.
    pub fn move_condition(&mut self, from: usize, to: usize) {
        self.dispatch(SearchOperation::MoveCondition { from, to });
    }

    pub fn toggle_condition(&mut self, id: ConditionId) {
        self.dispatch(SearchOperation::ToggleCondition(id));
    }

    /// Appends a copy of a condition and returns the copy's id.
    pub fn duplicate_condition(&mut self, id: ConditionId) -> Option<ConditionId> {
        let before = self.config.filter_conditions.len();
        self.dispatch(SearchOperation::DuplicateCondition(id));
        if self.config.filter_conditions.len() > before {
            self.config.filter_conditions.last().map(|c| c.id)
        } else {
            None
        }
    }

    pub fn clear_conditions(&mut self) {
        self.dispatch(SearchOperation::ClearConditions);
    }

    // Sorting

    pub fn add_sort(&mut self, field: impl Into<String>, order: SortOrder) -> ConditionId {
        let sort = SortCondition::new(field, order);
        let id = sort.id;
        self.dispatch(SearchOperation::AddSort(sort));
        id
    }

    pub fn update_sort(&mut self, id: ConditionId, update: SortConditionUpdate) {
        self.dispatch(SearchOperation::UpdateSort { id, update });
    }

    pub fn remove_sort(&mut self, id: ConditionId) {
        self.dispatch(SearchOperation::RemoveSort(id));
    }

    pub fn move_sort(&mut self, from: usize, to: usize) {
        self.dispatch(SearchOperation::MoveSort { from, to });
    }

    /// Replaces the sort list; the first entry is the primary key.
    pub fn set_sorting(&mut self, sorts: Vec<SortCondition>) {
        self.dispatch(SearchOperation::SetSorting(sorts));
    }

    pub fn clear_sorting(&mut self) {
        self.dispatch(SearchOperation::ClearSorting);
    }

    // Everything else

    pub fn set_global_search(&mut self, text: impl Into<String>) {
        self.dispatch(SearchOperation::SetGlobalSearch(text.into()));
    }

    pub fn set_default_logical_operator(&mut self, operator: LogicalOperator) {
        self.dispatch(SearchOperation::SetDefaultLogicalOperator(Some(operator)));
    }

    /// Decodes parameters and merges them over the current configuration.
    pub fn import_from_query_params(&mut self, params: &QueryParams) {
        let patch = decode(&self.catalog, params);
        debug!("Importing {} query parameters", params.len());
        self.dispatch(SearchOperation::Merge(patch));
    }

    /// Same as [`import_from_query_params`](Self::import_from_query_params),
    /// from a URL query string.
    pub fn import_from_query_string(&mut self, query: &str) {
        self.import_from_query_params(&parse_query_string(query));
    }

    /// Returns to the configuration the session started with.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.dispatch(SearchOperation::Replace(self.initial.clone()));
    }

    /// Validates the current configuration and remembers the result.
    pub fn validate(&mut self) -> &[ConditionError] {
        self.errors = validate_config(&self.catalog, &self.schema, &self.config);
        &self.errors
    }

    /// Errors from the last call to [`validate`](Self::validate).
    pub fn errors(&self) -> &[ConditionError] {
        &self.errors
    }

    pub fn is_valid(&mut self) -> bool {
        self.validate().is_empty()
    }

    pub fn to_query_params(&self) -> QueryParams {
        encode(&self.catalog, &self.config)
    }

    pub fn to_query_string(&self) -> String {
        to_query_string(&self.to_query_params())
    }
}

impl fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSession")
            .field("config", &self.config)
            .field("errors", &self.errors)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
