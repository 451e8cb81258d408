//! Declarative action records.
//!
//! Rule sets never subclass anything: they build an [`ActionDescriptor`] and
//! bind it on a character. The engine only ever looks at the descriptor.

use std::fmt;
use std::sync::Arc;

use crate::action::{ActionContext, Filter, Scope};
use crate::stats::Value;

/// Effect of an action: mutates the roster through the context and returns a
/// human-readable description.
pub type EffectFn<N> = Arc<dyn Fn(&mut ActionContext<'_, N>) -> String + Send + Sync>;

/// One resource an action consumes, e.g. 2 of `MP/Current`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceCost<N: Value = i64> {
    pub attribute: String,
    pub amount: N,
}

impl<N: Value> ResourceCost<N> {
    pub fn new(attribute: impl Into<String>, amount: N) -> Self {
        Self {
            attribute: attribute.into(),
            amount,
        }
    }

    /// Short label for menus: `MP/Current` reads as `MP`, `Items/Potion` as
    /// `Potion`.
    pub fn label(&self) -> &str {
        match self.attribute.rsplit_once('/') {
            Some((head, "Current")) => head,
            Some((_, tail)) => tail,
            None => &self.attribute,
        }
    }
}

impl<N: Value> fmt::Display for ResourceCost<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.label())
    }
}

/// A bindable action: scope + filter + costs + effect.
#[derive(Clone)]
pub struct ActionDescriptor<N: Value = i64> {
    name: String,
    menu_path: Vec<String>,
    scope: Scope,
    filter: Filter,
    effect: EffectFn<N>,
    costs: Vec<ResourceCost<N>>,
    visible: bool,
}

impl<N: Value> ActionDescriptor<N> {
    /// Visible, self-scoped, unfiltered and free until configured otherwise.
    pub fn new<F>(name: impl Into<String>, effect: F) -> Self
    where
        F: Fn(&mut ActionContext<'_, N>) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        let menu_path = name.split('/').map(str::to_owned).collect();
        Self {
            name,
            menu_path,
            scope: Scope::default(),
            filter: Filter::default(),
            effect: Arc::new(effect),
            costs: Vec::new(),
            visible: true,
        }
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_cost(mut self, attribute: impl Into<String>, amount: N) -> Self {
        self.costs.push(ResourceCost::new(attribute, amount));
        self
    }

    pub fn with_costs(mut self, costs: Vec<ResourceCost<N>>) -> Self {
        self.costs = costs;
        self
    }

    pub fn with_visibility(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Overrides where the action sits in the menu tree.
    ///
    /// By default the name is split on `/`; an action whose name contains a
    /// literal slash can be placed as a single leaf this way.
    pub fn with_menu_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.menu_path = path.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn menu_path(&self) -> &[String] {
        &self.menu_path
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn costs(&self) -> &[ResourceCost<N>] {
        &self.costs
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn effect(&self) -> EffectFn<N> {
        Arc::clone(&self.effect)
    }
}

impl<N: Value> fmt::Debug for ActionDescriptor<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("name", &self.name)
            .field("menu_path", &self.menu_path)
            .field("scope", &self.scope)
            .field("filter", &self.filter)
            .field("costs", &self.costs)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
