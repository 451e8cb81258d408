//! Action domain - declarative, runtime-bound actions.
//!
//! Rule sets describe every action as data plus a closure:
//! - `ActionDescriptor`: name, scope, filter, costs, effect, visibility
//! - `Scope` / `Filter`: where targets come from and which of them qualify
//! - `TargetSelection`: the concrete outcome of scope + filter
//! - `ActionContext`: what an effect may read and mutate while it runs
//! - `Menu`: the label tree presented to whoever picks the action
//!
//! # Module Structure
//!
//! - `descriptor`: action records and resource costs
//! - `targeting`: scope/filter enums and candidate computation
//! - `execute`: cost deduction and effect invocation
//! - `menu`: hierarchical menu tree
//! - `error`: action and equipment errors

pub mod descriptor;
pub mod error;
pub mod execute;
pub mod menu;
pub mod targeting;

pub use descriptor::{ActionDescriptor, EffectFn, ResourceCost};
pub use error::{ActionError, EquipError};
pub use execute::ActionContext;
pub use menu::{Menu, MenuEntry};
pub use targeting::{Filter, Scope, TargetSelection};
