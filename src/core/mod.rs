//! Core module containing the action vocabulary, naming rule and
//! inflection the derivation builder is made of

pub mod action;
pub mod error;
pub mod inflect;
pub mod naming;
pub mod verb;

pub use action::{Action, ActionKind, ActionSet, Cardinality};
pub use error::{ConfigError, ConfigResult};
pub use inflect::singularize;
pub use naming::action_name;
pub use verb::CrudVerb;
