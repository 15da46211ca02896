//! Application Services
//!
//! Runtime plumbing shared by the use cases.

mod task_scope;

pub use task_scope::TaskScope;
