pub mod atomic_span;
pub mod engine_update;
pub mod replacement;
pub mod selection;
pub mod snapshot;
