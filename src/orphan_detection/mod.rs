/// Orphan detection domain - pure classification logic with no I/O
pub mod domain;
pub mod policies;
pub mod services;
