pub mod fallback;
pub mod probes;
pub mod signal;
