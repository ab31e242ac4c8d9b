pub mod diagnostics;
pub mod listing;
