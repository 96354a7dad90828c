pub mod selectors;
pub mod source;
pub mod spec;
