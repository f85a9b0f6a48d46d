//! Selector application

mod arrays;
mod core;
mod filters;
mod wildcards;
