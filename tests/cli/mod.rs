pub mod support;

mod algorithms;
mod config;
mod edits;
mod errors;
