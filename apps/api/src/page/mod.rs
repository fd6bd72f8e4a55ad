#![allow(dead_code)]

// The page side of the pipeline: the document renderer patches are applied
// to, and the interaction state machines wired over it.

pub mod document;
pub mod filter;
pub mod form;
pub mod modal;
pub mod navigation;
pub mod session;
pub mod sidebar;
pub mod submit;

pub use document::{Document, PageError};
pub use session::{LoadState, Session};
