//! The reconciler's internal data model (§3), split the way
//! `editor_core::buffer::text_buffer` splits a single struct's
//! implementation across focused files:
//! - `core.rs`: the `State` struct itself and its constructor
//! - `opener.rs`: paren-stack entries
//! - `paren_trail.rs`: the trailing-close-paren run for the current line
//! - `paren_tree.rs`: the optional `returnParens` arena
//! - `changes.rs`: the read-only change index
//! - `lines.rs`: input line splitting

pub(crate) mod changes;
pub(crate) mod core;
pub(crate) mod lines;
pub(crate) mod opener;
pub(crate) mod paren_trail;
pub(crate) mod paren_tree;

pub(crate) use core::{Mode, PendingStrayClose, State};
