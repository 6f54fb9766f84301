//! A generic in-memory B-tree keyed by a user-supplied extraction function.
//!
//! The tree is a balanced multi-way search tree (CLRS minimum-degree variant): every
//! non-root node holds between `t - 1` and `2t - 1` objects and between `t` and `2t`
//! children, where `t` is the minimum degree fixed at construction (`t >= 2`).
//!
//! Objects are not compared directly; instead, a stored type implements [`BTreeItem`],
//! which extracts an orderable key and (optionally) reacts when an object leaves the
//! tree. This plays the role the reference implementation gives to four callback
//! hooks (`compare_objects`, `compare_key_object`, `extract_key`, `destroy_object`),
//! but ties them to the type system instead of runtime function pointers.
//!
//! Traversal is visitor-driven: there is no `Iterator` implementation, cursor, or
//! range-query API. See [`Tree::walk`].

mod error;
mod item;
mod node;
mod tree;

pub use error::BTreeError;
pub use item::BTreeItem;
pub use tree::Tree;
