#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod handle;

/// The core open-addressing table.
///
/// This module provides [`HandleMap`], a linear-probing hash table over
/// opaque key and value handles with caller-supplied hashing and a match
/// predicate chosen at construction.
pub mod hash_map;

/// A set-membership wrapper over the table.
///
/// This module provides [`HandleSet`], which stores key handles only and
/// exposes a contains/insert/remove interface on top of [`HandleMap`].
pub mod hash_set;

pub use handle::Handle;
pub use hash_map::HandleMap;
pub use hash_map::Slot;
pub use hash_map::identity_match;
pub use hash_set::HandleSet;
