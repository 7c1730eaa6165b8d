//! Hash collections keyed with the Fx hasher.
//!
//! Feature and browser keys are short strings hashed on every lookup, so the
//! faster non-cryptographic hasher is used everywhere in the workspace.

pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
pub type FxHashSet<T> = rustc_hash::FxHashSet<T>;
