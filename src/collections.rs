use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;

pub use rustc_hash::FxHashSet;


/// Use indexmap for ordered iteration and rustc_hash for fast hashing
/// Key order is insertion order, which component scans rely on
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
