use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};

// indexmap keeps iteration in insertion order, so environment lookup and
// reported failing names stay stable between runs
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub(crate) type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;
