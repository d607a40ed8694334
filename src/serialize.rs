//! `serde` support. A [`Tree`] is written out as its root [`Node`] (or nothing, when empty) and
//! read back through [`Tree::try_with_root`] so a document can't smuggle in out-of-order keys.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::node::Node;
use crate::tree::Tree;

impl<K> Serialize for Tree<K>
where
    K: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root().serialize(serializer)
    }
}

impl<'de, K> Deserialize<'de> for Tree<K>
where
    K: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Node<K>>::deserialize(deserializer)? {
            Some(root) => Self::try_with_root(root).map_err(de::Error::custom),
            None => Ok(Self::new()),
        }
    }
}
