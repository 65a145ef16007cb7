pub mod author;
pub mod page;
pub mod post;
pub mod response;

use derive_where::derive_where;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    marker::PhantomData,
};

/// Ties an [`Id`] to the kind of entity it identifies and to its underlying representation.
pub trait IdMarker {
    type Repr: Copy + Eq + Ord + Hash + Debug + Display;
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct ImageMarker;
impl IdMarker for ImageMarker {
    type Repr = i64;
}

#[derive_where(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Id<Marker: IdMarker>(Marker::Repr, PhantomData<Marker>);

impl<Marker: IdMarker> Id<Marker> {
    #[must_use]
    pub fn new(inner: Marker::Repr) -> Self {
        Self(inner, PhantomData)
    }

    #[must_use]
    pub fn get(self) -> Marker::Repr {
        self.0
    }
}

impl<Marker: IdMarker> Display for Id<Marker> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<Marker: IdMarker> Serialize for Id<Marker>
where
    Marker::Repr: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, Marker: IdMarker> Deserialize<'de> for Id<Marker>
where
    Marker::Repr: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <Marker::Repr as Deserialize<'de>>::deserialize(deserializer).map(Self::new)
    }
}

impl<Marker: IdMarker<Repr = i64>> From<i64> for Id<Marker> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<Marker: IdMarker<Repr = uuid::Uuid>> From<uuid::Uuid> for Id<Marker> {
    fn from(value: uuid::Uuid) -> Self {
        Self::new(value)
    }
}
