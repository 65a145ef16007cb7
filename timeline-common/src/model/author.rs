use crate::model::{Id, IdMarker, ImageMarker};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct AuthorMarker;
impl IdMarker for AuthorMarker {
    type Repr = Uuid;
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize, Serialize)]
pub struct Author {
    pub id: Id<AuthorMarker>,
    /// Display name.
    pub pseudo: String,
    pub avatar_id: Option<Id<ImageMarker>>,
}
