use crate::model::{
    Id,
    post::{Post, PostMarker},
};
use serde::{Deserialize, Serialize};

/// One page of a timeline.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize)]
pub struct CursoredPostList {
    /// Number of posts in `content`.
    pub size: usize,
    /// Number of posts matching the timeline filter, regardless of cursor and limit.
    pub total_size: u64,
    /// Cursor for the following page, or `None` if nothing comes after `content`.
    pub next_cursor: Option<Id<PostMarker>>,
    pub content: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use crate::model::{Id, page::CursoredPostList};
    use serde_json::json;

    #[test]
    fn empty_page_json() {
        assert_eq!(
            serde_json::to_value(CursoredPostList::default()).unwrap(),
            json!({ "size": 0, "total_size": 0, "next_cursor": null, "content": [] })
        );
    }

    #[test]
    fn next_cursor_is_bare_id() {
        let page = CursoredPostList {
            size: 0,
            total_size: 50,
            next_cursor: Some(Id::new(24)),
            content: Vec::new(),
        };

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["next_cursor"], json!(24));
        assert_eq!(
            serde_json::from_value::<CursoredPostList>(value).unwrap(),
            page
        );
    }
}
