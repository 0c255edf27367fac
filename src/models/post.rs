//! News feed item. Not joined with the sports entities.

use crate::store::{Collection, Record};
use serde::{Deserialize, Serialize};

pub type PostId = String;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: PostId,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    pub date: String,
}

impl Record for Post {
    const COLLECTION: Collection = Collection::Posts;

    fn assign_id(&mut self, id: String) {
        self.id = id;
    }
}
