#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 書籍ID - カタログ唯一のエンティティの識別子
///
/// ストアが登録時に採番し、以後は不変。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}
