use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A to-do or checklist entry
///
/// The serialized shape is `{id, text, completed}`, shared by both lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within its collection, stable for the item's lifetime
    pub id: String,
    /// Entry text
    pub text: String,
    /// Whether the entry is done/checked
    #[serde(default)]
    pub completed: bool,
}

impl Item {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Generate an id that is not already used by `items`
pub fn new_item_id(items: &[Item]) -> String {
    loop {
        let id = Uuid::new_v4().to_string();
        if !items.iter().any(|item| item.id == id) {
            return id;
        }
    }
}
