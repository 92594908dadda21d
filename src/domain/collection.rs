use super::enums::ListKind;
use super::error::ValidationError;
use super::gating::AllowedOps;
use super::item::{new_item_id, Item};
use serde::{Deserialize, Serialize};

/// Which item the input bar is currently editing, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    target: Option<String>,
}

impl EditSession {
    pub fn enabled(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// Ordered items plus the transient edit session.
///
/// Serializes as the bare item array; the session is never persisted.
/// Every mutation takes the current `AllowedOps` and is a silent no-op when
/// denied. Mutations return whether the items changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList {
    items: Vec<Item>,
    #[serde(skip)]
    session: EditSession,
}

impl ItemList {
    #[cfg(test)]
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            session: EditSession::default(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Append a new item. Empty (after trimming) text is rejected.
    pub fn add(&mut self, ops: &AllowedOps, kind: ListKind, text: &str) -> Result<bool, ValidationError> {
        if !ops.can_add {
            return Ok(false);
        }
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText(kind));
        }

        let id = new_item_id(&self.items);
        self.items.push(Item::new(id, text.to_string()));
        Ok(true)
    }

    /// Overwrite an item's text, keeping its completion flag
    pub fn edit(&mut self, ops: &AllowedOps, id: &str, text: &str) -> bool {
        if !ops.can_edit {
            return false;
        }
        match self.get_mut(id) {
            Some(item) if item.text != text => {
                item.text = text.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn toggle_completed(&mut self, ops: &AllowedOps, id: &str) -> bool {
        if !ops.can_toggle {
            return false;
        }
        match self.get_mut(id) {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, ops: &AllowedOps, id: &str) -> bool {
        if !ops.can_delete {
            return false;
        }
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.session.target() == Some(id) {
            self.session.target = None;
        }
        self.items.len() != before
    }

    /// Open an edit session on `id`, returning the text to load into the input
    pub fn begin_edit(&mut self, ops: &AllowedOps, id: &str) -> Option<String> {
        if !ops.can_edit {
            return None;
        }
        let text = self.get(id)?.text.clone();
        self.session.target = Some(id.to_string());
        Some(text)
    }

    /// Write `text` to the session's target and close the session
    pub fn commit_edit(&mut self, ops: &AllowedOps, kind: ListKind, text: &str) -> Result<bool, ValidationError> {
        if !ops.can_edit {
            return Ok(false);
        }
        let Some(target) = self.session.target.clone() else {
            return Ok(false);
        };
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText(kind));
        }

        let changed = self.edit(ops, &target, text);
        self.session.target = None;
        Ok(changed)
    }

    /// Route input-bar text: commit the open edit session, otherwise add
    pub fn submit(&mut self, ops: &AllowedOps, kind: ListKind, text: &str) -> Result<bool, ValidationError> {
        if self.session.enabled() {
            self.commit_edit(ops, kind, text)
        } else {
            self.add(ops, kind, text)
        }
    }

    /// Close the edit session without writing. Returns whether one was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.session.target.take().is_some()
    }

    /// Remove every item
    pub fn clear(&mut self, ops: &AllowedOps) -> bool {
        if !ops.can_delete || self.is_empty() {
            self.session.target = None;
            return false;
        }
        self.items.clear();
        self.session.target = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const KIND: ListKind = ListKind::Todo;

    fn open() -> AllowedOps {
        AllowedOps::unrestricted()
    }

    fn list_with(texts: &[&str]) -> ItemList {
        let mut list = ItemList::default();
        for text in texts {
            list.add(&open(), KIND, text).unwrap();
        }
        list
    }

    #[test]
    fn test_add_toggle_delete() {
        let mut list = ItemList::default();
        assert!(list.add(&open(), KIND, "buy milk").unwrap());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "buy milk");
        assert!(!list.items()[0].completed);

        let id = list.items()[0].id.clone();
        assert!(list.toggle_completed(&open(), &id));
        assert!(list.items()[0].completed);

        assert!(list.delete(&open(), &id));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_empty_text_rejected() {
        let mut list = list_with(&["a"]);
        let before = list.clone();

        assert_eq!(list.add(&open(), KIND, ""), Err(ValidationError::EmptyText(KIND)));
        assert_eq!(list.add(&open(), KIND, "   "), Err(ValidationError::EmptyText(KIND)));
        assert_eq!(list, before);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut list = list_with(&["a", "b"]);
        let id = list.items()[1].id.clone();
        let before = list.clone();
        list.toggle_completed(&open(), &id);
        list.toggle_completed(&open(), &id);
        assert_eq!(list, before);
    }

    #[test]
    fn test_insertion_order_kept() {
        let list = list_with(&["first", "second", "third"]);
        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_edit_session_round_trip() {
        let mut list = list_with(&["old"]);
        let id = list.items()[0].id.clone();
        list.toggle_completed(&open(), &id);

        let text = list.begin_edit(&open(), &id);
        assert_eq!(text.as_deref(), Some("old"));
        assert!(list.session().enabled());
        assert_eq!(list.session().target(), Some(id.as_str()));

        assert!(list.submit(&open(), KIND, "new").unwrap());
        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].text, "new");
        assert!(list.items()[0].completed);
        assert!(!list.session().enabled());
    }

    #[test]
    fn test_commit_edit_empty_text_keeps_session() {
        let mut list = list_with(&["old"]);
        let id = list.items()[0].id.clone();
        list.begin_edit(&open(), &id);

        assert_eq!(list.submit(&open(), KIND, " "), Err(ValidationError::EmptyText(KIND)));
        assert_eq!(list.items()[0].text, "old");
        assert!(list.session().enabled());
    }

    #[test]
    fn test_missing_ids_are_noops() {
        let mut list = list_with(&["a"]);
        let before = list.clone();
        assert!(!list.toggle_completed(&open(), "nope"));
        assert!(!list.delete(&open(), "nope"));
        assert!(!list.edit(&open(), "nope", "x"));
        assert_eq!(list.begin_edit(&open(), "nope"), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_locked_ops_leave_collection_unchanged() {
        let mut list = list_with(&["a", "b"]);
        let id = list.items()[0].id.clone();
        list.begin_edit(&open(), &id);
        let before = list.clone();
        let locked = AllowedOps::locked();

        for _ in 0..3 {
            assert_eq!(list.add(&locked, KIND, "c"), Ok(false));
            assert!(!list.edit(&locked, &id, "z"));
            assert!(!list.delete(&locked, &id));
            assert!(!list.toggle_completed(&locked, &id));
            assert_eq!(list.submit(&locked, KIND, "z"), Ok(false));
            assert_eq!(list.begin_edit(&locked, &id), None);
            // Gating is checked before validation, so no error either
            assert_eq!(list.add(&locked, KIND, ""), Ok(false));
        }
        assert_eq!(list, before);
    }

    #[test]
    fn test_delete_edited_item_closes_session() {
        let mut list = list_with(&["a"]);
        let id = list.items()[0].id.clone();
        list.begin_edit(&open(), &id);
        list.delete(&open(), &id);
        assert!(!list.session().enabled());

        // Next submit adds rather than editing a ghost
        assert!(list.submit(&open(), KIND, "b").unwrap());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut list = list_with(&["a", "b"]);
        assert!(!list.clear(&AllowedOps::locked()));
        assert_eq!(list.len(), 2);
        assert!(list.clear(&open()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let list = ItemList::from_items(vec![Item::new("1".to_string(), "a".to_string())]);
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"id":"1","text":"a","completed":false}]"#);

        let back: ItemList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
