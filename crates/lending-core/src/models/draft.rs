use serde::Serialize;

/// Drafted reply for the selected item plus its in-progress edit.
///
/// The edit buffer is only meaningful while `editing` is true; saving copies
/// it into `text`, cancelling discards it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftState {
    text: String,
    editing: bool,
    edit_buffer: String,
}

impl DraftState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_draft(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    /// Mutable access to the edit buffer, only while editing
    pub fn edit_buffer_mut(&mut self) -> Option<&mut String> {
        if self.editing {
            Some(&mut self.edit_buffer)
        } else {
            None
        }
    }

    /// Replace the draft with freshly generated text, leaving edit mode
    pub fn set_generated(&mut self, text: String) {
        self.edit_buffer = text.clone();
        self.text = text;
        self.editing = false;
    }

    pub fn start_editing(&mut self) -> bool {
        if self.editing || self.text.is_empty() {
            return false;
        }
        self.edit_buffer = self.text.clone();
        self.editing = true;
        true
    }

    pub fn save_edits(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.text = std::mem::take(&mut self.edit_buffer);
        self.edit_buffer = self.text.clone();
        self.editing = false;
        true
    }

    pub fn cancel_edits(&mut self) -> bool {
        if !self.editing {
            return false;
        }
        self.edit_buffer = self.text.clone();
        self.editing = false;
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.edit_buffer.clear();
        self.editing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_edit_without_draft() {
        let mut draft = DraftState::new();
        assert!(!draft.start_editing());
        assert!(draft.edit_buffer_mut().is_none());
    }

    #[test]
    fn test_save_commits_buffer() {
        let mut draft = DraftState::new();
        draft.set_generated("Dear Jane".to_string());
        assert!(draft.start_editing());
        draft.edit_buffer_mut().unwrap().push_str(", hello");
        assert!(draft.save_edits());
        assert_eq!(draft.text(), "Dear Jane, hello");
        assert!(!draft.is_editing());
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut draft = DraftState::new();
        draft.set_generated("Dear Jane".to_string());
        draft.start_editing();
        draft.edit_buffer_mut().unwrap().clear();
        assert!(draft.cancel_edits());
        assert_eq!(draft.text(), "Dear Jane");
        assert_eq!(draft.edit_buffer(), "Dear Jane");
    }
}
