//! Post editor dialog state (pure).
//!
//! One dialog serves both create and edit. It owns a title [`TextInput`] and
//! a tag multi-select over [`SELECTABLE_TAGS`]. Tags a post already carries
//! that are not in the selectable list are kept untouched.

use crate::model::{Post, PostDraft, PostId, TagSet, ValidationError, SELECTABLE_TAGS};
use crate::state::text_input::TextInput;

/// What submitting the dialog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Submitting creates a new post.
    Create,
    /// Submitting updates the post with this id.
    Edit(PostId),
}

/// Which field receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorFocus {
    /// Title text field.
    #[default]
    Title,
    /// Tag multi-select.
    Tags,
}

/// Create/edit dialog: title field, tag selection and focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    mode: EditorMode,
    title: TextInput,
    tags: TagSet,
    /// Index into [`SELECTABLE_TAGS`].
    tag_cursor: usize,
    focus: EditorFocus,
    /// Last validation failure, shown under the title field.
    error: Option<ValidationError>,
}

impl EditorState {
    /// Blank dialog for a new post.
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: TextInput::new(),
            tags: TagSet::new(),
            tag_cursor: 0,
            focus: EditorFocus::Title,
            error: None,
        }
    }

    /// Dialog prefilled from an existing post.
    pub fn edit(post: &Post) -> Self {
        Self {
            mode: EditorMode::Edit(post.id),
            title: TextInput::with_text(post.title.clone()),
            tags: post.tags.clone(),
            tag_cursor: 0,
            focus: EditorFocus::Title,
            error: None,
        }
    }

    /// Create or edit.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Title field.
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// Currently selected tags.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Highlighted entry of [`SELECTABLE_TAGS`].
    pub fn tag_cursor(&self) -> usize {
        self.tag_cursor
    }

    /// Field receiving input.
    pub fn focus(&self) -> EditorFocus {
        self.focus
    }

    /// Validation message from the last failed submit.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Tab: swap between the title and the tag list.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditorFocus::Title => EditorFocus::Tags,
            EditorFocus::Tags => EditorFocus::Title,
        };
    }

    /// Typed character. Edits the title, or toggles the tag under the
    /// cursor on space while the tag list has focus.
    pub fn input_char(&mut self, ch: char) {
        match self.focus {
            EditorFocus::Title => {
                self.title.insert(ch);
                self.error = None;
            }
            EditorFocus::Tags if ch == ' ' => self.toggle_current_tag(),
            EditorFocus::Tags => {}
        }
    }

    /// Delete before the title cursor.
    pub fn backspace(&mut self) {
        if self.focus == EditorFocus::Title {
            self.title.backspace();
        }
    }

    /// Delete under the title cursor.
    pub fn delete(&mut self) {
        if self.focus == EditorFocus::Title {
            self.title.delete();
        }
    }

    /// Title cursor left.
    pub fn left(&mut self) {
        if self.focus == EditorFocus::Title {
            self.title.left();
        }
    }

    /// Title cursor right.
    pub fn right(&mut self) {
        if self.focus == EditorFocus::Title {
            self.title.right();
        }
    }

    /// Title cursor to start.
    pub fn home(&mut self) {
        if self.focus == EditorFocus::Title {
            self.title.home();
        }
    }

    /// Title cursor to end.
    pub fn end(&mut self) {
        if self.focus == EditorFocus::Title {
            self.title.end();
        }
    }

    /// Move the tag cursor down, wrapping.
    pub fn next_tag(&mut self) {
        if self.focus == EditorFocus::Tags {
            self.tag_cursor = (self.tag_cursor + 1) % SELECTABLE_TAGS.len();
        }
    }

    /// Move the tag cursor up, wrapping.
    pub fn prev_tag(&mut self) {
        if self.focus == EditorFocus::Tags {
            self.tag_cursor = self
                .tag_cursor
                .checked_sub(1)
                .unwrap_or(SELECTABLE_TAGS.len() - 1);
        }
    }

    /// Select or unselect the highlighted tag.
    pub fn toggle_current_tag(&mut self) {
        if let Some(label) = SELECTABLE_TAGS.get(self.tag_cursor) {
            self.tags.toggle(label);
        }
    }

    /// Validate the fields into a draft. On failure the error is stored for
    /// display, focus returns to the title, and `None` is returned.
    pub fn submit(&mut self) -> Option<PostDraft> {
        match PostDraft::new(self.title.text(), self.tags.clone()) {
            Ok(draft) => {
                self.error = None;
                Some(draft)
            }
            Err(error) => {
                self.error = Some(error);
                self.focus = EditorFocus::Title;
                None
            }
        }
    }
}
