//! The content area shown to the right of the side menu.
//!
//! Menu handlers replace or extend what is displayed here, the way a web
//! layout swaps the components of its main panel.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sidemenu::MenuClickHandler;

use crate::view::DirtyFlag;

/// One element of the content area.
#[derive(Clone)]
pub enum ContentBlock {
    /// Static text.
    Label(String),
    /// A pressable button running `on_click`.
    Button { caption: String, on_click: MenuClickHandler },
}

impl ContentBlock {
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    pub fn button(caption: impl Into<String>, on_click: impl Fn() + 'static) -> Self {
        Self::Button {
            caption: caption.into(),
            on_click: Rc::new(on_click),
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, Self::Button { .. })
    }

    pub fn caption(&self) -> &str {
        match self {
            Self::Label(text) => text,
            Self::Button { caption, .. } => caption,
        }
    }
}

impl fmt::Debug for ContentBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(text) => f.debug_tuple("Label").field(text).finish(),
            Self::Button { caption, .. } => f.debug_struct("Button").field("caption", caption).finish_non_exhaustive(),
        }
    }
}

/// Shared handle to the blocks of the content area.
#[derive(Debug, Clone, Default)]
pub struct ContentArea {
    blocks: Rc<RefCell<Vec<ContentBlock>>>,
    dirty: DirtyFlag,
}

impl ContentArea {
    pub fn new(dirty: DirtyFlag) -> Self {
        Self {
            blocks: Rc::default(),
            dirty,
        }
    }

    /// Replaces everything with `block`.
    pub fn set_content(&self, block: ContentBlock) {
        self.set_blocks(vec![block]);
    }

    /// Replaces everything with `blocks`.
    pub fn set_blocks(&self, blocks: Vec<ContentBlock>) {
        *self.blocks.borrow_mut() = blocks;
        self.dirty.mark();
    }

    /// Appends `block` below the current content.
    pub fn add_component(&self, block: ContentBlock) {
        self.blocks.borrow_mut().push(block);
        self.dirty.mark();
    }

    pub fn remove_all_components(&self) {
        self.blocks.borrow_mut().clear();
        self.dirty.mark();
    }

    /// Snapshot of the current blocks; handlers stay callable after the area changes.
    pub fn blocks(&self) -> Vec<ContentBlock> {
        self.blocks.borrow().clone()
    }

    pub fn button_count(&self) -> usize {
        self.blocks.borrow().iter().filter(|block| block.is_button()).count()
    }

    /// Handler of the `index`-th button, counting buttons only.
    pub fn button_handler(&self, index: usize) -> Option<MenuClickHandler> {
        self.blocks
            .borrow()
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Button { on_click, .. } => Some(on_click.clone()),
                ContentBlock::Label(_) => None,
            })
            .nth(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_content_replaces_previous_blocks() {
        let content = ContentArea::default();
        content.add_component(ContentBlock::label("first"));
        content.add_component(ContentBlock::label("second"));
        content.set_content(ContentBlock::label("only"));

        let captions: Vec<String> = content.blocks().iter().map(|block| block.caption().to_string()).collect();
        assert_eq!(captions, vec!["only"]);
    }

    #[test]
    fn button_handlers_are_indexed_among_buttons() {
        let content = ContentArea::default();
        let pressed = Rc::new(Cell::new(0));
        let counter = pressed.clone();
        content.add_component(ContentBlock::label("A layout"));
        content.add_component(ContentBlock::button("Press", move || counter.set(counter.get() + 1)));

        assert_eq!(content.button_count(), 1);
        content.button_handler(0).expect("first button")();
        assert_eq!(pressed.get(), 1);
        assert!(content.button_handler(1).is_none());
    }

    #[test]
    fn mutations_mark_dirty() {
        let dirty = DirtyFlag::default();
        let content = ContentArea::new(dirty.clone());
        content.remove_all_components();
        assert!(dirty.take());
    }
}
