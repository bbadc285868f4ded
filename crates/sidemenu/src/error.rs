use thiserror::Error;

/// Errors returned by menu operations.
///
/// Using a registration after it was removed is not represented here: it is a
/// programming error and panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SideMenuError {
    /// A sibling with the same label already exists.
    #[error("Duplicate menu entry. '{text}' already exists")]
    DuplicateEntry { text: String },
    /// Sub menus were requested on a user menu item.
    #[error("'{text}' is a user menu item and cannot hold sub menus")]
    NotATreeEntry { text: String },
    /// The registration outlived the side menu that created it.
    #[error("the side menu owning '{text}' has been dropped")]
    MenuDropped { text: String },
}

pub type Result<T, E = SideMenuError> = std::result::Result<T, E>;
