use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;

pub mod model;

// Item is the behavior shared by every holding in the catalog
pub trait Item: Identifiable {
    fn kind(&self) -> ItemKind;
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn is_available(&self) -> bool;
    fn holder(&self) -> Option<&str>;

    /// Display text combining title and author, plus any kind specific detail.
    fn describe(&self) -> String;

    /// Borrows (physical) or downloads (digital) the item for `holder`.
    /// Returns false when the transition is not allowed; the item is then unchanged.
    fn acquire(&mut self, holder: &str) -> bool;

    /// Returns the item. Returns false when there is nothing to return.
    fn release(&mut self) -> bool;
}
