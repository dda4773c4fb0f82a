use serde::Serialize;
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::items::domain::Item;
use crate::items::domain::model::CatalogItem;

pub const EMPTY_CATALOG: &str = "No books in the library.";

// ItemAction is the primary button offered on an item card; remove is always offered
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum ItemAction {
    Borrow,
    Download,
    Return,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub kind: ItemKind,
    pub size_mb: Option<f64>,
    pub description: String,
    pub status: String,
    pub primary_action: ItemAction,
}

// CatalogView is a full snapshot the presentation layer renders from
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct CatalogView {
    pub items: Vec<ItemView>,
    pub placeholder: Option<String>,
}

pub fn render(items: &[CatalogItem]) -> CatalogView {
    CatalogView {
        items: items.iter().map(render_item).collect(),
        placeholder: if items.is_empty() { Some(EMPTY_CATALOG.to_string()) } else { None },
    }
}

pub fn render_item(item: &CatalogItem) -> ItemView {
    let (status, primary_action) = match (item.kind(), item.holder()) {
        (ItemKind::Physical, _) if item.is_available() => ("Available".to_string(), ItemAction::Borrow),
        (ItemKind::Physical, holder) => (format!("Borrowed by {}", holder.unwrap_or_default()), ItemAction::Return),
        (ItemKind::Digital, None) => ("Available".to_string(), ItemAction::Download),
        (ItemKind::Digital, Some(holder)) => (format!("Downloaded by {}", holder), ItemAction::Return),
    };
    ItemView {
        id: item.id(),
        title: item.title().to_string(),
        author: item.author().to_string(),
        kind: item.kind(),
        size_mb: item.size_mb(),
        description: item.describe(),
        status,
        primary_action,
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::view::{render, render_item, ItemAction, EMPTY_CATALOG};
    use crate::core::domain::Identifiable;
    use crate::items::domain::Item;
    use crate::items::domain::model::CatalogItem;

    #[tokio::test]
    async fn test_should_render_placeholder() {
        let view = render(&[]);
        assert!(view.items.is_empty());
        assert_eq!(Some(EMPTY_CATALOG.to_string()), view.placeholder);
    }

    #[tokio::test]
    async fn test_should_render_physical() {
        let mut book = CatalogItem::physical("Emma", "Jane Austen");
        let view = render_item(&book);
        assert_eq!(book.id(), view.id);
        assert_eq!("Emma by Jane Austen", view.description.as_str());
        assert_eq!("Available", view.status.as_str());
        assert_eq!(ItemAction::Borrow, view.primary_action);

        book.acquire("ann");
        let view = render_item(&book);
        assert_eq!("Borrowed by ann", view.status.as_str());
        assert_eq!(ItemAction::Return, view.primary_action);
    }

    #[tokio::test]
    async fn test_should_render_digital() {
        let mut ebook = CatalogItem::digital("Dune", "Frank Herbert", 3.1);
        let view = render_item(&ebook);
        assert_eq!("Available", view.status.as_str());
        assert_eq!(ItemAction::Download, view.primary_action);
        assert_eq!(Some(3.1), view.size_mb);

        ebook.acquire("bob");
        let view = render_item(&ebook);
        assert_eq!("Downloaded by bob", view.status.as_str());
        assert_eq!(ItemAction::Return, view.primary_action);
    }

    #[tokio::test]
    async fn test_should_render_in_catalog_order() {
        let items = vec![CatalogItem::digital("Dune", "Frank Herbert", 3.1), CatalogItem::physical("Emma", "Jane Austen")];
        let view = render(&items);
        assert_eq!(None, view.placeholder);
        assert_eq!(vec![items[0].id(), items[1].id()], view.items.iter().map(|i| i.id.clone()).collect::<Vec<_>>());
    }
}
