use tracing::warn;
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::core::library::{ItemKind, LibraryError, LibraryResult};
use crate::items::domain::Item;
use crate::items::dto::ItemDto;

// PhysicalCopy abstracts a printed book; only one holder can borrow it at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalCopy {
    id: String,
    title: String,
    author: String,
    is_available: bool,
    holder: Option<String>,
}

impl PhysicalCopy {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            is_available: true,
            holder: None,
        }
    }

    /// Rebuilds a copy from its stored record. Stored id, availability and holder win
    /// over the defaults of `new`; a record without availability is available unless held.
    pub fn from_record(record: ItemDto) -> LibraryResult<Self> {
        check_identity(&record)?;
        let is_available = record.is_available.unwrap_or(record.holder.is_none());
        Ok(Self {
            id: record.id,
            title: record.title,
            author: record.author,
            is_available,
            holder: record.holder,
        })
    }
}

impl Identifiable for PhysicalCopy {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Item for PhysicalCopy {
    fn kind(&self) -> ItemKind {
        ItemKind::Physical
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn is_available(&self) -> bool {
        self.is_available
    }

    fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    fn describe(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }

    fn acquire(&mut self, holder: &str) -> bool {
        if !self.is_available {
            return false;
        }
        self.is_available = false;
        self.holder = Some(holder.to_string());
        true
    }

    fn release(&mut self) -> bool {
        if self.is_available {
            return false;
        }
        self.is_available = true;
        self.holder = None;
        true
    }
}

// DigitalCopy abstracts an e-book. Downloads never block each other, so only the
// most recent downloader is remembered and availability never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DigitalCopy {
    id: String,
    title: String,
    author: String,
    size_mb: f64,
    is_available: bool,
    holder: Option<String>,
}

impl DigitalCopy {
    pub fn new(title: &str, author: &str, size_mb: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            size_mb,
            is_available: true,
            holder: None,
        }
    }

    /// Rebuilds an e-book from its stored record. Records saved from a blank size field
    /// load with a size of zero; a size that is not finite is rejected.
    pub fn from_record(record: ItemDto) -> LibraryResult<Self> {
        check_identity(&record)?;
        let size_mb = match record.size_mb {
            Some(size) if size.is_finite() => size,
            None => {
                warn!("e-book {} has no size, loading it as 0 MB", record.id);
                0.0
            }
            Some(size) => {
                return Err(LibraryError::validation(
                    format!("e-book {} has no usable size {}", record.id, size).as_str(), None));
            }
        };
        Ok(Self {
            id: record.id,
            title: record.title,
            author: record.author,
            size_mb,
            is_available: record.is_available.unwrap_or(true),
            holder: record.holder,
        })
    }

    pub fn size_mb(&self) -> f64 {
        self.size_mb
    }
}

impl Identifiable for DigitalCopy {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

impl Item for DigitalCopy {
    fn kind(&self) -> ItemKind {
        ItemKind::Digital
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn is_available(&self) -> bool {
        self.is_available
    }

    fn holder(&self) -> Option<&str> {
        self.holder.as_deref()
    }

    fn describe(&self) -> String {
        format!("{} by {} | E-Book ({} MB)", self.title, self.author, self.size_mb)
    }

    fn acquire(&mut self, holder: &str) -> bool {
        self.holder = Some(holder.to_string());
        true
    }

    fn release(&mut self) -> bool {
        if self.holder.is_none() {
            return false;
        }
        self.holder = None;
        true
    }
}

// CatalogItem is one holding of the catalog, dispatched by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Physical(PhysicalCopy),
    Digital(DigitalCopy),
}

impl CatalogItem {
    pub fn physical(title: &str, author: &str) -> Self {
        CatalogItem::Physical(PhysicalCopy::new(title, author))
    }

    pub fn digital(title: &str, author: &str, size_mb: f64) -> Self {
        CatalogItem::Digital(DigitalCopy::new(title, author, size_mb))
    }

    pub fn size_mb(&self) -> Option<f64> {
        match self {
            CatalogItem::Physical(_) => None,
            CatalogItem::Digital(copy) => Some(copy.size_mb()),
        }
    }

    pub fn has_id(&self, id: &str) -> bool {
        match self {
            CatalogItem::Physical(copy) => copy.id == id,
            CatalogItem::Digital(copy) => copy.id == id,
        }
    }

    fn as_item(&self) -> &dyn Item {
        match self {
            CatalogItem::Physical(copy) => copy,
            CatalogItem::Digital(copy) => copy,
        }
    }

    fn as_item_mut(&mut self) -> &mut dyn Item {
        match self {
            CatalogItem::Physical(copy) => copy,
            CatalogItem::Digital(copy) => copy,
        }
    }
}

impl Identifiable for CatalogItem {
    fn id(&self) -> String {
        self.as_item().id()
    }
}

impl Item for CatalogItem {
    fn kind(&self) -> ItemKind {
        self.as_item().kind()
    }

    fn title(&self) -> &str {
        self.as_item().title()
    }

    fn author(&self) -> &str {
        self.as_item().author()
    }

    fn is_available(&self) -> bool {
        self.as_item().is_available()
    }

    fn holder(&self) -> Option<&str> {
        self.as_item().holder()
    }

    fn describe(&self) -> String {
        self.as_item().describe()
    }

    fn acquire(&mut self, holder: &str) -> bool {
        self.as_item_mut().acquire(holder)
    }

    fn release(&mut self) -> bool {
        self.as_item_mut().release()
    }
}

impl TryFrom<ItemDto> for CatalogItem {
    type Error = LibraryError;

    fn try_from(record: ItemDto) -> Result<Self, Self::Error> {
        match record.kind {
            ItemKind::Physical => PhysicalCopy::from_record(record).map(CatalogItem::Physical),
            ItemKind::Digital => DigitalCopy::from_record(record).map(CatalogItem::Digital),
        }
    }
}

fn check_identity(record: &ItemDto) -> LibraryResult<()> {
    if record.id.trim().is_empty() {
        return Err(LibraryError::validation(
            format!("record for {:?} has no id", record.title).as_str(), None));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::ItemKind;
    use crate::items::domain::Item;
    use crate::items::domain::model::{CatalogItem, DigitalCopy, PhysicalCopy};
    use crate::items::dto::ItemDto;

    fn record(kind: ItemKind, is_available: Option<bool>, holder: Option<&str>, size_mb: Option<f64>) -> ItemDto {
        ItemDto {
            id: "id1".to_string(),
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            kind,
            is_available,
            holder: holder.map(str::to_string),
            size_mb,
        }
    }

    #[tokio::test]
    async fn test_should_build_physical() {
        let book = PhysicalCopy::new("Dune", "Frank Herbert");
        assert_eq!("Dune", book.title());
        assert_eq!("Frank Herbert", book.author());
        assert_eq!(ItemKind::Physical, book.kind());
        assert!(book.is_available());
        assert_eq!(None, book.holder());
        assert!(!book.id().is_empty());
        assert_ne!(book.id(), PhysicalCopy::new("Dune", "Frank Herbert").id());
    }

    #[tokio::test]
    async fn test_should_describe() {
        assert_eq!("Dune by Frank Herbert", CatalogItem::physical("Dune", "Frank Herbert").describe());
        assert_eq!("Dune by Frank Herbert | E-Book (2.5 MB)", CatalogItem::digital("Dune", "Frank Herbert", 2.5).describe());
        assert_eq!("Dune by Frank Herbert | E-Book (3 MB)", CatalogItem::digital("Dune", "Frank Herbert", 3.0).describe());
    }

    #[tokio::test]
    async fn test_should_not_borrow_physical_twice() {
        let mut book = CatalogItem::physical("Dune", "Frank Herbert");
        assert!(book.acquire("ann"));
        assert!(!book.acquire("bob"));
        assert_eq!(Some("ann"), book.holder());
        assert!(!book.is_available());
    }

    #[tokio::test]
    async fn test_should_borrow_and_return_physical() {
        let mut book = CatalogItem::physical("Dune", "Frank Herbert");
        assert!(!book.release());
        assert!(book.acquire("ann"));
        assert!(book.release());
        assert!(book.is_available());
        assert_eq!(None, book.holder());
        assert!(!book.release());
    }

    #[tokio::test]
    async fn test_should_download_digital_many_times() {
        let mut ebook = CatalogItem::digital("Dune", "Frank Herbert", 2.5);
        assert!(ebook.acquire("ann"));
        assert!(ebook.acquire("bob"));
        assert_eq!(Some("bob"), ebook.holder());
        assert!(ebook.is_available());
    }

    #[tokio::test]
    async fn test_should_return_digital_once() {
        let mut ebook = CatalogItem::digital("Dune", "Frank Herbert", 2.5);
        assert!(!ebook.release());
        assert!(ebook.acquire("ann"));
        assert!(ebook.release());
        assert_eq!(None, ebook.holder());
        assert!(ebook.is_available());
        assert!(!ebook.release());
    }

    #[tokio::test]
    async fn test_should_rebuild_physical_from_record() {
        let item = CatalogItem::try_from(record(ItemKind::Physical, Some(false), Some("ann"), None)).expect("should rebuild");
        assert_eq!("id1", item.id().as_str());
        assert_eq!(ItemKind::Physical, item.kind());
        assert!(!item.is_available());
        assert_eq!(Some("ann"), item.holder());
        assert_eq!(None, item.size_mb());
    }

    #[tokio::test]
    async fn test_should_keep_stored_availability() {
        // stored state wins even when it disagrees with the holder
        let item = CatalogItem::try_from(record(ItemKind::Physical, Some(false), None, None)).expect("should rebuild");
        assert!(!item.is_available());
        let item = CatalogItem::try_from(record(ItemKind::Physical, None, Some("ann"), None)).expect("should rebuild");
        assert!(!item.is_available());
        let item = CatalogItem::try_from(record(ItemKind::Physical, None, None, None)).expect("should rebuild");
        assert!(item.is_available());
    }

    #[tokio::test]
    async fn test_should_rebuild_digital_from_record() {
        let item = CatalogItem::try_from(record(ItemKind::Digital, Some(true), Some("bob"), Some(4.7))).expect("should rebuild");
        assert_eq!(ItemKind::Digital, item.kind());
        assert_eq!(Some(4.7), item.size_mb());
        assert_eq!(Some("bob"), item.holder());
        assert!(item.is_available());
    }

    #[tokio::test]
    async fn test_should_reject_incomplete_records() {
        assert!(DigitalCopy::from_record(record(ItemKind::Digital, Some(true), None, Some(f64::INFINITY))).is_err());
        assert!(DigitalCopy::from_record(record(ItemKind::Digital, Some(true), None, Some(f64::NAN))).is_err());
        let mut no_id = record(ItemKind::Physical, Some(true), None, None);
        no_id.id = " ".to_string();
        assert!(CatalogItem::try_from(no_id).is_err());
    }

    #[tokio::test]
    async fn test_should_load_digital_without_size() {
        let item = DigitalCopy::from_record(record(ItemKind::Digital, Some(true), Some("ann"), None))
            .expect("should rebuild");
        assert_eq!(0.0, item.size_mb());
        assert_eq!(Some("ann"), item.holder());
    }

    #[tokio::test]
    async fn test_should_match_id() {
        let item = CatalogItem::physical("Dune", "Frank Herbert");
        assert!(item.has_id(item.id().as_str()));
        assert!(!item.has_id("other"));
    }
}
