use crate::types::bookmark::NewBookmark;

/// Trait defining the entry-form interface.
pub trait FormManagerTrait {
    fn set_fields(&mut self, title: &str, url: &str, tags: &str);
    fn draft(&self) -> NewBookmark;
    fn clear(&mut self);
    fn is_empty(&self) -> bool;
}

/// The three-field bookmark entry form: title, url, tags.
///
/// Values are stored exactly as entered (empty or malformed values included)
/// and are only cleared after a successful create, so a failed submission
/// leaves them in place for retry.
#[derive(Debug, Default)]
pub struct FormManager {
    title: String,
    url: String,
    tags: String,
}

impl FormManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormManagerTrait for FormManager {
    fn set_fields(&mut self, title: &str, url: &str, tags: &str) {
        self.title = title.to_string();
        self.url = url.to_string();
        self.tags = tags.to_string();
    }

    /// Read the current field values as a create payload, as-is.
    fn draft(&self) -> NewBookmark {
        NewBookmark {
            title: self.title.clone(),
            url: self.url.clone(),
            tags: self.tags.clone(),
        }
    }

    fn clear(&mut self) {
        self.title.clear();
        self.url.clear();
        self.tags.clear();
    }

    fn is_empty(&self) -> bool {
        self.title.is_empty() && self.url.is_empty() && self.tags.is_empty()
    }
}
