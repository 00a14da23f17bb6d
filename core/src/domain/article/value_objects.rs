/// Fields matched by the article search term
pub const ARTICLE_SEARCHABLE: &[&str] = &["title", "body", "author.name", "comments.body"];

/// Columns clients may pass as `orderBy`
pub const ARTICLE_SORTABLE: &[&str] = &["title", "views", "created_at"];

/// Views from which an article counts as popular
pub const POPULAR_VIEWS: i64 = 1000;

/// Largest page a client may ask for
pub const MAX_PER_PAGE: u64 = 100;
