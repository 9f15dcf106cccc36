use serde::{Deserialize, Serialize};

/// Fixed pool of stock-photo identifiers attached to news cards.
const IMAGE_POOL: [&str; 12] = [
    "1611974717482-482436d412e0",
    "1591696208162-a9973f7425ed",
    "1554224155-8d04182258f5",
    "1590283603385-17ffb3a7f29f",
    "1611974717482-482436d412e0",
    "1526303328154-3259b6010417",
    "1460925895917-afdab827c52f",
    "1535320903710-d993d3d77d29",
    "1518186285589-2f7649de83e0",
    "1559526324-4b87b5e36e44",
    "1551288049-bbbda50a1def",
    "1563986768609-322da13575f3",
];

/// Number of distinct image slots before references repeat.
pub const IMAGE_POOL_SIZE: usize = IMAGE_POOL.len();

/// Image reference for the news item at `position` within a batch.
///
/// Depends only on the position (`position mod pool size`), never on content,
/// so the same slot always renders the same picture.
pub fn image_for_position(position: usize) -> String {
    let id = IMAGE_POOL[position % IMAGE_POOL_SIZE];
    format!("https://images.unsplash.com/photo-{id}?q=80&w=600&auto=format&fit=crop")
}

/// One news story as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique within a fetched batch.
    pub id: String,
    pub title: String,
    /// Two-line summary.
    pub summary: String,
    pub source: String,
    /// Publish date as reported by the source (free-form display string).
    pub date: String,
    pub image_url: String,
}
