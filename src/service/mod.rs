//! Content operations and the landing page aggregation, over a `ContentStore`.

mod content;
mod landing;
pub mod ordering;
mod validation;

pub use content::ContentService;
pub use validation::RequestValidator;
