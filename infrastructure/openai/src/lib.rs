pub mod client;
pub mod product_extractor;
pub mod prompt;
pub mod schema;
pub mod structured;
