// ASCVD risk calculation library
// Pooled Cohort Equations (10-year risk) plus lifetime-risk categorization

pub mod models;
pub mod risk;

// Re-export main types
pub use models::*;
pub use risk::*;
