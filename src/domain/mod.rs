pub mod article;

pub use article::{Media, NewsArticle};
