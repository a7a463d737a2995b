use crate::app::{AppContext, Result};
use crate::domain::NewsArticle;

/// One-shot sync: fetch the remote collection, refresh the cache, and print
/// the first page.
pub async fn fetch(ctx: &AppContext, page_size: u32) -> Result<()> {
    let repo = ctx.repository();
    let articles = repo.get_news(1, page_size).await?;

    if articles.is_empty() {
        println!("No articles available");
        return Ok(());
    }

    println!("Fetched {} articles:", articles.len());
    for article in &articles {
        print_article_line(article);
    }

    Ok(())
}

/// Print one cached page without touching the network. `page` is 1-based;
/// anything below that reads the first page.
pub fn list(ctx: &AppContext, page: u32, page_size: u32) -> Result<()> {
    use crate::store::CacheStore;

    let offset = page.saturating_sub(1) * page_size;
    let articles = ctx.store.read_page(offset, page_size)?;

    if articles.is_empty() {
        println!("No cached articles on page {}", page);
        return Ok(());
    }

    for article in &articles {
        print_article_line(article);
    }

    Ok(())
}

fn print_article_line(article: &NewsArticle) {
    let origin = if article.is_local { "local" } else { "wire" };
    println!(
        "  [{}] {} by {} ({}, {})",
        article.id,
        article.title,
        article.author,
        article.published_date(),
        origin
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CacheStore;

    fn article(id: i64) -> NewsArticle {
        NewsArticle {
            id,
            title: format!("Title {}", id),
            description: "d".into(),
            author: "a".into(),
            is_local: false,
            published_at_unix: 1_748_107_452_000,
            media: None,
        }
    }

    #[test]
    fn test_list_page_below_one_reads_first_page() {
        let ctx = AppContext::in_memory().unwrap();
        let batch: Vec<NewsArticle> = (1..=3).map(article).collect();
        ctx.store.upsert(&batch).unwrap();

        // Must not underflow the offset computation
        list(&ctx, 0, 5).unwrap();
        list(&ctx, 1, 5).unwrap();
    }

    #[test]
    fn test_list_empty_cache() {
        let ctx = AppContext::in_memory().unwrap();
        list(&ctx, 1, 5).unwrap();
        list(&ctx, 4, 5).unwrap();
    }
}
