use std::collections::HashSet;
use std::future::Future;

use super::{page_fetcher::FetchError, PageFetcher};
use scraper::{Html, Selector};

pub trait LinkExtractor: Send + Sync + Clone {
    fn extract(
        &mut self,
        url: &str,
    ) -> impl Future<Output = Result<HashSet<String>, FetchError>> + Send;
}

/// A hyperlink qualifies for the report when it is an absolute
/// http/https target and not a retina image asset.
fn qualifies(href: &str) -> bool {
    !href.is_empty()
        && href.starts_with("http")
        && !href.contains("@2x.png")
        && !href.contains("@2x.png.webp")
}

#[derive(Clone, Debug)]
pub struct Page<T = reqwest::Client> {
    client: T,
}

impl<T: PageFetcher + Clone> Page<T> {
    pub fn new(client: T) -> Self {
        Page { client }
    }
}

impl<T: PageFetcher + Clone + Send + Sync> LinkExtractor for Page<T> {
    #[tracing::instrument(skip(self))]
    fn extract(
        &mut self,
        url: &str,
    ) -> impl Future<Output = Result<HashSet<String>, FetchError>> + Send {
        async move {
            let url = url.to_string();

            match self.client.fetch_page(&url).await {
                Ok(text) => {
                    let html = Html::parse_document(&text);
                    tracing::info!("Page content parsed");
                    let links = html
                        .select(&Selector::parse("a").unwrap())
                        .into_iter()
                        .flat_map(|f| match f.attr("href") {
                            Some(href) if qualifies(href) => vec![href.to_string()],
                            _ => vec![],
                        })
                        .collect::<HashSet<_>>();
                    tracing::info!("Found {} hyperlinks", links.len());
                    tracing::debug!("Hyperlinks {:?}", links);
                    Ok(links)
                }
                Err(err) => Err(err),
            }
        }
    }
}
