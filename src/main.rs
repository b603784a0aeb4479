mod link_extractor;
mod report;

use std::collections::HashSet;
use std::io::{self, Write};

use link_extractor::{LinkExtractor, Page};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// The URL to audit; prompts interactively when omitted
    #[arg(short, long)]
    url: Option<String>,
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Cli::try_parse();
    match args {
        Ok(args) => {
            if let Some(log_level) = args.log_level {
                tracing_subscriber::fmt()
                    .with_env_filter(format!("digurl={}", log_level))
                    .compact()
                    .init();
            }

            let mut page = Page::new(reqwest::Client::new());
            match args.url {
                Some(url) => audit(&mut page, &url).await,
                None => prompt_loop(&mut page).await,
            }
        }
        Err(e) => println!("{}", e.to_string()),
    }
}

async fn prompt_loop<T: LinkExtractor>(extractor: &mut T) {
    loop {
        print!("\nEnter a URL (eg. https://www.domain.com) or press the [x] key to Exit: ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => (),
        }
        let url = line.trim();
        if url.eq_ignore_ascii_case("x") {
            break;
        }
        audit(extractor, url).await;
    }
}

async fn audit<T: LinkExtractor>(extractor: &mut T, url: &str) {
    let links = gather_links(extractor, url).await;

    println!("----------------------------");
    for link in &links {
        println!("{}", link);
    }

    match report::write_report(&links, url) {
        Ok(path) => println!("\nLinks saved to {}", path.display()),
        Err(err) => eprintln!("{}", err),
    }
}

/// A failed fetch degrades to "no links found" so the audit still
/// produces a (possibly empty) report.
async fn gather_links<T: LinkExtractor>(extractor: &mut T, url: &str) -> HashSet<String> {
    match extractor.extract(url).await {
        Ok(links) => links,
        Err(err) => {
            println!("An error occurred: {}", err);
            HashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link_extractor::FetchError;
    use std::future::Future;

    #[derive(Clone)]
    struct MockExtractor {
        response: Result<HashSet<String>, FetchError>,
    }

    impl LinkExtractor for MockExtractor {
        fn extract(
            &mut self,
            _url: &str,
        ) -> impl Future<Output = Result<HashSet<String>, FetchError>> + Send {
            let response = self.response.clone();
            async move { response }
        }
    }

    #[tokio::test]
    async fn gather_links_passes_discovered_links_through() {
        let links: HashSet<String> = ["https://a.com", "https://b.com"]
            .iter()
            .map(|l| l.to_string())
            .collect();
        let mut extractor = MockExtractor {
            response: Ok(links.clone()),
        };
        assert_eq!(
            gather_links(&mut extractor, "https://example.com").await,
            links
        );
    }

    #[tokio::test]
    async fn gather_links_collapses_a_status_failure_to_an_empty_set() {
        let mut extractor = MockExtractor {
            response: Err(FetchError::Status(404)),
        };
        assert_eq!(
            gather_links(&mut extractor, "https://example.com").await,
            HashSet::new()
        );
    }

    #[tokio::test]
    async fn gather_links_collapses_a_transport_failure_to_an_empty_set() {
        let mut extractor = MockExtractor {
            response: Err(FetchError::Transport("dns failure".to_string())),
        };
        assert_eq!(
            gather_links(&mut extractor, "https://example.com").await,
            HashSet::new()
        );
    }
}
