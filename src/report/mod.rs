use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Network location of a URL: host, plus the port when one is
/// explicitly present. Unparseable or host-less input yields an
/// empty string rather than an error.
pub fn netloc(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            _ => String::new(),
        },
        Err(_) => String::new(),
    }
}

pub fn report_file_name(url: &str) -> String {
    format!("digURL-{}.html", netloc(url))
}

/// Write the discovered links as a clickable HTML report in the
/// current working directory, named after the page's domain.
/// An existing report for the same domain is overwritten.
pub fn write_report(links: &HashSet<String>, url: &str) -> Result<PathBuf, ReportError> {
    write_report_at(Path::new(&report_file_name(url)), links)
}

fn write_report_at(path: &Path, links: &HashSet<String>) -> Result<PathBuf, ReportError> {
    let mut file = File::create(path)?;
    writeln!(file, "<html><head><title>CheckWeb Report</title></head><body>")?;
    for link in links {
        writeln!(file, r#"<a href="{}">{}</a><br>"#, link, link)?;
    }
    write!(file, "</body></html>")?;
    Ok(path.to_path_buf())
}
