//! Export writers for generated blog content
//!
//! Two encodings are produced: the raw markdown returned by the provider,
//! and an HTML document that wraps the same text in a fixed template. The
//! HTML substitution is literal; the markdown is not rendered.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::ComposerResult;
use crate::types::GeneratedBlog;
use shared::BlogRequest;

/// Fixed HTML shell for the HTML export
const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body { max-width: 720px; margin: 2rem auto; padding: 0 1rem; font-family: Georgia, 'Times New Roman', serif; line-height: 1.6; color: #222; }
  h1 { font-family: Helvetica, Arial, sans-serif; }
  .blog-content { white-space: pre-wrap; }
</style>
</head>
<body>
<h1>{title}</h1>
<div class="blog-content">{content}</div>
</body>
</html>
"#;

/// Render the HTML export document
///
/// Title is substituted before content so placeholder-like text inside the
/// generated markdown is left untouched.
pub fn html_document(title: &str, markdown: &str) -> String {
    HTML_TEMPLATE
        .replace("{title}", title)
        .replace("{content}", markdown)
}

/// Sanitize a title or topic for use as an export file stem
///
/// Removes special characters and converts to lowercase with underscores.
pub fn sanitize_file_stem(name: &str) -> String {
    let stem = name
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join("_");

    if stem.is_empty() {
        "generated_blog".to_string()
    } else {
        stem
    }
}

/// Title shown in the HTML export and used for file naming
///
/// Prefers the first markdown heading of the content, then the requested
/// title, then the topic.
pub fn display_title(request: &BlogRequest, blog: &GeneratedBlog) -> String {
    blog.content
        .lines()
        .find_map(|line| line.strip_prefix("# ").map(|heading| heading.trim().to_string()))
        .filter(|heading| !heading.is_empty())
        .or_else(|| request.title.clone().filter(|title| !title.trim().is_empty()))
        .unwrap_or_else(|| request.topic.clone())
}

/// Write the markdown export, and optionally the HTML export, into `dir`
///
/// Returns the paths written, markdown first.
pub async fn write_exports(
    dir: &Path,
    request: &BlogRequest,
    blog: &GeneratedBlog,
    include_html: bool,
) -> ComposerResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).await?;

    let title = display_title(request, blog);
    let stem = sanitize_file_stem(&title);
    let mut written = Vec::new();

    let markdown_path = dir.join(format!("{stem}.md"));
    fs::write(&markdown_path, &blog.content).await?;
    written.push(markdown_path);

    if include_html {
        let html_path = dir.join(format!("{stem}.html"));
        fs::write(&html_path, html_document(&title, &blog.content)).await?;
        written.push(html_path);
    }

    Ok(written)
}
