//! Server-rendered markup. Views are plain functions from data to HTML
//! strings; every piece of user data goes through [`escape`] (text and
//! attributes) or [`path_segment`] (hrefs) on the way in.

pub mod error_boundary;
pub mod notes;
pub mod user;

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn path_segment(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

/// Joins the class names that are present, skipping empty ones.
pub fn cn<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    classes
        .into_iter()
        .flatten()
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn document(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape(title),
    )
}
