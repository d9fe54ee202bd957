//! Server-rendered HTML pages.
//!
//! Pages are assembled with `format!`; every interpolated value goes through
//! [`escape_html`].

pub mod form;
pub mod list;

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{title} | Student Marks</title>
  <link rel="stylesheet" href="/public/css/style.css"/>
</head>
<body>
  <header class="topbar">
    <a class="brand" href="/">Student Marks</a>
    <nav><a href="/">All Students</a> <a href="/students/add">Add Student</a></nav>
  </header>
  <main class="container">
    <h1>{title}</h1>
{body}
  </main>
  <script src="/public/js/app.js"></script>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_layout_escapes_title() {
        let html = layout("<x>", "<p>body</p>");
        assert!(html.contains("<h1>&lt;x&gt;</h1>"));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("/public/js/app.js"));
    }
}
