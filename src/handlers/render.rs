use std::fs;
use crate::errors::{AppError, AppResult};

pub fn load_template(name: &str) -> AppResult<String> {
    fs::read_to_string(format!("templates/{}", name)).map_err(|e| {
        tracing::error!("Failed to read template {}: {}", name, e);
        AppError::File(e)
    })
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// Cells are escaped here, callers pass raw text
pub fn html_table<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let head = headers
        .iter()
        .map(|h| format!("<th>{}</th>", escape_html(h)))
        .collect::<String>();
    let body = rows
        .into_iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|c| format!("<td>{}</td>", escape_html(c)))
                .collect::<String>();
            format!("<tr>{}</tr>", cells)
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "<table>\n<thead><tr>{}</tr></thead>\n<tbody>\n{}\n</tbody>\n</table>",
        head, body
    )
}

pub fn select_options<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(|v| {
            let v = escape_html(v);
            format!(r#"<option value="{}">{}</option>"#, v, v)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Success or error banner from ?message= / ?error=
pub fn notice(message: Option<&str>, error: Option<&str>) -> String {
    match (error, message) {
        (Some(e), _) if !e.is_empty() => format!(r#"<p class="error">{}</p>"#, escape_html(e)),
        (_, Some(m)) if !m.is_empty() => format!(r#"<p class="success">{}</p>"#, escape_html(m)),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b>"R&D"</b>"#), "&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_html_table_escapes_cells() {
        let table = html_table(&["Task", "Status"], vec![vec!["<pump>".to_string(), "Pending".to_string()]]);
        assert!(table.contains("<th>Task</th><th>Status</th>"));
        assert!(table.contains("<tr><td>&lt;pump&gt;</td><td>Pending</td></tr>"));
    }

    #[test]
    fn test_notice_prefers_error() {
        assert_eq!(notice(Some("ok"), Some("bad")), r#"<p class="error">bad</p>"#);
        assert_eq!(notice(Some("ok"), None), r#"<p class="success">ok</p>"#);
        assert_eq!(notice(None, Some("")), "");
    }
}
