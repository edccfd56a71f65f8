// src/ui/html.rs
use std::fmt::Write;

/// Escape `& < > " '` so user or API text is never read as markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Warning,
    Info,
    Success,
}

impl AlertKind {
    fn colors(self) -> (&'static str, &'static str) {
        match self {
            AlertKind::Error => ("#fdecea", "#b71c1c"),
            AlertKind::Warning => ("#fff8e1", "#8a6d00"),
            AlertKind::Info => ("#e8f0fe", "#0b4a8b"),
            AlertKind::Success => ("#e8f5e9", "#1b5e20"),
        }
    }

    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "alert-error",
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
            AlertKind::Success => "alert-success",
        }
    }
}

/// A one-line status box. `text` is escaped here.
pub fn alert(kind: AlertKind, text: &str) -> String {
    let (bg, fg) = kind.colors();
    format!(
        "<div class='alert {}' style='padding: 10px 14px; margin: 8px 0; border-radius: 6px; background-color: {bg}; color: {fg};'>{}</div>",
        kind.class(),
        escape(text)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Neutral box: initial placeholder and same-language echo.
    Plain,
    Placeholder,
    Success,
}

/// The styled translation output region. `text` is escaped here.
pub fn output_box(style: OutputStyle, text: &str) -> String {
    let (border, background, extra) = match style {
        OutputStyle::Plain => ("#ddd", "#f9f9f9", ""),
        OutputStyle::Placeholder => ("#ddd", "#f9f9f9", " color: #aaa;"),
        OutputStyle::Success => ("#4CAF50", "#e8f5e9", " font-size: 1.05em;"),
    };
    format!(
        "<div class='output' style='padding: 15px; border: 1px solid {border}; border-radius: 8px; background-color: {background}; min-height: 200px; overflow-wrap: break-word; white-space: pre-wrap;{extra}'><strong>{}</strong></div>",
        escape(text)
    )
}

/// `<option>` list with `selected` marked. Values are display names.
pub fn options<'a>(items: impl IntoIterator<Item = &'a str>, selected: &str) -> String {
    let mut out = String::new();
    for item in items {
        let sel = if item == selected { " selected" } else { "" };
        let item = escape(item);
        let _ = write!(out, "<option value=\"{item}\"{sel}>{item}</option>");
    }
    out
}

/// Wrap a body in a full document. `title` is escaped; `body` is trusted markup.
pub fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang='en'>\n<head>\n<meta charset='utf-8'>\n<title>{title}</title>\n\
         <style>body {{ font-family: sans-serif; margin: 0; }} main {{ max-width: 1100px; margin: 0 auto; padding: 24px; }} \
         textarea, input[type=text], select {{ width: 100%; box-sizing: border-box; padding: 8px; margin: 4px 0 12px; }} \
         button {{ padding: 10px 20px; border: none; border-radius: 6px; background-color: #0084ff; color: white; font-weight: bold; cursor: pointer; }} \
         .columns {{ display: flex; gap: 24px; }} .columns > section {{ flex: 1; }} \
         aside {{ width: 280px; padding: 16px; background: #f5f6f8; }} .layout {{ display: flex; }}</style>\n\
         </head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}
