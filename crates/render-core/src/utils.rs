use crate::error::RenderError;

/// Escapes text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    handlebars::html_escape(text)
}

/// Escapes LaTeX special characters in running text.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' | '}' | '#' | '$' | '%' | '&' | '_' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Checks an image path for `\includegraphics`. Comment, parameter and
/// group characters cannot be escaped inside a file name.
pub fn latex_path(uri: &str) -> Result<&str, RenderError> {
    if uri.contains(['%', '#', '{', '}', '\\']) {
        return Err(RenderError::UnsafePath(uri.to_string()));
    }
    Ok(uri)
}

/// Escapes one line of roff text for man pages.
pub fn escape_man(line: &str) -> String {
    let escaped = line.replace('\\', "\\e");
    // Lines starting with a control character would be read as requests.
    if escaped.starts_with('.') || escaped.starts_with('\'') {
        format!("\\&{}", escaped)
    } else {
        escaped
    }
}

/// An element id derived from a reference name, e.g. `My Figure` -> `my-figure`.
pub fn element_id(name: &str) -> String {
    slug::slugify(name)
}
