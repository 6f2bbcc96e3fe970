//! Server-rendered HTML for the login prompt.

use crate::oauth::authorize::AuthorizationRequest;

/// Renders the login form for a validated authorization request.
///
/// The authorization parameters are echoed as hidden fields so the login
/// submission carries the same values the authorize request was validated
/// with. All echoed values are HTML-escaped.
#[must_use]
pub fn render_login_form(request: &AuthorizationRequest) -> String {
    let mut hidden = String::new();
    push_hidden(&mut hidden, "client_id", &request.client_id);
    push_hidden(&mut hidden, "response_type", &request.response_type);
    push_hidden(&mut hidden, "redirect_uri", &request.redirect_uri);
    if let Some(state) = &request.state {
        push_hidden(&mut hidden, "state", state);
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Sign in</title>
</head>
<body>
    <h1>Sign in to continue</h1>
    <form method="post" action="/login">
{hidden}        <label for="email">Email</label>
        <input type="email" id="email" name="email" required autofocus>
        <label for="password">Password</label>
        <input type="password" id="password" name="password" required>
        <button type="submit">Sign in</button>
    </form>
</body>
</html>
"#
    )
}

fn push_hidden(out: &mut String, name: &str, value: &str) {
    out.push_str("        <input type=\"hidden\" name=\"");
    out.push_str(name);
    out.push_str("\" value=\"");
    out.push_str(&html_escape(value));
    out.push_str("\">\n");
}

/// Escapes a value for safe embedding in an HTML attribute.
fn html_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
