use axum::response::Html;

/// API 文档首页（静态页面）。交互式文档见 `/docs`。
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>notable API</title>
  <style>
    body { font-family: sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; }
    code { background: #f2f2f2; padding: 0.1rem 0.3rem; border-radius: 3px; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
  </style>
</head>
<body>
  <h1>notable API</h1>
  <p>A small CRUD note-taking service with username/password registration
  and login. Interactive documentation lives at <a href="/docs">/docs</a>.</p>

  <h2>Notes</h2>
  <table>
    <tr><th>Method</th><th>Path</th><th>Body</th><th>Description</th></tr>
    <tr><td>GET</td><td><code>/notes</code></td><td>&mdash;</td><td>List all notes</td></tr>
    <tr><td>POST</td><td><code>/notes</code></td><td><code>{"title", "content", "user_id"?}</code></td><td>Create a note (returns the new id)</td></tr>
    <tr><td>GET</td><td><code>/notes/{id}</code></td><td>&mdash;</td><td>Fetch one note</td></tr>
    <tr><td>PUT</td><td><code>/notes/{id}</code></td><td><code>{"title"?, "content"?}</code></td><td>Partially update a note</td></tr>
    <tr><td>DELETE</td><td><code>/notes/{id}</code></td><td>&mdash;</td><td>Delete a note</td></tr>
  </table>

  <h2>Auth</h2>
  <table>
    <tr><th>Method</th><th>Path</th><th>Body</th><th>Description</th></tr>
    <tr><td>POST</td><td><code>/register</code></td><td><code>{"username", "password"}</code></td><td>Register a new user</td></tr>
    <tr><td>POST</td><td><code>/login</code></td><td><code>{"username", "password"}</code></td><td>Verify credentials</td></tr>
  </table>

  <p><code>created_on</code> timestamps are rendered as
  <code>YYYY-MM-DD HH:MM:SS</code> in UTC.</p>
</body>
</html>
"#;
