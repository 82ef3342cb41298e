//! The static landing page: a search box wired to the JSON API.

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Precedent Finder</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 3rem auto; padding: 0 1rem; }
    input[type=search] { width: 100%; padding: .6rem; font-size: 1.1rem; }
    .result { border-bottom: 1px solid #ddd; padding: .8rem 0; }
    .result h3 { margin: 0 0 .2rem; }
    .meta { color: #555; font-size: .9rem; }
    .error { color: #a00; }
  </style>
</head>
<body>
  <h1>Precedent Finder</h1>
  <p>Search the catalogue of legal precedents by title, description,
  keywords, case number, section, or article.</p>
  <input type="search" id="q" placeholder="e.g. judicial review" autofocus>
  <div id="out"></div>
  <script>
    const q = document.getElementById('q');
    const out = document.getElementById('out');
    let timer = null;
    q.addEventListener('input', () => {
      clearTimeout(timer);
      timer = setTimeout(run, 250);
    });
    async function run() {
      const term = q.value.trim();
      if (term.length < 2) { out.innerHTML = ''; return; }
      const resp = await fetch('/api/search?q=' + encodeURIComponent(term));
      const data = await resp.json();
      if (!resp.ok) {
        out.innerHTML = '<p class="error">' + data.error + '</p>';
        return;
      }
      out.innerHTML = '<p class="meta">' + data.total + ' result(s)</p>' +
        data.results.map(r =>
          '<div class="result"><h3>' + r.title + '</h3>' +
          '<div class="meta">' + r.case_number + ' — ' + r.court +
          ', ' + r.year + '</div><p>' + r.description + '</p></div>'
        ).join('');
    }
  </script>
</body>
</html>
"#;

/// `GET /`
pub async fn landing() -> Html<&'static str> { Html(INDEX_HTML) }
