use html_escape::{encode_double_quoted_attribute, encode_text};
use std::borrow::Cow;

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: linear-gradient(#eff6ff, #fff); min-height: 100vh; color: #1e3a8a; }
main { max-width: 64rem; margin: 0 auto; padding: 3rem 1rem; }
h1 { text-align: center; }
form { max-width: 40rem; margin: 0 auto; background: #fff; border-radius: 1rem; padding: 2rem; box-shadow: 0 10px 25px rgba(0,0,0,.1); }
label { display: block; font-weight: 500; margin: 1rem 0 .5rem; }
input, select { width: 100%; padding: .75rem 1rem; border-radius: .75rem; border: 1px solid #bfdbfe; box-sizing: border-box; }
button { width: 100%; margin-top: 1.5rem; padding: .75rem; border: 0; border-radius: .75rem; background: #2563eb; color: #fff; font-size: 1.1rem; }
button:disabled { background: #bfdbfe; color: #60a5fa; cursor: not-allowed; }
.button { display: inline-block; background: #2563eb; color: #fff; padding: .75rem 1.5rem; border-radius: .75rem; text-decoration: none; }
.panel, .error-boundary { text-align: center; padding: 3rem 0; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 2rem; }
.recipe-card { background: #fff; border-radius: 1rem; overflow: hidden; box-shadow: 0 4px 12px rgba(0,0,0,.1); text-decoration: none; color: inherit; transition: transform .3s; }
.recipe-card:hover { transform: translateY(-4px); }
.recipe-card img { width: 100%; height: 14rem; object-fit: cover; }
.recipe-card h2 { padding: 0 1.5rem; }
.hero { position: relative; height: 24rem; }
.hero img { width: 100%; height: 100%; object-fit: cover; }
.hero h1 { position: absolute; bottom: 1.5rem; left: 1.5rem; right: 1.5rem; color: #fff; text-align: left; }
.summary { display: grid; grid-template-columns: 1fr 1fr; text-align: center; background: #eff6ff; border-radius: .75rem; padding: 1.5rem; }
.ingredients li { background: #eff6ff; margin: .5rem 0; padding: .75rem; border-radius: .5rem; color: #000; list-style: none; }
"#;

/// Wrap a body fragment in the shared document shell
pub fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>
"#,
        title = text(title),
    )
}

/// Escape for element content
pub fn text(s: &str) -> Cow<'_, str> {
    encode_text(s)
}

/// Escape for a double-quoted attribute value
pub fn attr(s: &str) -> Cow<'_, str> {
    encode_double_quoted_attribute(s)
}

/// Link back to the search form
pub fn back_to_search(label: &str) -> String {
    format!(r#"<a class="button" href="/">{}</a>"#, text(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_escapes_title() {
        let html = page("<script>", "<p>body</p>");
        assert!(html.contains("<title>&lt;script&gt;</title>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_attr_escapes_quotes() {
        assert_eq!(attr(r#"a"b"#), "a&quot;b");
    }
}
