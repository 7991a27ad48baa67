use anyhow::Result;
use tera::{Context, Tera};

const INDEX_TEMPLATE_NAME: &str = "index.html";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Local Command Runner</title>
  <style>
    body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; }
    input[type=text] { width: 100%; font-family: monospace; padding: .4rem; }
    pre { background: #f4f4f4; padding: .8rem; min-height: 4rem; white-space: pre-wrap; }
  </style>
</head>
<body>
  <h1>Local Command Runner</h1>
  <p>Run local shell commands with restricted permissions. Only specific safe commands are allowed.</p>
  <form method="post" action="/">
    <label for="command">Enter Command</label>
    <input type="text" id="command" name="command" value="{{ command }}"
           placeholder="Only allowed commands: {{ allowed }}" autofocus>
    <button type="submit">Submit</button>
  </form>
  <h2>Command Output</h2>
  <pre id="output">{{ output }}</pre>
</body>
</html>
"#;

/// The single form page. HTML-escapes everything it interpolates.
pub struct FormPage {
    tera: Tera,
    allowed: String,
}

impl FormPage {
    pub fn new(allowed: String) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { tera, allowed })
    }

    pub fn render(&self, command: &str, output: &str) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("allowed", &self.allowed);
        ctx.insert("command", command);
        ctx.insert("output", output);
        Ok(self.tera.render(INDEX_TEMPLATE_NAME, &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> FormPage {
        FormPage::new("echo, ls".into()).unwrap()
    }

    #[test]
    fn empty_page_has_labels_and_placeholder() {
        let html = page().render("", "").unwrap();
        assert!(html.contains("Local Command Runner"));
        assert!(html.contains("Enter Command"));
        assert!(html.contains("Command Output"));
        assert!(html.contains("Only allowed commands: echo, ls"));
    }

    #[test]
    fn output_and_input_are_escaped() {
        let html = page()
            .render("echo \"<b>\"", "<script>alert(1)</script>")
            .unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;&lt;b&gt;&quot;"));
    }
}
