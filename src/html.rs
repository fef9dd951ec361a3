//! The HTML shell that hosts the client.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::endpoints;

const STYLE: &str = r#"
body {
    font-family: system-ui, sans-serif;
    background: #f4f6f8;
    color: #222;
    margin: 0;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    padding: 1.5rem;
}

.form-container,
.balance-container,
.table-container {
    background: #fff;
    border-radius: 8px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    padding: 1rem 1.5rem;
    margin-bottom: 1.5rem;
}

.form-group {
    display: flex;
    flex-direction: column;
    margin-bottom: 0.75rem;
}

.select-with-add {
    display: flex;
    gap: 0.5rem;
}

.select-with-add select {
    flex: 1;
}

.form-actions {
    display: flex;
    gap: 0.5rem;
}

button:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

table {
    width: 100%;
    border-collapse: collapse;
}

th,
td {
    padding: 0.5rem;
    border-bottom: 1px solid #e2e2e2;
    text-align: left;
}

td.receita {
    color: green;
}

td.despesa {
    color: red;
}

.btn-edit,
.btn-delete {
    background: transparent;
    border: none;
    cursor: pointer;
}
"#;

/// The page served at the root. It loads the WebAssembly client, which
/// renders everything else.
pub fn shell_page() -> Markup {
    let bootstrap = format!(
        "import init from '{}';\ninit();",
        endpoints::CLIENT_SCRIPT
    );

    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Finance Tracker" }
                style { (PreEscaped(STYLE)) }
                script type="module" { (PreEscaped(bootstrap)) }
            }

            body
            {
                noscript { "Finance Tracker needs JavaScript and WebAssembly to run." }
            }
        }
    }
}

/// Route handler for the root page.
pub async fn get_shell_page() -> Markup {
    shell_page()
}
