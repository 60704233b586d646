//! HTML template constants for the `HtmlFormatter`.

/// Document head and page styles; the page `<title>` follows directly.
pub const HTML_HEAD_START: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

pub const HTML_STYLE: &str = r#"    <style>
        :root {
            --color-bg: #f8fafc;
            --color-card: #ffffff;
            --color-border: #e2e8f0;
            --color-text: #1e293b;
            --color-text-muted: #64748b;
            --color-stroke: #ffffff;
            --color-background-land: #e5e7eb;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
            background: var(--color-bg);
            color: var(--color-text);
            line-height: 1.6;
            padding: 2rem;
        }
        .container { max-width: 1400px; margin: 0 auto; }
        h1 { font-size: 1.5rem; font-weight: 700; margin-bottom: 1.5rem; }
        h2 { font-size: 1rem; font-weight: 600; margin-bottom: 0.75rem; }
        .views { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-start; }
        .view { background: var(--color-card); border: 1px solid var(--color-border); border-radius: 0.5rem; padding: 1rem; }
        .map .background { stroke: var(--color-stroke); }
        .regions:hover { stroke: var(--color-text); stroke-width: 1.5; }
        .chartTitle { font-size: 1rem; font-weight: 600; }
        .numbers { fill: var(--color-card); font-size: 0.625rem; }
        .legend { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-top: 1rem; font-size: 0.8125rem; }
        .legend-item { display: flex; align-items: center; gap: 0.375rem; }
        .swatch { width: 1rem; height: 1rem; border-radius: 0.125rem; border: 1px solid var(--color-border); display: inline-block; }
        .join-summary { margin-top: 1rem; font-size: 0.8125rem; color: var(--color-text-muted); }
        .footer { margin-top: 2rem; padding-top: 1rem; border-top: 1px solid var(--color-border); font-size: 0.75rem; color: var(--color-text-muted); text-align: center; }
    </style>
</head>
<body>
    <div class="container">
"#;

pub const HTML_FOOTER: &str = r#"        <div class="footer">
            Generated by <strong>choropleth</strong>
        </div>
    </div>
</body>
</html>
"#;
