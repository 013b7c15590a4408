//! Site-wide CSS shared by every page.

pub const BASE_CSS: &str = r#"
    :root {
        --background: #ffffff;
        --foreground: #0f172a;
        --muted: #f1f5f9;
        --muted-foreground: #64748b;
        --card: #ffffff;
        --primary: #2563eb;
    }
    html.dark {
        --background: #0b1120;
        --foreground: #e2e8f0;
        --muted: #111827;
        --muted-foreground: #94a3b8;
        --card: #1e293b;
        --primary: #3b82f6;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        background: var(--background);
        color: var(--foreground);
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }
    .section {
        padding: 5rem 0;
    }
    .section.tinted {
        background: var(--muted);
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: clamp(1.875rem, 4vw, 3rem);
        font-weight: 700;
        margin: 0 0 1rem;
    }
    .muted {
        color: var(--muted-foreground);
    }
    .small {
        font-size: 0.875rem;
    }
    .card {
        border-radius: 0.75rem;
        border: 1px solid rgba(127, 127, 127, 0.2);
        background: var(--card);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .icon-badge {
        flex-shrink: 0;
        width: 3rem;
        height: 3rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.4rem;
        background: rgba(37, 99, 235, 0.1);
    }
    .btn {
        display: inline-block;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        border: 2px solid var(--primary);
        background: var(--primary);
        color: white;
        font-size: 1.05rem;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
    }
    .btn.outline {
        background: transparent;
        color: inherit;
        border-color: currentColor;
    }
    .brand {
        color: var(--primary);
        font-weight: 700;
    }
    .site-footer {
        border-top: 1px solid rgba(127, 127, 127, 0.2);
        background: var(--muted);
        padding: 3rem 0;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
        gap: 2rem;
        margin-bottom: 2rem;
    }
    .footer-grid ul {
        list-style: none;
        padding: 0;
        margin: 0;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }
    .footer-link {
        background: none;
        border: none;
        padding: 0;
        color: var(--muted-foreground);
        font: inherit;
        font-size: 0.875rem;
        cursor: pointer;
    }
    .footer-link:hover {
        color: var(--primary);
    }
    .footer-bottom {
        padding-top: 2rem;
        border-top: 1px solid rgba(127, 127, 127, 0.2);
        text-align: center;
    }
"#;
