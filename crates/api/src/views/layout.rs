//! Document shell and shared fragments.

use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
:root { color-scheme: dark; --fg: #e8e8e8; --muted: #9a9a9a; --accent: #5eead4; --bg: #0b0b0c; }
* { box-sizing: border-box; }
body { margin: 0; font-family: ui-monospace, SFMono-Regular, Menlo, monospace; background: var(--bg); color: var(--fg); }
main { max-width: 960px; margin: 0 auto; padding: 3rem 1.5rem; }
a { color: var(--accent); }
.hero { display: flex; gap: 2rem; align-items: center; flex-wrap: wrap; }
.avatar { width: 160px; height: 160px; border-radius: 50%; object-fit: cover; }
.name { font-size: 2.5rem; margin: 0; letter-spacing: .05em; }
.role { display: inline-block; transition: all 700ms ease; color: var(--accent); }
.opacity-0 { opacity: 0; } .opacity-100 { opacity: 1; }
.translate-y-4 { transform: translateY(1rem); } .-translate-y-4 { transform: translateY(-1rem); }
.translate-y-0 { transform: translateY(0); }
.blur-sm { filter: blur(4px); } .blur-0 { filter: none; }
.projects { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.card { border: 1px solid #2a2a2a; border-radius: 8px; padding: 1rem; }
.tag { display: inline-block; margin: .2rem; padding: .1rem .5rem; border: 1px solid #333; border-radius: 4px; cursor: default; }
.socials a { margin-right: 1rem; }
.notice { padding: .75rem 1rem; border-radius: 6px; margin-bottom: 1rem; }
.notice.success { background: #064e3b; } .notice.error { background: #7f1d1d; }
form label { display: block; margin-top: .75rem; color: var(--muted); }
input, textarea, select { width: 100%; padding: .5rem; background: #151517; color: var(--fg); border: 1px solid #333; border-radius: 4px; }
fieldset { border: 1px solid #2a2a2a; border-radius: 8px; margin-top: 1rem; }
button { margin-top: 1rem; padding: .5rem 1.25rem; background: var(--accent); color: #000; border: 0; border-radius: 4px; cursor: pointer; }
.row { display: grid; grid-template-columns: repeat(4, 1fr); gap: .5rem; }
"#;

/// Full HTML document around `content`.
pub fn page(title: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body class=[body_class] {
                main { (content) }
            }
        }
    }
}

/// Outcome message shown at the top of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

pub fn notice(notice: Option<&Notice>) -> Markup {
    html! {
        @match notice {
            Some(Notice::Success(msg)) => {
                div.notice.success role="status" { (msg) }
            },
            Some(Notice::Error(msg)) => {
                div.notice.error role="alert" { (msg) }
            },
            None => {},
        }
    }
}
