//! Public profile page.

use folio_core::effects::rotate::RotationPhase;
use folio_core::profile::Profile;
use maud::{html, Markup, PreEscaped};

use super::layout::page;

/// Connects the animated elements to their event streams.
///
/// `data-stream` elements follow a long-lived stream. `data-decode` tags open
/// a decode stream on pointer-enter and close it on pointer-leave, restoring
/// the final text.
const SCRIPT: &str = r#"
document.querySelectorAll('[data-stream]').forEach(function (el) {
  var src = new EventSource(el.dataset.stream);
  src.onmessage = function (e) {
    var f = JSON.parse(e.data);
    if (f.phrase !== undefined) { el.textContent = f.phrase; el.className = 'role ' + f.class; }
    else { el.textContent = f.text; }
  };
});
document.querySelectorAll('[data-decode]').forEach(function (el) {
  var text = el.dataset.decode, src = null;
  function stop() { if (src) { src.close(); src = null; } }
  el.addEventListener('mouseenter', function () {
    stop();
    src = new EventSource('/api/v1/effects/decode?text=' + encodeURIComponent(text));
    src.onmessage = function (e) {
      var f = JSON.parse(e.data);
      el.textContent = f.text;
      if (f.revealed) stop();
    };
  });
  el.addEventListener('mouseleave', function () { stop(); el.textContent = text; });
});
"#;

pub fn render(profile: &Profile) -> Markup {
    let content = html! {
        section.hero {
            img.avatar src=(profile.avatar_url) alt=(profile.full_name);
            div {
                h1.name data-stream="/api/v1/effects/name" { (profile.full_name) }
                @if let Some(first) = profile.roles.first() {
                    p {
                        span class={ "role " (RotationPhase::Shown.css_class()) }
                            data-stream="/api/v1/effects/roles" { (first) }
                    }
                }
                @if let Some(resume) = &profile.resume_url {
                    a href=(resume) target="_blank" rel="noopener" { "Resume" }
                }
            }
        }

        @if !profile.about_text.trim().is_empty() {
            section.about {
                h2 { "About" }
                @for paragraph in profile.about_text.split("\n\n").filter(|p| !p.trim().is_empty()) {
                    p { (paragraph.trim()) }
                }
            }
        }

        @if !profile.projects.is_empty() {
            section {
                h2 { "Projects" }
                div.projects {
                    @for project in &profile.projects {
                        article.card {
                            h3 { (project.title) }
                            p { (project.description) }
                            div {
                                @for tech in &project.tech_stack {
                                    span.tag data-decode=(tech) { (tech) }
                                }
                            }
                            @if !project.link.is_empty() {
                                a href=(project.link) target="_blank" rel="noopener" { "View project" }
                            }
                        }
                    }
                }
            }
        }

        footer.socials {
            @for link in &profile.social_links {
                @let kind = link.kind();
                a class=(kind.icon()) href=(link.href()) title=(kind.label()) target="_blank" rel="noopener" {
                    (kind.label())
                }
            }
            a href="/admin" { "Admin" }
        }

        script { (PreEscaped(SCRIPT)) }
    };

    page(&profile.full_name, Some("home"), content)
}
