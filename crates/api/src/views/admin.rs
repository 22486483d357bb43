//! Admin editor page.
//!
//! One multipart form covering every profile field. Project and social rows
//! are repeated field groups; a blank row is always appended so a new entry
//! can be added, and the "Add" buttons clone that row client-side.

use folio_core::profile::{join_list, Profile, Project, SocialLink};
use maud::{html, Markup, PreEscaped};

use super::layout::{notice, page, Notice};

const SCRIPT: &str = r#"
document.querySelectorAll('[data-add-row]').forEach(function (btn) {
  btn.addEventListener('click', function () {
    var list = document.getElementById(btn.dataset.addRow);
    var row = list.lastElementChild.cloneNode(true);
    row.querySelectorAll('input, textarea').forEach(function (i) { i.value = ''; });
    list.appendChild(row);
  });
});
document.querySelectorAll('[data-remove-row]').forEach(function (btn) {
  btn.addEventListener('click', function () {
    var row = btn.closest('.entry');
    row.querySelectorAll('input, textarea').forEach(function (i) { i.value = ''; });
    if (row.parentElement.children.length > 1) row.remove();
  });
});
var preview = document.getElementById('crop-preview-btn');
if (preview) preview.addEventListener('click', function () {
  var form = document.getElementById('profile-form');
  var file = form.querySelector('input[name=avatar]').files[0];
  if (!file) return;
  var data = new FormData();
  data.append('image', file);
  ['crop_x', 'crop_y', 'crop_width', 'crop_height'].forEach(function (n) {
    data.append(n, form.querySelector('input[name=' + n + ']').value);
  });
  fetch('/api/v1/admin/crop', { method: 'POST', body: data, credentials: 'same-origin' })
    .then(function (r) { if (!r.ok) return r.json().then(function (e) { throw new Error(e.error); }); return r.blob(); })
    .then(function (b) { document.getElementById('crop-preview').src = URL.createObjectURL(b); })
    .catch(function (e) { alert(e.message); });
});
"#;

fn project_row(project: &Project) -> Markup {
    html! {
        div.entry {
            div.row {
                input type="text" name="project_title" placeholder="Title" value=(project.title);
                input type="text" name="project_tech" placeholder="Tech, comma separated"
                    value=(join_list(&project.tech_stack));
                input type="url" name="project_link" placeholder="Link" value=(project.link);
                button type="button" data-remove-row { "Remove" }
            }
            textarea name="project_description" rows="2" placeholder="Description" {
                (project.description)
            }
        }
    }
}

fn social_row(link: &SocialLink) -> Markup {
    html! {
        div.entry {
            div.row {
                input type="text" name="social_platform" placeholder="github, linkedin, email..."
                    value=(link.platform);
                input type="text" name="social_url" placeholder="URL or address" value=(link.url);
                button type="button" data-remove-row { "Remove" }
            }
        }
    }
}

pub fn render(profile: &Profile, email: &str, status: Option<&Notice>) -> Markup {
    let blank_social = SocialLink {
        platform: String::new(),
        url: String::new(),
    };
    let content = html! {
        header {
            h1 { "Edit profile" }
            p {
                "Signed in as " (email) " · "
                a href="/" { "View site" }
            }
            form method="post" action="/logout" {
                button type="submit" { "Sign out" }
            }
        }

        (notice(status))

        form #profile-form method="post" action="/admin" enctype="multipart/form-data" {
            fieldset {
                legend { "Identity" }
                label for="full_name" { "Full name" }
                input #full_name type="text" name="full_name" value=(profile.full_name);
                label for="roles" { "Roles (comma separated)" }
                input #roles type="text" name="roles" value=(profile.roles_input());
                label for="about_text" { "About" }
                textarea #about_text name="about_text" rows="6" { (profile.about_text) }
            }

            fieldset {
                legend { "Animation" }
                label for="name_speed" { "Name re-scramble interval (ms)" }
                input #name_speed type="number" min="1" name="name_speed" value=(profile.name_speed);
                label for="role_speed" { "Role hold time (ms)" }
                input #role_speed type="number" min="1" name="role_speed" value=(profile.role_speed);
            }

            fieldset {
                legend { "Avatar" }
                img.avatar #crop-preview src=(profile.avatar_url) alt="Current avatar";
                label for="avatar" { "New image" }
                input #avatar type="file" name="avatar" accept="image/png,image/jpeg,image/webp,image/gif";
                p { "Optional crop, in source pixels:" }
                div.row {
                    input type="number" min="0" name="crop_x" placeholder="x";
                    input type="number" min="0" name="crop_y" placeholder="y";
                    input type="number" min="1" name="crop_width" placeholder="width";
                    input type="number" min="1" name="crop_height" placeholder="height";
                }
                button #crop-preview-btn type="button" { "Preview crop" }
            }

            fieldset {
                legend { "Resume" }
                @if let Some(url) = &profile.resume_url {
                    p { "Current: " a href=(url) target="_blank" rel="noopener" { (url) } }
                }
                label for="resume" { "New PDF" }
                input #resume type="file" name="resume" accept="application/pdf";
            }

            fieldset {
                legend { "Projects" }
                div #projects {
                    @for project in &profile.projects {
                        (project_row(project))
                    }
                    (project_row(&Project::default()))
                }
                button type="button" data-add-row="projects" { "Add project" }
            }

            fieldset {
                legend { "Social links" }
                div #socials {
                    @for link in &profile.social_links {
                        (social_row(link))
                    }
                    (social_row(&blank_social))
                }
                button type="button" data-add-row="socials" { "Add link" }
            }

            button type="submit" { "Save" }
        }

        script { (PreEscaped(SCRIPT)) }
    };

    page("Edit profile", Some("admin"), content)
}
