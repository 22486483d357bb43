//! Sign-in page.

use maud::{html, Markup};

use super::layout::{notice, page, Notice};

pub fn render(error: Option<&str>, email: &str) -> Markup {
    let error = error.map(|msg| Notice::Error(msg.to_string()));
    let content = html! {
        h1 { "Sign in" }
        (notice(error.as_ref()))
        form method="post" action="/login" {
            label for="email" { "Email" }
            input #email type="email" name="email" value=(email) required autocomplete="username";
            label for="password" { "Password" }
            input #password type="password" name="password" required autocomplete="current-password";
            button type="submit" { "Sign in" }
        }
        p { a href="/" { "Back to the portfolio" } }
    };
    page("Sign in", Some("login"), content)
}
