//! HTML page rendering.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Every page goes through [`base_document`], which supplies the head,
//! inline stylesheet and the site header. Renderers are pure: they take the
//! data to show and return markup.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::catalog::{Portfolio, Project, ALL_CATEGORIES};

/// Stylesheet inlined into every page.
const CSS: &str = r"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,sans-serif;line-height:1.6;color:#1f2933;background:#f7f9fb}
a{color:#2563eb;text-decoration:none}
a:hover{text-decoration:underline}
.site-header{display:flex;justify-content:space-between;align-items:center;padding:1rem 2rem;background:#111827}
.site-header .brand{color:#fff;font-weight:700}
.site-nav a{color:#d1d5db;margin-left:1.25rem}
.site-nav a.current{color:#fff;border-bottom:2px solid #60a5fa}
main{max-width:960px;margin:0 auto;padding:2rem}
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1.25rem}
.card{background:#fff;border-radius:8px;padding:1.25rem;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.tags span{display:inline-block;font-size:.8rem;background:#e0e7ff;border-radius:4px;padding:0 .4rem;margin:0 .25rem .25rem 0}
.filters a{margin-right:.75rem}
.filters a.selected{font-weight:700}
form label{display:block;margin-top:.75rem}
form input,form textarea{width:100%;padding:.5rem;border:1px solid #cbd5e1;border-radius:4px}
form button{margin-top:1rem;padding:.6rem 1.2rem;border:0;border-radius:4px;background:#2563eb;color:#fff}
#form-status.ok{color:#15803d}
#form-status.error{color:#b91c1c}
.error-page{text-align:center;padding:4rem 0}
";

/// Posts the contact form as JSON and shows the server's reply.
const CONTACT_SCRIPT: &str = r"
document.getElementById('contact-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const status = document.getElementById('form-status');
  const payload = Object.fromEntries(new FormData(form).entries());
  try {
    const response = await fetch('/submit_contact', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify(payload),
    });
    const result = await response.json();
    status.textContent = result.message;
    status.className = result.success ? 'ok' : 'error';
    if (result.success) { form.reset(); }
  } catch (err) {
    status.textContent = 'Network error, please try again.';
    status.className = 'error';
  }
});
";

/// A top-level page, used to highlight the current navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/projects` and `/project/{id}`
    Projects,
    /// `/achievements`
    Achievements,
    /// `/contact`
    Contact,
    /// Error pages
    Error,
}

const NAV: [(Page, &str, &str); 5] = [
    (Page::Home, "/", "Home"),
    (Page::About, "/about", "About"),
    (Page::Projects, "/projects", "Projects"),
    (Page::Achievements, "/achievements", "Achievements"),
    (Page::Contact, "/contact", "Contact"),
];

// ============================================================================
// Layout
// ============================================================================

/// Renders the base HTML document structure
fn base_document(owner: &str, title: &str, current: Page, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (owner) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header(owner, current))
                main { (content) }
            }
        }
    }
}

fn site_header(owner: &str, current: Page) -> Markup {
    html! {
        header.site-header {
            a.brand href="/" { (owner) }
            nav.site-nav {
                @for (page, href, label) in NAV {
                    a href=(href) class=[(page == current).then_some("current")] { (label) }
                }
            }
        }
    }
}

fn tags(items: &[String]) -> Markup {
    html! {
        div.tags {
            @for item in items { span { (item) } }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the landing page.
#[must_use]
pub fn render_home(portfolio: &Portfolio) -> Markup {
    let stats = portfolio.stats();
    let featured = portfolio.projects.iter().take(3);
    let content = html! {
        section.hero {
            h1 { "Hi, I'm " (portfolio.owner) }
            p { "Data analyst and AI developer turning raw data into decisions." }
            p {
                a href="/projects" { "See my work" }
                " · "
                a href="/contact" { "Get in touch" }
            }
        }
        section.stats {
            ul {
                li { strong { (stats.projects_completed) } " projects" }
                li { strong { (stats.skills_mastered) } " skills" }
                li { strong { (stats.years_experience) } " years experience" }
                li { strong { (stats.certifications) } " certifications" }
            }
        }
        section {
            h2 { "Featured projects" }
            div.grid {
                @for project in featured { (project_card(project)) }
            }
        }
    };
    base_document(&portfolio.owner, "Home", Page::Home, content)
}

/// Renders the about page with skills and experience.
#[must_use]
pub fn render_about(portfolio: &Portfolio) -> Markup {
    let content = html! {
        h1 { "About" }
        section.skills {
            h2 { "Skills" }
            div.grid {
                @for group in &portfolio.skills {
                    div.card {
                        h3 { (group.name) }
                        (tags(&group.skills))
                    }
                }
            }
        }
        section.experience {
            h2 { "Experience" }
            @for job in &portfolio.experience {
                article.card {
                    h3 { (job.title) " · " (job.company) }
                    p.meta { (job.duration) " · " (job.location) }
                    ul {
                        @for item in &job.responsibilities { li { (item) } }
                    }
                }
            }
        }
    };
    base_document(&portfolio.owner, "About", Page::About, content)
}

fn project_card(project: &Project) -> Markup {
    html! {
        article.card {
            h3 { a href={ "/project/" (project.id) } { (project.title) } }
            p.category { (project.category) }
            p { (project.description) }
            (tags(&project.tech_stack))
        }
    }
}

/// Renders the project grid filtered to `selected_category`.
#[must_use]
pub fn render_projects(portfolio: &Portfolio, selected_category: &str) -> Markup {
    let projects = portfolio.projects_in(selected_category);
    let filters = std::iter::once(ALL_CATEGORIES).chain(portfolio.categories());
    let content = html! {
        h1 { "Projects" }
        nav.filters {
            @for category in filters {
                a href={ "/projects?category=" (urlencoding::encode(category)) }
                    class=[(category == selected_category).then_some("selected")] {
                    @if category == ALL_CATEGORIES { "All" } @else { (category) }
                }
            }
        }
        @if projects.is_empty() {
            p.empty { "No projects in this category yet." }
        } @else {
            div.grid {
                @for project in projects { (project_card(project)) }
            }
        }
    };
    base_document(&portfolio.owner, "Projects", Page::Projects, content)
}

/// Renders a single project.
#[must_use]
pub fn render_project_detail(portfolio: &Portfolio, project: &Project) -> Markup {
    let content = html! {
        article.project-detail {
            p { a href="/projects" { "← All projects" } }
            h1 { (project.title) }
            p.category { (project.category) }
            p { (project.description) }
            h2 { "Highlights" }
            ul {
                @for item in &project.highlights { li { (item) } }
            }
            h2 { "Built with" }
            (tags(&project.tech_stack))
            p.links {
                a href=(project.github) target="_blank" rel="noopener" { "Source" }
                @if project.demo != "#" {
                    " · "
                    a href=(project.demo) target="_blank" rel="noopener" { "Live demo" }
                }
            }
        }
    };
    base_document(&portfolio.owner, &project.title, Page::Projects, content)
}

/// Renders the contact form.
#[must_use]
pub fn render_contact(portfolio: &Portfolio) -> Markup {
    let content = html! {
        h1 { "Contact" }
        p { "Have a question or a project in mind? Send me a message." }
        form id="contact-form" {
            label for="name" { "Name" }
            input id="name" type="text" name="name";
            label for="email" { "Email" }
            input id="email" type="email" name="email";
            label for="subject" { "Subject" }
            input id="subject" type="text" name="subject";
            label for="message" { "Message" }
            textarea id="message" name="message" rows="6" {}
            button type="submit" { "Send" }
        }
        p id="form-status" role="status" {}
        script { (PreEscaped(CONTACT_SCRIPT)) }
    };
    base_document(&portfolio.owner, "Contact", Page::Contact, content)
}

/// Renders the achievements page.
#[must_use]
pub fn render_achievements(portfolio: &Portfolio) -> Markup {
    let hackathon_winners = portfolio
        .projects
        .iter()
        .filter(|p| p.highlights.iter().any(|h| h.contains("Hackathon")));
    let content = html! {
        h1 { "Achievements" }
        section {
            h2 { "Awards" }
            ul {
                @for project in hackathon_winners {
                    li { a href={ "/project/" (project.id) } { (project.title) } " · Hackathon winner" }
                }
            }
        }
        section {
            h2 { "Certifications" }
            p { (portfolio.certifications) " professional certifications earned." }
        }
    };
    base_document(&portfolio.owner, "Achievements", Page::Achievements, content)
}

/// Renders the 404 page.
#[must_use]
pub fn render_not_found(owner: &str) -> Markup {
    let content = html! {
        section.error-page {
            h1 { "404" }
            p { "The page you are looking for does not exist." }
            a href="/" { "Back home" }
        }
    };
    base_document(owner, "Page not found", Page::Error, content)
}

/// Renders the 500 page.
#[must_use]
pub fn render_server_error(owner: &str) -> Markup {
    let content = html! {
        section.error-page {
            h1 { "500" }
            p { "Something went wrong on our side. Please try again later." }
            a href="/" { "Back home" }
        }
    };
    base_document(owner, "Server error", Page::Error, content)
}
