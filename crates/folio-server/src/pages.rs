//! Server-side HTML rendering
//!
//! Pages are assembled into a shared layout with `format!`; the listing page
//! embeds its JSON payload in a script block for client-side code.

use folio_core::listing::{ALL_FILTER, ProjectListing};
use folio_core::project::{Category, Project};

/// Home page: tech-stack badges plus the curated featured projects
pub fn home(tech_stack: &[String], featured: &[Project]) -> String {
    let mut badges = String::new();
    for tech in tech_stack {
        badges.push_str(&format!("<li class=\"badge\">{}</li>", escape(tech)));
    }

    let mut cards = String::new();
    for project in featured {
        cards.push_str(&project_card(project));
    }

    let body = format!(
        "<h1>Portfolio</h1>\n\
         <ul class=\"tech-stack\">{badges}</ul>\n\
         <section class=\"featured\">\n<h2>Featured Projects</h2>\n{cards}</section>"
    );
    layout("Home", &body)
}

/// Listing page: filter links, project cards, and the embedded JSON payload
pub fn projects(listing: &ProjectListing) -> String {
    let mut filters = format!(
        "<a href=\"/projects\"{}>All</a>",
        active_marker(&listing.current_filter, ALL_FILTER)
    );
    for category in Category::ALL {
        filters.push_str(&format!(
            "\n<a href=\"/projects?category={key}\"{marker}>{label}</a>",
            key = category.as_str(),
            marker = active_marker(&listing.current_filter, category.as_str()),
            label = category.label(),
        ));
    }

    let mut cards = String::new();
    for project in &listing.projects {
        cards.push_str(&project_card(project));
    }
    if listing.projects.is_empty() {
        cards.push_str("<p class=\"empty\">No projects found.</p>");
    }

    let body = format!(
        "<h1>Projects</h1>\n\
         <nav class=\"filters\">{filters}</nav>\n\
         <section class=\"projects\">\n{cards}</section>\n\
         <script id=\"projects-data\" type=\"application/json\">{data}</script>",
        data = script_safe_json(&listing.cards_json),
    );
    layout("Projects", &body)
}

/// Detail page for a single project
pub fn project_detail(project: &Project) -> String {
    let mut tags = String::new();
    for tag in project.tags() {
        tags.push_str(&format!("<li class=\"tag\">{}</li>", escape(tag)));
    }

    let mut features = String::new();
    for feature in project.key_features.lines().filter(|l| !l.trim().is_empty()) {
        features.push_str(&format!("<li>{}</li>", escape(feature)));
    }

    let repository = match &project.repository {
        Some(url) => format!(
            "<p class=\"repository\"><a href=\"{url}\">Source repository</a></p>",
            url = escape(url)
        ),
        None => String::new(),
    };

    let body = format!(
        "<article class=\"project-detail\">\n\
         <img src=\"/media/{image}\" alt=\"{title}\">\n\
         <h1>{title}</h1>\n\
         <p class=\"meta\">{label} &middot; {year} &middot; {role}</p>\n\
         <ul class=\"tags\">{tags}</ul>\n\
         <p class=\"summary\">{summary}</p>\n\
         {repository}\
         <h2>Challenge</h2>\n<p>{challenge}</p>\n\
         <h2>Key Features</h2>\n<ul>{features}</ul>\n\
         <h2>About</h2>\n<p>{description}</p>\n\
         </article>",
        image = escape(&project.image),
        title = escape(&project.title),
        label = project.category.label(),
        year = project.year,
        role = escape(&project.role),
        summary = escape(&project.short_summary),
        challenge = escape(&project.challenge),
        description = escape(&project.description),
    );
    layout(&project.title, &body)
}

/// 404 page
pub fn not_found() -> String {
    layout("Not Found", "<h1>404</h1>\n<p>Nothing here. <a href=\"/\">Back home</a>.</p>")
}

/// 400 page
pub fn bad_request(message: &str) -> String {
    let body = format!("<h1>400</h1>\n<p>{}</p>", escape(message));
    layout("Bad Request", &body)
}

/// 500 page
pub fn server_error() -> String {
    layout("Error", "<h1>500</h1>\n<p>Something went wrong.</p>")
}

/// Card markup shared by the home and listing pages
fn project_card(project: &Project) -> String {
    format!(
        "<article class=\"project\">\n\
         <img src=\"/media/{image}\" alt=\"{title}\">\n\
         <h3><a href=\"/projects/{id}\">{title}</a></h3>\n\
         <p class=\"meta\">{label} &middot; {year}</p>\n\
         <p>{summary}</p>\n\
         </article>\n",
        image = escape(&project.image),
        id = project.id,
        title = escape(&project.title),
        label = project.category.label(),
        year = project.year,
        summary = escape(&project.short_summary),
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} &middot; Folio</title>\n\
         </head>\n\
         <body>\n\
         <header><nav><a href=\"/\">Home</a> <a href=\"/projects\">Projects</a></nav></header>\n\
         <main>\n{body}\n</main>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// Marks the active filter link
fn active_marker(current: &str, token: &str) -> &'static str {
    if current == token {
        " class=\"active\""
    } else {
        ""
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// JSON embedded in a script block must not be able to terminate it early
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_script_safe_json_neutralizes_close_tags() {
        let json = "[{\"title\":\"</script><script>alert(1)\"}]";
        let safe = script_safe_json(json);
        assert!(!safe.contains("</script>"));
        assert!(safe.contains("\\u003c/script"));
    }

    #[test]
    fn test_not_found_page_links_home() {
        let page = not_found();
        assert!(page.contains("404"));
        assert!(page.contains("href=\"/\""));
    }

    #[test]
    fn test_active_marker() {
        assert_eq!(active_marker("all", "all"), " class=\"active\"");
        assert_eq!(active_marker("WEB_DEV", "all"), "");
    }
}
