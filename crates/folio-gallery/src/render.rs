//! Card and gallery markup.
//!
//! Templates are compiled once per renderer. Every interpolated value goes
//! through tera's HTML autoescaping; only already-rendered card markup is
//! inserted with `safe`.

use folio_core::{DEFAULT_IMAGE_URL, ProjectRecord};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::GalleryError;
use crate::loader::GalleryOutcome;

const CARD_TEMPLATE: &str = r#"<article class="project-card{% if project.featured %} featured-project{% endif %}">
    <div class="project-content">
        {% if project.featured %}<span class="featured-badge"><i class="fas fa-star"></i> Featured Project</span>{% endif %}
        <div class="project-image">
            <a href="{{ primary_url }}" target="_blank" aria-label="View {{ project.name }}">
                <img src="{{ project.image }}" alt="{{ project.name }}" loading="lazy" onerror="this.src='{{ default_image }}'">
            </a>
        </div>
        <h3>{{ project.name }}</h3>
        <p>{{ project.description }}</p>
        <div class="project-tech">
            {% for language in project.languages %}<span>{{ language }}</span>{% endfor %}
        </div>
        {% if open_source %}<div class="project-stats">
            <span><i class="fas fa-star"></i> {{ project.stars }}</span>
            <span><i class="fas fa-code-branch"></i> {{ project.forks }}</span>
        </div>{% endif %}
        <div class="project-links">
            {% for link in links %}<a href="{{ link.url }}" class="project-link" target="_blank"><i class="{{ link.icon }}"></i> {{ link.text }}</a>
            {% endfor %}
        </div>
    </div>
</article>
"#;

/// Everything before the project grid contents. Shared by the rendered
/// page and the static message pages.
const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Projects</title>
</head>
<body>
    <main>
        <section id="projects">
            <div class="project-grid">
"#;

const PAGE_FOOT: &str = r#"
            </div>
        </section>
    </main>
</body>
</html>
"#;

/// Fixed user-facing messages shown in place of the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMessage {
    Loading,
    NoProjects,
    LoadError,
}

impl PageMessage {
    #[must_use]
    pub const fn markup(self) -> &'static str {
        match self {
            Self::Loading => r#"<div class="loading">Loading projects...</div>"#,
            Self::NoProjects => "<p>No projects found</p>",
            Self::LoadError => "<p>Error loading projects. Please refresh the page.</p>",
        }
    }

    /// A complete page showing only this message. Infallible, so it can
    /// stand in when template rendering itself fails.
    #[must_use]
    pub fn page(self) -> String {
        [PAGE_HEAD, self.markup(), PAGE_FOOT].concat()
    }
}

/// One outbound link on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub url: String,
    pub icon: &'static str,
    pub text: &'static str,
}

/// Outbound links in display order: repository, store listing, launch
/// announcement, then a demo link for open-source projects that have a
/// homepage but no store listing.
#[must_use]
pub fn card_links(project: &ProjectRecord) -> Vec<CardLink> {
    let open_source = project.is_open_source();
    let mut links = Vec::new();

    if open_source {
        links.push(CardLink {
            url: project.html_url.clone(),
            icon: "fab fa-github",
            text: "GitHub",
        });
    }
    if let Some(url) = &project.chrome_store {
        links.push(CardLink {
            url: url.clone(),
            icon: "fab fa-chrome",
            text: "Chrome Store",
        });
    }
    if let Some(url) = &project.product_hunt {
        links.push(CardLink {
            url: url.clone(),
            icon: "fab fa-product-hunt",
            text: "Product Hunt",
        });
    }
    if let Some(homepage) = &project.homepage {
        if open_source && project.chrome_store.is_none() {
            links.push(CardLink {
                url: homepage.clone(),
                icon: "fas fa-external-link-alt",
                text: "Demo",
            });
        }
    }
    links
}

/// Turns resolved records into markup.
pub struct CardRenderer {
    tera: Tera,
}

impl CardRenderer {
    /// Compile the card and page templates.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Render`] if a template fails to compile.
    pub fn new() -> Result<Self, GalleryError> {
        let page_template = [PAGE_HEAD, "{{ grid | safe }}", PAGE_FOOT].concat();
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("card.html", CARD_TEMPLATE),
            ("page.html", page_template.as_str()),
        ])?;
        Ok(Self { tera })
    }

    /// Markup for a single project card.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Render`] if the template fails to render.
    pub fn render_card(&self, project: &ProjectRecord) -> Result<String, GalleryError> {
        let links = card_links(project);
        let primary_url = links.first().map_or("#", |link| link.url.as_str());

        let mut context = Context::new();
        context.insert("project", project);
        context.insert("links", &links);
        context.insert("primary_url", primary_url);
        context.insert("open_source", &project.is_open_source());
        context.insert("default_image", DEFAULT_IMAGE_URL);
        Ok(self.tera.render("card.html", &context)?)
    }

    /// Contents of the project grid: every card in order, or the
    /// "no projects" message.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Render`] if any card fails to render.
    pub fn render_grid(&self, outcome: &GalleryOutcome) -> Result<String, GalleryError> {
        match outcome {
            GalleryOutcome::Loaded { projects, .. } => {
                let cards = projects
                    .iter()
                    .map(|project| self.render_card(project))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(cards.concat())
            }
            GalleryOutcome::NoProjects { .. } => Ok(PageMessage::NoProjects.markup().to_string()),
        }
    }

    /// A complete HTML document for `outcome`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Render`] if the grid or page fails to render.
    pub fn render_page(&self, outcome: &GalleryOutcome) -> Result<String, GalleryError> {
        let grid = self.render_grid(outcome)?;
        let mut context = Context::new();
        context.insert("grid", &grid);
        Ok(self.tera.render("page.html", &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Stat;
    use pretty_assertions::assert_eq;

    fn open_source() -> ProjectRecord {
        ProjectRecord {
            name: "Twitter-X-Cleaner".into(),
            description: "Clean up your feed.".into(),
            stars: Stat::Count(42),
            forks: Stat::Count(3),
            languages: vec!["JavaScript".into(), "CSS".into()],
            html_url: "https://github.com/o/r".into(),
            homepage: Some("https://r.dev".into()),
            chrome_store: None,
            product_hunt: None,
            image: "https://opengraph.githubassets.com/1/o/r".into(),
            featured: false,
            topics: vec![],
            last_updated: None,
        }
    }

    fn closed_source() -> ProjectRecord {
        ProjectRecord {
            name: "Daily Byte English".into(),
            description: "Learn daily.".into(),
            stars: Stat::not_applicable(),
            forks: Stat::not_applicable(),
            languages: vec![],
            html_url: "https://chromewebstore.google.com/detail/x".into(),
            homepage: None,
            chrome_store: Some("https://chromewebstore.google.com/detail/x".into()),
            product_hunt: Some("https://www.producthunt.com/posts/x".into()),
            image: DEFAULT_IMAGE_URL.into(),
            featured: true,
            topics: vec![],
            last_updated: None,
        }
    }

    fn texts(links: &[CardLink]) -> Vec<&str> {
        links.iter().map(|l| l.text).collect()
    }

    #[test]
    fn open_source_links_include_demo_without_store() {
        assert_eq!(texts(&card_links(&open_source())), vec!["GitHub", "Demo"]);
    }

    #[test]
    fn store_link_suppresses_demo() {
        let mut project = open_source();
        project.chrome_store = Some("https://chromewebstore.google.com/detail/y".into());
        assert_eq!(
            texts(&card_links(&project)),
            vec!["GitHub", "Chrome Store"]
        );
    }

    #[test]
    fn closed_source_links_skip_repository() {
        assert_eq!(
            texts(&card_links(&closed_source())),
            vec!["Chrome Store", "Product Hunt"]
        );
    }

    #[test]
    fn card_shows_stats_only_for_open_source() {
        let renderer = CardRenderer::new().unwrap();

        let html = renderer.render_card(&open_source()).unwrap();
        assert!(html.contains("project-stats"));
        assert!(html.contains("<h3>Twitter-X-Cleaner</h3>"));
        assert!(html.contains("<span>JavaScript</span><span>CSS</span>"));
        assert!(!html.contains("featured-badge"));

        let html = renderer.render_card(&closed_source()).unwrap();
        assert!(!html.contains("project-stats"));
        assert!(html.contains("featured-project"));
        assert!(html.contains("Featured Project"));
    }

    #[test]
    fn card_escapes_interpolated_text() {
        let renderer = CardRenderer::new().unwrap();
        let mut project = open_source();
        project.name = "<script>alert(1)</script>".into();
        project.description = "a \"quoted\" & <b>bold</b> claim".into();

        let html = renderer.render_card(&project).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn image_anchor_targets_first_link_or_hash() {
        let renderer = CardRenderer::new().unwrap();
        let html = renderer.render_card(&open_source()).unwrap();
        let expected = format!("href=\"{}\"", tera::escape_html("https://github.com/o/r"));
        assert!(html.contains(&expected));

        let mut bare = closed_source();
        bare.chrome_store = None;
        bare.product_hunt = None;
        bare.html_url = "#".into();
        let html = renderer.render_card(&bare).unwrap();
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn grid_renders_cards_in_order() {
        let renderer = CardRenderer::new().unwrap();
        let outcome = GalleryOutcome::Loaded {
            projects: vec![closed_source(), open_source()],
            dropped: 0,
        };
        let grid = renderer.render_grid(&outcome).unwrap();
        let first = grid.find("Daily Byte English").unwrap();
        let second = grid.find("Twitter-X-Cleaner").unwrap();
        assert!(first < second);
    }

    #[test]
    fn no_projects_renders_message() {
        let renderer = CardRenderer::new().unwrap();
        let page = renderer
            .render_page(&GalleryOutcome::NoProjects { dropped: 2 })
            .unwrap();
        assert!(page.contains("<p>No projects found</p>"));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn message_page_matches_rendered_shell() {
        let renderer = CardRenderer::new().unwrap();
        let rendered = renderer
            .render_page(&GalleryOutcome::NoProjects { dropped: 0 })
            .unwrap();
        assert_eq!(rendered, PageMessage::NoProjects.page());
        assert!(PageMessage::LoadError.page().contains("name=\"viewport\""));
    }

    #[test]
    fn message_pages_are_distinct() {
        assert!(PageMessage::LoadError.page().contains("Please refresh the page."));
        assert!(PageMessage::Loading.page().contains("Loading projects..."));
        assert_ne!(PageMessage::NoProjects.markup(), PageMessage::LoadError.markup());
    }
}
