//! Page composer: the landing page as Maud markup.
//!
//! Sections render once each, in document order:
//!
//! ```text
//! Navbar   (fixed)
//! Hero     #hero
//! Gallery  #gallery
//! Services #services
//! Footer
//! ```
//!
//! Every content block that should fade in goes through [`fade_in`], which
//! emits the wrapper element the browser runtime (`static/reveal.js`)
//! observes. Repeated items get one wrapper each, staggered by index.
//!
//! [`reveal_layout`] estimates the same blocks' geometry for the headless
//! `plan` simulation.

use crate::config::SiteConfig;
use crate::content::{
    self, GALLERY_ANCHOR, GALLERY_IMAGES, HERO_ANCHOR, NAV_LINKS, QUOTE_LINK, SERVICES,
    SERVICES_ANCHOR,
};
use crate::reveal::wrapper::class_list;
use crate::simulate::BlockLayout;
use crate::viewport::Rect;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Delay of the hero call to action behind the hero heading.
pub const HERO_CTA_DELAY_MS: u64 = 400;
/// Per-index stagger of gallery images.
pub const GALLERY_STAGGER_MS: u64 = 100;
/// Per-index stagger of service cards.
pub const SERVICES_STAGGER_MS: u64 = 150;

pub fn gallery_delay(index: usize) -> u64 {
    index as u64 * GALLERY_STAGGER_MS
}

pub fn service_delay(index: usize) -> u64 {
    index as u64 * SERVICES_STAGGER_MS
}

/// Everything the page needs besides the static content tables.
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    /// Full stylesheet, inlined into `<head>`.
    pub css: &'a str,
    /// Browser reveal runtime, inlined before `</body>`.
    pub script: &'a str,
    /// Year shown in the copyright line.
    pub year: i32,
}

/// Reveal wrapper element: hidden until the runtime marks it `in-view`.
pub fn fade_in(delay_ms: u64, class: Option<&str>, content: Markup) -> Markup {
    html! {
        div class=(class_list(class))
            data-reveal-delay=(delay_ms)
            style={ "transition-delay: " (delay_ms) "ms;" } {
            (content)
        }
    }
}

/// `S&M` with the ampersand in gold.
fn brand_mark(config: &SiteConfig) -> Markup {
    html! {
        (config.brand.mark_left) span.gold { "&" } (config.brand.mark_right)
    }
}

fn gold_rule(class: &str) -> Markup {
    html! { div class={ "rule " (class) } {} }
}

fn section_heading(eyebrow: &str, title: &str) -> Markup {
    fade_in(
        0,
        None,
        html! {
            p.eyebrow { (eyebrow) }
            h2.section-title { (title) }
            (gold_rule("rule-short"))
        },
    )
}

// ============================================================================
// Sections
// ============================================================================

pub fn navbar(config: &SiteConfig) -> Markup {
    html! {
        nav.navbar {
            div.navbar-inner {
                a.brand href={ "#" (HERO_ANCHOR) } { (brand_mark(config)) }
                div.nav-links {
                    @for link in &NAV_LINKS {
                        a.nav-link href={ "#" (link.anchor) } { (link.label) }
                    }
                    a.nav-cta href={ "#" (QUOTE_LINK.anchor) } { (QUOTE_LINK.label) }
                }
            }
        }
    }
}

pub fn hero(config: &SiteConfig) -> Markup {
    html! {
        section.hero id=(HERO_ANCHOR) {
            div.hero-image style={ "background-image: url(" (config.hero.image) ");" } {}
            div.hero-overlay {}
            div.hero-content {
                (fade_in(0, None, html! {
                    (gold_rule("rule-hero"))
                    h1.hero-title { (brand_mark(config)) "." }
                    p.hero-tagline { (config.brand.tagline) "." }
                    (gold_rule("rule-hero"))
                }))
                (fade_in(HERO_CTA_DELAY_MS, None, html! {
                    a.hero-cta href={ "#" (GALLERY_ANCHOR) } { "View Our Work" }
                }))
            }
            div.scroll-hint aria-hidden="true" {
                (PreEscaped(r#"<svg fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="1.5" d="M19 9l-7 7-7-7"/></svg>"#))
            }
        }
    }
}

pub fn gallery() -> Markup {
    html! {
        section.gallery id=(GALLERY_ANCHOR) {
            div.container {
                (section_heading("Portfolio", "Our Work"))
                div.gallery-columns {
                    @for (i, image) in GALLERY_IMAGES.iter().enumerate() {
                        (fade_in(gallery_delay(i), Some("gallery-item"), html! {
                            figure.gallery-figure {
                                img src=(image.src) alt=(image.alt) loading="lazy";
                                figcaption { (image.alt) }
                            }
                        }))
                    }
                }
            }
        }
    }
}

pub fn services() -> Markup {
    html! {
        section.services id=(SERVICES_ANCHOR) {
            div.container {
                (section_heading("What We Do", "Our Services"))
                div.services-grid {
                    @for (i, service) in SERVICES.iter().enumerate() {
                        (fade_in(service_delay(i), None, html! {
                            article.service-card {
                                div.service-image {
                                    img src=(service.image) alt=(service.title) loading="lazy";
                                }
                                div.service-body {
                                    h3 { (service.title) }
                                    (gold_rule("rule-card"))
                                    p { (service.description) }
                                }
                            }
                        }))
                    }
                }
            }
        }
    }
}

pub fn footer(config: &SiteConfig, year: i32) -> Markup {
    html! {
        footer.site-footer {
            div.container {
                p.footer-mark { (brand_mark(config)) }
                p.footer-tagline { (config.brand.tagline) }
                (gold_rule("rule-footer"))
                p.copyright {
                    "© " (year) " " (config.brand.company) ". All rights reserved."
                }
            }
        }
    }
}

/// The whole document.
pub fn render_page(ctx: &PageContext<'_>) -> Markup {
    let title = format!(
        "{}&{} | {}",
        ctx.config.brand.mark_left, ctx.config.brand.mark_right, ctx.config.brand.tagline
    );
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(ctx.css)) }
            }
            body {
                (navbar(ctx.config))
                main {
                    (hero(ctx.config))
                    (gallery())
                    (services())
                }
                (footer(ctx.config, ctx.year))
                script { (PreEscaped(ctx.script)) }
            }
        }
    }
}

// ============================================================================
// Geometry estimate for the reveal simulation
// ============================================================================

const CONTAINER_MAX: f64 = 1280.0;
const CONTAINER_PADDING: f64 = 24.0;
const SECTION_PADDING: f64 = 128.0;
const HEADING_HEIGHT: f64 = 120.0;
const GRID_TOP: f64 = 64.0;
const GALLERY_GAP: f64 = 16.0;
const SERVICES_GAP: f64 = 32.0;
const SERVICE_CARD_HEIGHT: f64 = 444.0;

fn gallery_columns(width: f64) -> usize {
    match width {
        w if w >= 1024.0 => 3,
        w if w >= 640.0 => 2,
        _ => 1,
    }
}

/// Revealable blocks of the composed page with estimated geometry, in
/// document order. Mirrors the breakpoints of `static/style.css`.
pub fn reveal_layout(viewport_width: f64, viewport_height: f64) -> Vec<BlockLayout> {
    let container = viewport_width.min(CONTAINER_MAX) - 2.0 * CONTAINER_PADDING;
    let left = (viewport_width - viewport_width.min(CONTAINER_MAX)) / 2.0 + CONTAINER_PADDING;
    let mut blocks = Vec::new();

    // Hero: full viewport, content centered.
    let hero_center = viewport_height / 2.0;
    blocks.push(BlockLayout {
        label: "Hero heading".to_string(),
        rect: Rect::new(left, hero_center - 180.0, container, 300.0),
        delay_ms: 0,
    });
    blocks.push(BlockLayout {
        label: "Hero call to action".to_string(),
        rect: Rect::new(left, hero_center + 168.0, container, 44.0),
        delay_ms: HERO_CTA_DELAY_MS,
    });

    // Gallery: CSS columns fill top to bottom, then left to right.
    let gallery_top = viewport_height;
    blocks.push(BlockLayout {
        label: "Gallery heading".to_string(),
        rect: Rect::new(left, gallery_top + SECTION_PADDING, container, HEADING_HEIGHT),
        delay_ms: 0,
    });
    let columns = gallery_columns(viewport_width);
    let column_width = (container - GALLERY_GAP * (columns as f64 - 1.0)) / columns as f64;
    let item_height = column_width * 2.0 / 3.0;
    let per_column = GALLERY_IMAGES.len().div_ceil(columns);
    let grid_top = gallery_top + SECTION_PADDING + HEADING_HEIGHT + GRID_TOP;
    for (i, image) in GALLERY_IMAGES.iter().enumerate() {
        let (column, row) = (i / per_column, i % per_column);
        blocks.push(BlockLayout {
            label: format!("Gallery image {} ({})", i + 1, image.alt),
            rect: Rect::new(
                left + column as f64 * (column_width + GALLERY_GAP),
                grid_top + row as f64 * (item_height + GALLERY_GAP),
                column_width,
                item_height,
            ),
            delay_ms: gallery_delay(i),
        });
    }
    let gallery_bottom =
        grid_top + per_column as f64 * (item_height + GALLERY_GAP) - GALLERY_GAP + SECTION_PADDING;

    // Services: three columns from 768px, stacked below.
    blocks.push(BlockLayout {
        label: "Services heading".to_string(),
        rect: Rect::new(left, gallery_bottom + SECTION_PADDING, container, HEADING_HEIGHT),
        delay_ms: 0,
    });
    let columns = if viewport_width >= 768.0 { 3 } else { 1 };
    let card_width = (container - SERVICES_GAP * (columns as f64 - 1.0)) / columns as f64;
    let cards_top = gallery_bottom + SECTION_PADDING + HEADING_HEIGHT + GRID_TOP;
    for (i, service) in SERVICES.iter().enumerate() {
        let (column, row) = (i % columns, i / columns);
        blocks.push(BlockLayout {
            label: format!("Service: {}", service.title),
            rect: Rect::new(
                left + column as f64 * (card_width + SERVICES_GAP),
                cards_top + row as f64 * (SERVICE_CARD_HEIGHT + SERVICES_GAP),
                card_width,
                SERVICE_CARD_HEIGHT,
            ),
            delay_ms: service_delay(i),
        });
    }
    blocks
}

/// Number of reveal wrappers on the composed page.
pub fn reveal_block_count() -> usize {
    // Two hero blocks, one heading per section, one per repeated item.
    2 + 2 + content::GALLERY_IMAGES.len() + content::SERVICES.len()
}
