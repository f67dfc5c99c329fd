//! Tier-aware live preview.
//!
//! [`render_preview`] maps the same [`SiteConfig`] the export uses into a
//! [`PreviewNode`] tree that structurally mirrors the exported document:
//! top bar, banner, info box, optional gallery. The embedding UI paints the
//! tree; [`PreviewNode::to_html`] and [`document`] serialize it for the CLI.
//!
//! ## Gating
//!
//! Unlike the export, the preview resolves gated style fields through the
//! difficulty policy. A field below the session tier does not show its
//! stored value; it collapses to a fixed baseline, the unstyled box a
//! beginner starts from. The baseline is a constant table, not the stored
//! defaults: dropping the tier visibly simplifies the render while the
//! stored values survive untouched and reappear when the tier is raised.
//!
//! Only fields with a baseline entry are gated. Text, colors, alignment and
//! font fields always show the stored value, matching what the editor lets
//! a basic-tier learner change.
//!
//! ## Image fallback
//!
//! Every image node carries a numbered placeholder URL. When the real
//! source fails to load the UI swaps the placeholder in; the stored
//! configuration is never touched.

use crate::config::SiteConfig;
use crate::field::Field;
use crate::generate::gallery_count;
use crate::tier::{self, Tier};
use maud::{DOCTYPE, PreEscaped, html};
use std::fmt::Write as _;

/// One node of the preview tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewNode {
    Element {
        tag: &'static str,
        class: Option<&'static str>,
        /// Resolved inline styles, in emit order.
        styles: Vec<(&'static str, String)>,
        children: Vec<PreviewNode>,
    },
    Text(String),
    Image {
        class: &'static str,
        src: String,
        /// Numbered placeholder the UI substitutes on load failure.
        fallback: String,
    },
}

impl PreviewNode {
    /// First element in the tree (depth-first) carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&PreviewNode> {
        match self {
            PreviewNode::Element {
                class: c, children, ..
            } => {
                if *c == Some(class) {
                    return Some(self);
                }
                children.iter().find_map(|child| child.find_class(class))
            }
            PreviewNode::Image { class: c, .. } if *c == class => Some(self),
            _ => None,
        }
    }

    /// Resolved value of one style property on this element.
    pub fn style(&self, property: &str) -> Option<&str> {
        match self {
            PreviewNode::Element { styles, .. } => styles
                .iter()
                .find(|(p, _)| *p == property)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Concatenated text of the direct children.
    pub fn text(&self) -> String {
        match self {
            PreviewNode::Element { children, .. } => children
                .iter()
                .filter_map(|child| match child {
                    PreviewNode::Text(t) => Some(t.as_str()),
                    _ => None,
                })
                .collect(),
            PreviewNode::Text(t) => t.clone(),
            PreviewNode::Image { .. } => String::new(),
        }
    }

    /// Serialize the tree as HTML with inline `style` attributes.
    ///
    /// Like the export, learner text is emitted verbatim. Image nodes get
    /// an `onerror` handler that swaps in the placeholder exactly once.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            PreviewNode::Element {
                tag,
                class,
                styles,
                children,
            } => {
                write!(out, "<{tag}").unwrap();
                if let Some(class) = class {
                    write!(out, " class=\"{class}\"").unwrap();
                }
                if !styles.is_empty() {
                    out.push_str(" style=\"");
                    for (property, value) in styles {
                        write!(out, "{property}: {value}; ").unwrap();
                    }
                    out.pop();
                    out.push('"');
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                write!(out, "</{tag}>").unwrap();
            }
            PreviewNode::Text(t) => out.push_str(t),
            PreviewNode::Image {
                class,
                src,
                fallback,
            } => {
                write!(
                    out,
                    "<img class=\"{class}\" src=\"{src}\" \
                     onerror=\"this.onerror=null;this.src='{fallback}'\">"
                )
                .unwrap();
            }
        }
    }
}

fn element(
    tag: &'static str,
    class: Option<&'static str>,
    styles: Vec<(&'static str, String)>,
    children: Vec<PreviewNode>,
) -> PreviewNode {
    PreviewNode::Element {
        tag,
        class,
        styles,
        children,
    }
}

fn text(value: &str) -> PreviewNode {
    PreviewNode::Text(value.to_string())
}

/// Placeholder URL for gallery slot `k` (1-based).
pub fn placeholder_src(k: usize) -> String {
    format!("https://placehold.co/150x150?text=Image+{k}")
}

// Stored value with a px suffix when the field is unlocked, fixed baseline
// otherwise.
fn px_or(config: &SiteConfig, tier: Tier, field: Field, baseline: &str) -> String {
    if tier::is_visible(field.required_tier(), tier) {
        format!("{}px", config.get(field))
    } else {
        baseline.to_string()
    }
}

// Stored value verbatim when the field is unlocked, fixed baseline otherwise.
fn raw_or(config: &SiteConfig, tier: Tier, field: Field, baseline: &str) -> String {
    if tier::is_visible(field.required_tier(), tier) {
        config.get(field).to_string()
    } else {
        baseline.to_string()
    }
}

/// Render the preview tree for `config` at `tier`.
pub fn render_preview(config: &SiteConfig, tier: Tier) -> PreviewNode {
    element(
        "main",
        None,
        vec![],
        vec![
            top_bar(config),
            banner(config, tier),
            info_box(config, tier),
        ],
    )
}

fn top_bar(config: &SiteConfig) -> PreviewNode {
    element(
        "nav",
        Some("top-bar"),
        vec![
            ("background-color", config.nav_color.clone()),
            ("padding", "20px".to_string()),
            ("color", "white".to_string()),
        ],
        vec![element("h1", None, vec![], vec![text(&config.nav_title)])],
    )
}

fn banner(config: &SiteConfig, tier: Tier) -> PreviewNode {
    let heading = element(
        "h1",
        None,
        vec![
            ("font-family", config.font_family.clone()),
            ("font-size", format!("{}px", config.banner_font_size)),
            (
                "letter-spacing",
                format!("{}px", config.banner_letter_spacing),
            ),
            ("margin", "0 0 10px 0".to_string()),
        ],
        vec![text(&config.banner_title)],
    );
    let subtitle = element(
        "p",
        None,
        vec![("font-family", config.font_family.clone())],
        vec![text(&config.banner_subtitle)],
    );

    element(
        "div",
        Some("main-banner"),
        vec![
            ("background-color", config.banner_bg_color.clone()),
            ("color", config.banner_text_color.clone()),
            ("text-align", config.banner_text_align.clone()),
            ("height", px_or(config, tier, Field::BannerHeight, "auto")),
            (
                "margin-bottom",
                px_or(config, tier, Field::BannerMarginBottom, "0px"),
            ),
            ("padding", "50px".to_string()),
            ("display", "flex".to_string()),
            ("flex-direction", "column".to_string()),
            ("justify-content", "center".to_string()),
        ],
        vec![heading, subtitle],
    )
}

fn info_box(config: &SiteConfig, tier: Tier) -> PreviewNode {
    let mut children = vec![
        element(
            "h2",
            None,
            vec![("font-family", config.font_family.clone())],
            vec![text(&config.info_title)],
        ),
        element(
            "p",
            None,
            vec![("font-family", config.font_family.clone())],
            vec![text(&config.info_text)],
        ),
    ];
    if config.show_image == "yes" {
        children.push(gallery(config));
    }

    let rotation = raw_or(config, tier, Field::InfoRotation, "0");
    element(
        "div",
        Some("info-box"),
        vec![
            ("background-color", "white".to_string()),
            (
                "border-width",
                px_or(config, tier, Field::InfoBorderWidth, "1px"),
            ),
            (
                "border-style",
                raw_or(config, tier, Field::InfoBorderStyle, "solid"),
            ),
            (
                "border-color",
                raw_or(config, tier, Field::InfoBorderColor, "#ddd"),
            ),
            ("padding", px_or(config, tier, Field::InfoPadding, "20px")),
            (
                "border-radius",
                px_or(config, tier, Field::InfoBorderRadius, "0px"),
            ),
            ("margin", "0 auto 40px auto".to_string()),
            ("max-width", px_or(config, tier, Field::InfoWidth, "600px")),
            (
                "box-shadow",
                raw_or(config, tier, Field::InfoShadow, "none"),
            ),
            (
                "font-weight",
                raw_or(config, tier, Field::InfoFontWeight, "normal"),
            ),
            ("transform", format!("rotate({rotation}deg)")),
        ],
        children,
    )
}

fn gallery(config: &SiteConfig) -> PreviewNode {
    let n = gallery_count(config);
    let sources = [&config.image_src, &config.image_src2, &config.image_src3];
    let images: Vec<PreviewNode> = sources[..n]
        .iter()
        .enumerate()
        .map(|(idx, src)| PreviewNode::Image {
            class: "gallery-img",
            src: (*src).clone(),
            fallback: placeholder_src(idx + 1),
        })
        .collect();

    if n == 1 {
        images.into_iter().next().expect("gallery has one image")
    } else {
        element(
            "div",
            Some("gallery"),
            vec![
                ("display", "flex".to_string()),
                ("gap", "10px".to_string()),
                ("margin-top", "15px".to_string()),
                ("justify-content", "center".to_string()),
            ],
            images,
        )
    }
}

/// Wrap the serialized tree in a minimal viewable document.
pub fn document(config: &SiteConfig, tier: Tier) -> String {
    let tree = render_preview(config, tier);
    let doc = html! {
        (DOCTYPE)
        html {
            head {
                style { "body { margin: 0; background-color: #ffffff; }" }
            }
            body {
                (PreEscaped(tree.to_html()))
            }
        }
    };
    doc.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> SiteConfig {
        SiteConfig::default()
    }

    #[test]
    fn tree_mirrors_the_export_shape() {
        let tree = render_preview(&defaults(), Tier::Advanced);
        assert!(tree.find_class("top-bar").is_some());
        assert!(tree.find_class("main-banner").is_some());
        assert!(tree.find_class("info-box").is_some());
        // Default single image: gallery-img without a gallery container.
        assert!(tree.find_class("gallery-img").is_some());
        assert!(tree.find_class("gallery").is_none());
    }

    #[test]
    fn top_bar_shows_stored_color_and_title() {
        let config = defaults();
        let tree = render_preview(&config, Tier::Basic);
        let bar = tree.find_class("top-bar").unwrap();
        assert_eq!(bar.style("background-color"), Some("#3b82f6"));
        match bar {
            PreviewNode::Element { children, .. } => {
                assert_eq!(children[0].text(), "My Awesome Site");
            }
            _ => panic!("top bar is an element"),
        }
    }

    // =========================================================================
    // Tier gating
    // =========================================================================

    #[test]
    fn basic_tier_never_shows_advanced_values() {
        let config = defaults().with(Field::BannerHeight, "999");
        let tree = render_preview(&config, Tier::Basic);
        let banner = tree.find_class("main-banner").unwrap();
        // Baseline, not 999px.
        assert_eq!(banner.style("height"), Some("auto"));
        assert_eq!(banner.style("margin-bottom"), Some("0px"));
    }

    #[test]
    fn basic_tier_collapses_info_box_to_baseline() {
        let config = defaults()
            .with(Field::InfoBorderRadius, "30")
            .with(Field::InfoBorderStyle, "dotted")
            .with(Field::InfoBorderColor, "#ff0000")
            .with(Field::InfoShadow, "10px 10px 0px #000")
            .with(Field::InfoRotation, "12");

        let info = render_preview(&config, Tier::Basic);
        let info = info.find_class("info-box").unwrap();
        assert_eq!(info.style("border-radius"), Some("0px"));
        assert_eq!(info.style("border-style"), Some("solid"));
        assert_eq!(info.style("border-width"), Some("1px"));
        assert_eq!(info.style("border-color"), Some("#ddd"));
        assert_eq!(info.style("max-width"), Some("600px"));
        assert_eq!(info.style("box-shadow"), Some("none"));
        assert_eq!(info.style("padding"), Some("20px"));
        assert_eq!(info.style("font-weight"), Some("normal"));
        assert_eq!(info.style("transform"), Some("rotate(0deg)"));
    }

    #[test]
    fn intermediate_tier_unlocks_border_but_not_layout() {
        let config = defaults()
            .with(Field::InfoBorderRadius, "30")
            .with(Field::InfoWidth, "900");

        let tree = render_preview(&config, Tier::Intermediate);
        let info = tree.find_class("info-box").unwrap();
        assert_eq!(info.style("border-radius"), Some("30px"));
        // Still an advanced field.
        assert_eq!(info.style("max-width"), Some("600px"));
    }

    #[test]
    fn advanced_tier_shows_every_stored_value() {
        let config = defaults()
            .with(Field::BannerHeight, "999")
            .with(Field::InfoWidth, "900")
            .with(Field::InfoRotation, "12");

        let tree = render_preview(&config, Tier::Advanced);
        let banner = tree.find_class("main-banner").unwrap();
        let info = tree.find_class("info-box").unwrap();
        assert_eq!(banner.style("height"), Some("999px"));
        assert_eq!(info.style("max-width"), Some("900px"));
        assert_eq!(info.style("transform"), Some("rotate(12deg)"));
    }

    #[test]
    fn ungated_fields_show_through_at_basic() {
        // Alignment and font size have no baseline entry; the preview always
        // honors the stored value, like the editor at basic tier does.
        let config = defaults()
            .with(Field::BannerTextAlign, "right")
            .with(Field::BannerFontSize, "72");

        let tree = render_preview(&config, Tier::Basic);
        let banner = tree.find_class("main-banner").unwrap();
        assert_eq!(banner.style("text-align"), Some("right"));
        match banner {
            PreviewNode::Element { children, .. } => {
                assert_eq!(children[0].style("font-size"), Some("72px"));
            }
            _ => panic!("banner is an element"),
        }
    }

    #[test]
    fn stored_values_survive_a_tier_round_trip() {
        let config = defaults().with(Field::BannerHeight, "999");
        // Rendering at basic must not touch the record.
        let _ = render_preview(&config, Tier::Basic);
        assert_eq!(config.banner_height, "999");
        let tree = render_preview(&config, Tier::Advanced);
        let banner = tree.find_class("main-banner").unwrap();
        assert_eq!(banner.style("height"), Some("999px"));
    }

    // =========================================================================
    // Gallery and fallbacks
    // =========================================================================

    #[test]
    fn gallery_of_two_wraps_images() {
        let config = defaults().with(Field::ImageCount, "2");
        let tree = render_preview(&config, Tier::Basic);
        let gallery = tree.find_class("gallery").unwrap();
        match gallery {
            PreviewNode::Element { children, .. } => assert_eq!(children.len(), 2),
            _ => panic!("gallery is an element"),
        }
    }

    #[test]
    fn fallbacks_are_numbered_per_slot() {
        let config = defaults().with(Field::ImageCount, "3");
        let tree = render_preview(&config, Tier::Basic);
        let gallery = tree.find_class("gallery").unwrap();
        let PreviewNode::Element { children, .. } = gallery else {
            panic!("gallery is an element");
        };
        for (idx, node) in children.iter().enumerate() {
            let PreviewNode::Image { fallback, .. } = node else {
                panic!("gallery child is an image");
            };
            assert_eq!(*fallback, placeholder_src(idx + 1));
        }
        assert!(placeholder_src(2).ends_with("text=Image+2"));
    }

    #[test]
    fn show_image_no_drops_the_gallery() {
        let config = defaults().with(Field::ShowImage, "no");
        let tree = render_preview(&config, Tier::Basic);
        assert!(tree.find_class("gallery-img").is_none());
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    #[test]
    fn to_html_emits_classes_and_inline_styles() {
        let tree = render_preview(&defaults(), Tier::Basic);
        let html = tree.to_html();
        assert!(html.contains("class=\"top-bar\""));
        assert!(html.contains("background-color: #3b82f6"));
        assert!(html.contains("My Awesome Site"));
    }

    #[test]
    fn to_html_wires_the_onerror_fallback() {
        let tree = render_preview(&defaults(), Tier::Basic);
        let html = tree.to_html();
        assert!(html.contains("onerror=\"this.onerror=null;"));
        assert!(html.contains("placehold.co/150x150?text=Image+1"));
    }

    #[test]
    fn document_is_a_complete_page() {
        let doc = document(&defaults(), Tier::Basic);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("class=\"info-box\""));
    }
}
