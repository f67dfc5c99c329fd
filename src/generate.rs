//! Standalone HTML export.
//!
//! [`render`] turns a [`SiteConfig`] into a complete, self-contained HTML
//! document: one `<style>` block and three structural blocks (top bar,
//! banner, info box) in fixed order. The function is pure and total; the
//! same record always produces the same bytes, and no value in the record
//! can make it fail. Unparsable numbers flow into the style text untouched
//! and the browser drops the invalid declaration.
//!
//! ## The export ignores the tier
//!
//! The tier parameter shapes only the preview
//! ([`preview`](crate::preview)). The exported document always reflects the
//! full stored configuration: it is "what your site looks like with
//! everything you have ever set", even when the current tier hides some of
//! those fields from the editor. Lowering the tier must never silently
//! strip styling from a learner's exported page.
//!
//! ## Trust model
//!
//! Field values are classroom input, not adversarial input. They land in
//! the document verbatim, markup characters included, so what a learner
//! types is exactly what appears in the exported source.
//!
//! The class names `top-bar`, `main-banner`, `info-box`, `gallery` and
//! `gallery-img` are the document's only styling hooks and are part of its
//! external contract.

use crate::config::SiteConfig;
use crate::tier::Tier;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Gallery size derived from the stored `imageCount`: parse, default to 1,
/// clamp to 1..=3.
pub fn gallery_count(config: &SiteConfig) -> usize {
    config.image_count.parse::<i64>().unwrap_or(1).clamp(1, 3) as usize
}

/// The `<style>` block. Exactly one of the two gallery rules is emitted:
/// the flex grid when the gallery holds more than one image, the
/// full-width single-image rule otherwise.
fn style_block(config: &SiteConfig, gallery: bool) -> String {
    let gallery_css = if gallery {
        "    .gallery { display: flex; gap: 10px; margin-top: 15px; justify-content: center; }\n    \
         .gallery-img { width: 32%; border-radius: 8px; }"
    } else {
        "    .gallery-img { max-width: 100%; margin-top: 15px; border-radius: 8px; }"
    };

    format!(
        "\n    body {{ margin: 0; font-family: {font}; background-color: #f8fafc; }}\n    \
         .top-bar {{ background-color: {nav}; padding: 20px; color: white; }}\n    \
         .main-banner {{ background-color: {banner_bg}; color: {banner_fg}; padding: 50px; \
         text-align: {align}; height: {height}px; margin-bottom: {margin}px; display: flex; \
         flex-direction: column; justify-content: center; }}\n    \
         .main-banner h1 {{ font-size: {font_size}px; letter-spacing: {spacing}px; \
         margin: 0 0 10px 0; }}\n    \
         .info-box {{ background-color: white; border: {border_w}px {border_style} {border_c}; \
         padding: {padding}px; border-radius: {radius}px; margin: 0 auto 40px auto; \
         max-width: {width}px; box-shadow: {shadow}; font-weight: {weight}; \
         transform: rotate({rotation}deg); }}\n{gallery_css}\n  ",
        font = config.font_family,
        nav = config.nav_color,
        banner_bg = config.banner_bg_color,
        banner_fg = config.banner_text_color,
        align = config.banner_text_align,
        height = config.banner_height,
        margin = config.banner_margin_bottom,
        font_size = config.banner_font_size,
        spacing = config.banner_letter_spacing,
        border_w = config.info_border_width,
        border_style = config.info_border_style,
        border_c = config.info_border_color,
        padding = config.info_padding,
        radius = config.info_border_radius,
        width = config.info_width,
        shadow = config.info_shadow,
        weight = config.info_font_weight,
        rotation = config.info_rotation,
    )
}

/// The image block: a bare `<img>` for a single image, a `.gallery`
/// container around the first `n` sources otherwise.
fn image_fragment(config: &SiteConfig, n: usize) -> Markup {
    let sources = [&config.image_src, &config.image_src2, &config.image_src3];
    html! {
        @if n == 1 {
            img.gallery-img src=(config.image_src);
        } @else {
            div.gallery {
                @for src in &sources[..n] {
                    img.gallery-img src=(src);
                }
            }
        }
    }
}

/// Render the exported document.
///
/// The tier is accepted so the export/preview asymmetry is visible at the
/// call site, and deliberately unused: output is byte-identical across
/// tiers for the same record.
pub fn render(config: &SiteConfig, _tier: Tier) -> String {
    let n = gallery_count(config);
    let css = style_block(config, n > 1);

    let doc = html! {
        (DOCTYPE)
        html {
            head {
                style { (PreEscaped(css)) }
            }
            body {
                nav.top-bar { h1 { (PreEscaped(&config.nav_title)) } }
                div.main-banner {
                    h1 { (PreEscaped(&config.banner_title)) }
                    p { (PreEscaped(&config.banner_subtitle)) }
                }
                div.info-box {
                    h2 { (PreEscaped(&config.info_title)) }
                    p { (PreEscaped(&config.info_text)) }
                    @if config.show_image == "yes" {
                        (image_fragment(config, n))
                    }
                }
            }
        }
    };
    doc.into_string()
}
