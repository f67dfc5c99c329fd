//! The site configuration record.
//!
//! [`SiteConfig`] is the total, flat record of every editable site property.
//! All values are strings, including the numeric ones: they arrive from text
//! and number inputs and are interpolated into markup and styles as-is, so
//! there is nothing to gain from parsing them at rest.
//!
//! ## Totality
//!
//! After construction the record always has every field. Deserialization
//! requires every key and rejects unknown ones, so a persisted blob that is
//! missing or misspelling a single field fails as a whole and the caller
//! falls back to the full default record. A partial record is never patched
//! field-by-field; that would let one malformed key leak undefined values
//! into the renderers.
//!
//! ## Updates
//!
//! Edits go through [`SiteConfig::with`]: produce a new record with exactly
//! one field changed. The input is never mutated and the value is never
//! validated. Tolerating nonsense values is deliberate: the target users are
//! beginners, and a bad number should show up as a broken style, not an
//! error.

use crate::field::Field;
use serde::{Deserialize, Serialize};

/// Every editable property of the site, keyed in camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    pub nav_title: String,
    pub nav_color: String,
    pub banner_title: String,
    pub banner_subtitle: String,
    pub banner_bg_color: String,
    pub banner_text_color: String,
    pub banner_text_align: String,
    pub banner_height: String,
    pub banner_margin_bottom: String,
    pub banner_font_size: String,
    pub banner_letter_spacing: String,
    pub font_family: String,
    pub info_title: String,
    pub info_text: String,
    pub info_border_style: String,
    pub info_border_color: String,
    pub info_border_width: String,
    pub info_border_radius: String,
    pub info_font_weight: String,
    pub info_width: String,
    pub info_shadow: String,
    pub info_padding: String,
    pub info_rotation: String,
    pub show_image: String,
    pub image_count: String,
    pub image_src: String,
    pub image_src2: String,
    pub image_src3: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_title: "My Awesome Site".to_string(),
            nav_color: "#3b82f6".to_string(),
            banner_title: "Hello World!".to_string(),
            banner_subtitle: "I am learning to code web pages.".to_string(),
            banner_bg_color: "#1e293b".to_string(),
            banner_text_color: "#ffffff".to_string(),
            banner_text_align: "center".to_string(),
            banner_height: "300".to_string(),
            banner_margin_bottom: "40".to_string(),
            banner_font_size: "48".to_string(),
            banner_letter_spacing: "0".to_string(),
            font_family: "sans-serif".to_string(),
            info_title: "About Me".to_string(),
            info_text: "I love science and technology.".to_string(),
            info_border_style: "solid".to_string(),
            info_border_color: "#dddddd".to_string(),
            info_border_width: "1".to_string(),
            info_border_radius: "12".to_string(),
            info_font_weight: "normal".to_string(),
            info_width: "600".to_string(),
            info_shadow: "none".to_string(),
            info_padding: "20".to_string(),
            info_rotation: "0".to_string(),
            show_image: "yes".to_string(),
            image_count: "1".to_string(),
            image_src: "https://via.placeholder.com/150".to_string(),
            image_src2: "https://via.placeholder.com/150/blue".to_string(),
            image_src3: "https://via.placeholder.com/150/red".to_string(),
        }
    }
}

impl SiteConfig {
    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::NavTitle => &self.nav_title,
            Field::NavColor => &self.nav_color,
            Field::BannerTitle => &self.banner_title,
            Field::BannerSubtitle => &self.banner_subtitle,
            Field::BannerBgColor => &self.banner_bg_color,
            Field::BannerTextColor => &self.banner_text_color,
            Field::BannerTextAlign => &self.banner_text_align,
            Field::BannerHeight => &self.banner_height,
            Field::BannerMarginBottom => &self.banner_margin_bottom,
            Field::BannerFontSize => &self.banner_font_size,
            Field::BannerLetterSpacing => &self.banner_letter_spacing,
            Field::FontFamily => &self.font_family,
            Field::InfoTitle => &self.info_title,
            Field::InfoText => &self.info_text,
            Field::InfoBorderStyle => &self.info_border_style,
            Field::InfoBorderColor => &self.info_border_color,
            Field::InfoBorderWidth => &self.info_border_width,
            Field::InfoBorderRadius => &self.info_border_radius,
            Field::InfoFontWeight => &self.info_font_weight,
            Field::InfoWidth => &self.info_width,
            Field::InfoShadow => &self.info_shadow,
            Field::InfoPadding => &self.info_padding,
            Field::InfoRotation => &self.info_rotation,
            Field::ShowImage => &self.show_image,
            Field::ImageCount => &self.image_count,
            Field::ImageSrc => &self.image_src,
            Field::ImageSrc2 => &self.image_src2,
            Field::ImageSrc3 => &self.image_src3,
        }
    }

    /// A copy of this record with exactly one field replaced.
    ///
    /// Never mutates `self`, never validates `value`. Cannot fail.
    #[must_use]
    pub fn with(&self, field: Field, value: impl Into<String>) -> SiteConfig {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::NavTitle => next.nav_title = value,
            Field::NavColor => next.nav_color = value,
            Field::BannerTitle => next.banner_title = value,
            Field::BannerSubtitle => next.banner_subtitle = value,
            Field::BannerBgColor => next.banner_bg_color = value,
            Field::BannerTextColor => next.banner_text_color = value,
            Field::BannerTextAlign => next.banner_text_align = value,
            Field::BannerHeight => next.banner_height = value,
            Field::BannerMarginBottom => next.banner_margin_bottom = value,
            Field::BannerFontSize => next.banner_font_size = value,
            Field::BannerLetterSpacing => next.banner_letter_spacing = value,
            Field::FontFamily => next.font_family = value,
            Field::InfoTitle => next.info_title = value,
            Field::InfoText => next.info_text = value,
            Field::InfoBorderStyle => next.info_border_style = value,
            Field::InfoBorderColor => next.info_border_color = value,
            Field::InfoBorderWidth => next.info_border_width = value,
            Field::InfoBorderRadius => next.info_border_radius = value,
            Field::InfoFontWeight => next.info_font_weight = value,
            Field::InfoWidth => next.info_width = value,
            Field::InfoShadow => next.info_shadow = value,
            Field::InfoPadding => next.info_padding = value,
            Field::InfoRotation => next.info_rotation = value,
            Field::ShowImage => next.show_image = value,
            Field::ImageCount => next.image_count = value,
            Field::ImageSrc => next.image_src = value,
            Field::ImageSrc2 => next.image_src2 = value,
            Field::ImageSrc3 => next.image_src3 = value,
        }
        next
    }
}
