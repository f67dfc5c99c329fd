//! The editable field table.
//!
//! One [`Field`] variant per site property. This module is the single source
//! of truth for everything the rest of the tool needs to know about a field:
//! its wire key (also the key in the persisted JSON record), the minimum
//! difficulty tier that unlocks it, and the teaching notes shown by the
//! `fields` command: the CSS property it maps to, a one-line explanation,
//! and the fixed option list for enumerated fields.
//!
//! The storage for field values lives in
//! [`SiteConfig`](crate::config::SiteConfig); this module deliberately knows
//! nothing about it.

use crate::tier::Tier;
use std::fmt;
use std::str::FromStr;

/// An editable site property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    NavTitle,
    NavColor,
    BannerTitle,
    BannerSubtitle,
    BannerBgColor,
    BannerTextColor,
    BannerTextAlign,
    BannerHeight,
    BannerMarginBottom,
    BannerFontSize,
    BannerLetterSpacing,
    FontFamily,
    InfoTitle,
    InfoText,
    InfoBorderStyle,
    InfoBorderColor,
    InfoBorderWidth,
    InfoBorderRadius,
    InfoFontWeight,
    InfoWidth,
    InfoShadow,
    InfoPadding,
    InfoRotation,
    ShowImage,
    ImageCount,
    ImageSrc,
    ImageSrc2,
    ImageSrc3,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Field; 28] = [
        Field::NavTitle,
        Field::NavColor,
        Field::BannerTitle,
        Field::BannerSubtitle,
        Field::BannerBgColor,
        Field::BannerTextColor,
        Field::BannerTextAlign,
        Field::BannerHeight,
        Field::BannerMarginBottom,
        Field::BannerFontSize,
        Field::BannerLetterSpacing,
        Field::FontFamily,
        Field::InfoTitle,
        Field::InfoText,
        Field::InfoBorderStyle,
        Field::InfoBorderColor,
        Field::InfoBorderWidth,
        Field::InfoBorderRadius,
        Field::InfoFontWeight,
        Field::InfoWidth,
        Field::InfoShadow,
        Field::InfoPadding,
        Field::InfoRotation,
        Field::ShowImage,
        Field::ImageCount,
        Field::ImageSrc,
        Field::ImageSrc2,
        Field::ImageSrc3,
    ];

    /// Wire name: the key used on the CLI and in the persisted JSON record.
    pub fn key(self) -> &'static str {
        match self {
            Field::NavTitle => "navTitle",
            Field::NavColor => "navColor",
            Field::BannerTitle => "bannerTitle",
            Field::BannerSubtitle => "bannerSubtitle",
            Field::BannerBgColor => "bannerBgColor",
            Field::BannerTextColor => "bannerTextColor",
            Field::BannerTextAlign => "bannerTextAlign",
            Field::BannerHeight => "bannerHeight",
            Field::BannerMarginBottom => "bannerMarginBottom",
            Field::BannerFontSize => "bannerFontSize",
            Field::BannerLetterSpacing => "bannerLetterSpacing",
            Field::FontFamily => "fontFamily",
            Field::InfoTitle => "infoTitle",
            Field::InfoText => "infoText",
            Field::InfoBorderStyle => "infoBorderStyle",
            Field::InfoBorderColor => "infoBorderColor",
            Field::InfoBorderWidth => "infoBorderWidth",
            Field::InfoBorderRadius => "infoBorderRadius",
            Field::InfoFontWeight => "infoFontWeight",
            Field::InfoWidth => "infoWidth",
            Field::InfoShadow => "infoShadow",
            Field::InfoPadding => "infoPadding",
            Field::InfoRotation => "infoRotation",
            Field::ShowImage => "showImage",
            Field::ImageCount => "imageCount",
            Field::ImageSrc => "imageSrc",
            Field::ImageSrc2 => "imageSrc2",
            Field::ImageSrc3 => "imageSrc3",
        }
    }

    /// Minimum tier at which this field is unlocked.
    ///
    /// Consulted by both renderers through
    /// [`tier::is_visible`](crate::tier::is_visible); keeping the table here
    /// guarantees the preview and the field listing agree.
    pub fn required_tier(self) -> Tier {
        match self {
            Field::NavTitle
            | Field::NavColor
            | Field::BannerTitle
            | Field::BannerSubtitle
            | Field::BannerBgColor
            | Field::BannerTextColor
            | Field::InfoTitle
            | Field::InfoText
            | Field::ShowImage
            | Field::ImageCount
            | Field::ImageSrc
            | Field::ImageSrc2
            | Field::ImageSrc3
            | Field::BannerTextAlign => Tier::Basic,
            Field::FontFamily
            | Field::BannerFontSize
            | Field::InfoBorderStyle
            | Field::InfoBorderColor
            | Field::InfoBorderWidth
            | Field::InfoBorderRadius
            | Field::InfoFontWeight => Tier::Intermediate,
            Field::BannerHeight
            | Field::BannerMarginBottom
            | Field::BannerLetterSpacing
            | Field::InfoWidth
            | Field::InfoShadow
            | Field::InfoPadding
            | Field::InfoRotation => Tier::Advanced,
        }
    }

    /// CSS property this field feeds, when it is a style field.
    /// Content fields (titles, body text, image sources) return `None`.
    pub fn css_property(self) -> Option<&'static str> {
        match self {
            Field::NavColor | Field::BannerBgColor => Some("background-color"),
            Field::BannerTextColor => Some("color"),
            Field::BannerTextAlign => Some("text-align"),
            Field::BannerHeight => Some("height"),
            Field::BannerMarginBottom => Some("margin-bottom"),
            Field::BannerFontSize => Some("font-size"),
            Field::BannerLetterSpacing => Some("letter-spacing"),
            Field::FontFamily => Some("font-family"),
            Field::InfoBorderStyle => Some("border-style"),
            Field::InfoBorderColor => Some("border-color"),
            Field::InfoBorderWidth => Some("border-width"),
            Field::InfoBorderRadius => Some("border-radius"),
            Field::InfoFontWeight => Some("font-weight"),
            Field::InfoWidth => Some("max-width"),
            Field::InfoShadow => Some("box-shadow"),
            Field::InfoPadding => Some("padding"),
            Field::InfoRotation => Some("transform"),
            _ => None,
        }
    }

    /// One-line explanation shown next to the input.
    pub fn help(self) -> Option<&'static str> {
        match self {
            Field::NavColor => Some("Change the background color of the top bar"),
            Field::BannerBgColor => Some("Change the background color of the big banner"),
            Field::BannerTextColor => Some("Change the text color"),
            Field::BannerTextAlign => Some("Align text to Left, Center or Right"),
            Field::BannerHeight => Some("Make the banner taller or shorter"),
            Field::BannerMarginBottom => Some("Space below the banner"),
            Field::BannerFontSize => Some("How big the text is"),
            Field::BannerLetterSpacing => Some("Space between letters"),
            Field::FontFamily => Some("The style of the text"),
            Field::InfoBorderStyle => Some("Type of border line"),
            Field::InfoBorderColor => Some("Color of the border"),
            Field::InfoBorderRadius => Some("Round the corners of the box"),
            Field::InfoFontWeight => Some("Thickness of the text"),
            Field::InfoWidth => Some("How wide the box can get"),
            Field::InfoShadow => Some("Add a shadow effect"),
            Field::InfoPadding => Some("Space inside the box"),
            Field::InfoRotation => Some("Rotate the box!"),
            _ => None,
        }
    }

    /// Fixed `(value, label)` choices for enumerated fields.
    ///
    /// The stored value is always the left element; labels are display only.
    /// In particular the shadow options store the full `box-shadow` value,
    /// so the generator can interpolate it without a lookup.
    pub fn options(self) -> Option<&'static [(&'static str, &'static str)]> {
        match self {
            Field::FontFamily => Some(&[
                ("sans-serif", "Arial (Modern)"),
                ("serif", "Times New Roman (Fancy)"),
                ("monospace", "Courier (Coding)"),
            ]),
            Field::BannerTextColor => Some(&[
                ("#ffffff", "white"),
                ("#000000", "black"),
                ("#ff0000", "red"),
                ("#fbbf24", "gold"),
            ]),
            Field::BannerTextAlign => {
                Some(&[("center", "center"), ("left", "left"), ("right", "right")])
            }
            Field::InfoBorderStyle => Some(&[
                ("solid", "solid"),
                ("dashed", "dashed"),
                ("dotted", "dotted"),
                ("none", "none"),
            ]),
            Field::InfoFontWeight => Some(&[
                ("normal", "normal"),
                ("bold", "bold"),
                ("100", "thin"),
                ("900", "extra bold"),
            ]),
            Field::InfoShadow => Some(&[
                ("none", "none"),
                ("0 4px 6px -1px rgb(0 0 0 / 0.1)", "soft shadow"),
                ("10px 10px 0px #000", "hard shadow"),
            ]),
            Field::ShowImage => Some(&[("yes", "yes"), ("no", "no")]),
            Field::ImageCount => Some(&[("1", "1"), ("2", "2"), ("3", "3")]),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("unknown field '{s}' (run 'sitelab fields' for the list)"))
    }
}
