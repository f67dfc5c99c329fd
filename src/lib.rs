//! # sitelab
//!
//! A tiered, single-page website builder for classroom use. A learner edits
//! a fixed set of typed fields (colors, sizes, text, image URLs), and the
//! tool derives two artifacts from the same stored record: a live preview
//! and a standalone HTML export.
//!
//! # Architecture: One Record, Two Renderers
//!
//! Everything flows from a single flat [`config::SiteConfig`]:
//!
//! ```text
//! edit (field, value)  →  SiteConfig  →  store (JSON blob)
//!                              │
//!                ┌─────────────┴─────────────┐
//!          generate::render           preview::render_preview
//!        (standalone document,        (visual tree, tier-aware)
//!         ignores the tier)
//! ```
//!
//! Both renderers are pure functions and re-run in full on every change.
//! Documents are tiny, so recomputing everything is simpler and safer than
//! tracking dirty fields.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | The total record of editable site properties and its defaults |
//! | [`field`] | Field table: wire keys, tier requirements, teaching notes |
//! | [`tier`] | Difficulty tiers and the visibility policy |
//! | [`generate`] | Markup generator — the exported standalone HTML document |
//! | [`preview`] | Preview renderer — tier-aware visual tree |
//! | [`store`] | JSON persistence with wholesale fallback to defaults |
//! | [`output`] | CLI display formatting |
//!
//! # Design Decisions
//!
//! ## The Export Ignores the Tier, the Preview Does Not
//!
//! This asymmetry is deliberate. The preview simplifies at lower tiers so a
//! beginner is not confronted with styling they cannot edit yet; gated
//! fields collapse to a fixed baseline. The export never simplifies: it is
//! the learner's full work product, and lowering the tier must not strip
//! styling from the page they take home. Stored values always survive a
//! tier drop and reappear when the tier is raised.
//!
//! ## Wholesale Fallback, Never a Field Merge
//!
//! A persisted record that is missing, corrupt, or partial is replaced by
//! the complete default record. Merging a damaged record field-by-field
//! would let one bad key leak undefined values into both renderers.
//!
//! ## Values Are Free Text
//!
//! Every field is a string, numeric ones included, and nothing validates
//! them. A learner typing "big" into a font size sees the style stop
//! working, which is itself the lesson; the CSS engine drops the invalid
//! declaration and the rest of the page renders on.

pub mod config;
pub mod field;
pub mod generate;
pub mod output;
pub mod preview;
pub mod store;
pub mod tier;
