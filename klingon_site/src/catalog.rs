//! Fixed page content: features, testimonials, showcase highlights, and
//! store links.
//!
//! Every collection is an array in display order. Records carry only
//! `&'static str` data, so the catalog is built into the binary and can
//! never change at runtime.
//!
//! Each record type implements [`Keyed`]. Its key is the identity field
//! that components use as a render key, and it must be unique within its
//! collection. The array sizes are fixed at compile time. Duplicate keys
//! are caught by [`validate_catalog`], which the CLI runs before rendering.
//!
//! # Example
//!
//! ```rust
//! use klingon_site::catalog::{validate_catalog, FEATURES, Keyed};
//!
//! assert!(validate_catalog().is_ok());
//! assert_eq!(FEATURES[0].key(), "Interactive Lessons");
//! ```

use std::collections::HashSet;

use thiserror::Error;

/// A static image with intrinsic pixel dimensions.
///
/// The dimensions are always emitted as `width`/`height` attributes so the
/// browser can reserve layout space before the file arrives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    /// File name relative to the configured asset base
    pub file: &'static str,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
}

impl ImageAsset {
    /// Resolve this asset against an asset base such as `/assets`.
    pub fn url(&self, asset_base: &str) -> String {
        format!("{}/{}", asset_base.trim_end_matches('/'), self.file)
    }
}

const FEATURE_ICON: (u32, u32) = (120, 120);
const PORTRAIT: (u32, u32) = (200, 200);

const fn feature_icon(file: &'static str) -> ImageAsset {
    ImageAsset {
        file,
        width: FEATURE_ICON.0,
        height: FEATURE_ICON.1,
    }
}

const fn portrait(file: &'static str) -> ImageAsset {
    ImageAsset {
        file,
        width: PORTRAIT.0,
        height: PORTRAIT.1,
    }
}

/// Hero artwork next to the headline.
pub const HERO_IMAGE: ImageAsset = ImageAsset {
    file: "hero-warrior.svg",
    width: 640,
    height: 640,
};

/// App mockup shown in the showcase section.
pub const SHOWCASE_IMAGE: ImageAsset = ImageAsset {
    file: "padd-showcase.svg",
    width: 960,
    height: 640,
};

/// Emblem in the footer.
pub const FOOTER_EMBLEM: ImageAsset = ImageAsset {
    file: "klingon-emblem.svg",
    width: 96,
    height: 96,
};

/// A record that has an identity field used as its render key.
pub trait Keyed {
    /// The identity of this record within its collection.
    fn key(&self) -> &'static str;
}

/// One card in the features grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Card heading, unique within [`FEATURES`]
    pub title: &'static str,
    /// Body copy under the heading
    pub description: &'static str,
    /// Icon shown above the heading
    pub icon: ImageAsset,
    /// Alternative text for the icon
    pub alt: &'static str,
}

impl Keyed for FeatureRecord {
    fn key(&self) -> &'static str {
        self.title
    }
}

/// One quote in the testimonials list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialRecord {
    /// Speaker, unique within [`TESTIMONIALS`]
    pub name: &'static str,
    /// Rank or role shown under the name
    pub role: &'static str,
    /// Quotation, including its typographic quote marks
    pub quote: &'static str,
    pub portrait: ImageAsset,
    /// Alternative text for the portrait
    pub alt: &'static str,
}

impl Keyed for TestimonialRecord {
    fn key(&self) -> &'static str {
        self.name
    }
}

/// A label/detail pair in the showcase panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRecord {
    /// Bold lead-in, unique within [`HIGHLIGHTS`]
    pub label: &'static str,
    /// One-sentence explanation
    pub detail: &'static str,
}

impl Keyed for HighlightRecord {
    fn key(&self) -> &'static str {
        self.label
    }
}

/// Features grid content, in display order.
pub static FEATURES: [FeatureRecord; 3] = [
    FeatureRecord {
        title: "Interactive Lessons",
        description: "Train with adaptive holodeck drills, pronunciation coaches, and battle-ready dialogues that react to your voice and decisions in real time.",
        icon: feature_icon("icon-lessons.svg"),
        alt: "Icon depicting guided Klingon lesson glyphs",
    },
    FeatureRecord {
        title: "Cultural Immersion",
        description: "Unlock chronicles of Klingon history, rituals, and honor codes. Each completed lesson reveals new lore, artifacts, and ceremonial music.",
        icon: feature_icon("icon-culture.svg"),
        alt: "Icon showing a Klingon emblem surrounded by energy rings",
    },
    FeatureRecord {
        title: "Phrasebook & Translator",
        description: "Summon instant translations, phonetic guidance, and situational phrases. Switch between Federation Standard and High Klingon in a breath.",
        icon: feature_icon("icon-translator.svg"),
        alt: "Icon showing twin hexagonal panels with translation arrows",
    },
];

/// Testimonials, in display order.
pub static TESTIMONIALS: [TestimonialRecord; 3] = [
    TestimonialRecord {
        name: "Scholar Kor",
        role: "Keeper of the Great Hall Archives",
        quote: "\u{201c}The honorific drills are uncompromising. At last, a Federation tool worthy of Klingon throats.\u{201d}",
        portrait: portrait("testimonial-kor.svg"),
        alt: "Stylized portrait of Scholar Kor wearing ceremonial armor",
    },
    TestimonialRecord {
        name: "Strategist Lursa",
        role: "Fleet Linguistics Commander",
        quote: "\u{201c}My cadets doubled their combat call response speed. This app forges precision through relentless feedback.\u{201d}",
        portrait: portrait("testimonial-lursa.svg"),
        alt: "Stylized portrait of Strategist Lursa with braided armor",
    },
    TestimonialRecord {
        name: "Captain Martor",
        role: "IKS Hegh'ta Captain",
        quote: "\u{201c}During negotiations, I spoke with flawless guttural cadence. The council applauded. Glory was mine.\u{201d}",
        portrait: portrait("testimonial-martor.svg"),
        alt: "Stylized portrait of Captain Martor with a tactical visor",
    },
];

/// Showcase highlights, in display order.
pub static HIGHLIGHTS: [HighlightRecord; 3] = [
    HighlightRecord {
        label: "Honor Track",
        detail: "Earn ranks, unlock bat'leth forms, and compete in global warrior leaderboards.",
    },
    HighlightRecord {
        label: "Real-Time Analyzer",
        detail: "Waveform visualizer grades every glottal strike and uvular trill for perfect fidelity.",
    },
    HighlightRecord {
        label: "Mission Scenarios",
        detail: "Negotiate treaties, command crews, and recite victory oaths under simulated pressure.",
    },
];

/// An outbound app-store link in the call-to-action banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreLink {
    /// Button text, unique within [`STORE_LINKS`]
    pub label: &'static str,
    /// Absolute URL of the store listing
    pub href: &'static str,
}

impl Keyed for StoreLink {
    fn key(&self) -> &'static str {
        self.label
    }
}

/// Outbound store links, in display order.
pub static STORE_LINKS: [StoreLink; 2] = [
    StoreLink {
        label: "App Store",
        href: "https://apps.apple.com",
    },
    StoreLink {
        label: "Google Play",
        href: "https://play.google.com/store",
    },
];

/// A content defect found while checking the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records in one collection share an identity key
    #[error("duplicate key {key:?} in {collection}")]
    DuplicateKey {
        /// Collection name, e.g. "features"
        collection: &'static str,
        /// The repeated key
        key: &'static str,
    },
}

/// Check that every identity key is unique within its collection.
pub fn ensure_unique_keys<T: Keyed>(
    collection: &'static str,
    records: &[T],
) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        let key = record.key();
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey { collection, key });
        }
    }
    Ok(())
}

/// Validate all three built-in collections.
pub fn validate_catalog() -> Result<(), CatalogError> {
    ensure_unique_keys("features", &FEATURES)?;
    ensure_unique_keys("testimonials", &TESTIMONIALS)?;
    ensure_unique_keys("highlights", &HIGHLIGHTS)?;
    ensure_unique_keys("store links", &STORE_LINKS)?;
    Ok(())
}
