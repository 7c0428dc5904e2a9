//! Lorebook Overlay - Translation Merge
//!
//! Overlays per-field human translations onto structured compendium
//! fragments: journal pages, active effects, activities, advancement
//! entries, and their nested collections (unlinked spells, summon profiles,
//! effect change lists).
//!
//! Every converter is an identity when no translation bundle is supplied,
//! and a translation can only ever replace a field, never remove one: a
//! fragment with no matching entry, or an entry missing a leaf field, keeps
//! the original data.

mod activities;
mod advancement;
mod bundle;
mod effects;
mod pages;

pub use activities::{activities, summon_profiles, Activities};
pub use advancement::{advancement, Advancement};
pub use bundle::{translated, TranslationBundle};
pub use effects::{effect_changes, effects, Effects};
pub use pages::{pages, unlinked_spells, Pages};

use lorebook_plugin::ConverterRegistry;

/// Load the overlay converters into a registry under their host field names
pub fn load_overlay_converters(registry: ConverterRegistry) -> ConverterRegistry {
    registry
        .with_converter("pages", Pages)
        .with_converter("effects", Effects)
        .with_converter("activities", Activities)
        .with_converter("advancement", Advancement)
}
