//! Shared UI primitive library for design-system controls.
//!
//! The crate owns reusable Leptos primitives, the variant tables that map their semantic style
//! tokens to utility classes, and the Tailwind-style class merge those tables resolve through.
//! Every primitive also emits the stable `data-ui-*` DOM contract consumed by shell CSS layers.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_merge;
mod primitives;
mod variants;

pub use class_merge::merge_classes;
pub use primitives::{
    icon_button_class, icon_button_variants, ColorSchema, IconButton, IconButtonAttrs,
    IconButtonSize, IconButtonStyle, IconButtonVariant, VariantParseError, VariantToken,
    RESERVED_ATTRIBUTES,
};
pub use variants::{ClassFragments, ClassVariants, CompoundRule, VariantDimension};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        ColorSchema, IconButton, IconButtonSize, IconButtonStyle, IconButtonVariant,
        VariantToken,
    };
}
