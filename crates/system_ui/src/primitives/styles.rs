//! Class tables for the icon button.

use super::{ColorSchema, IconButtonSize, IconButtonStyle, IconButtonVariant};
use crate::variants::{ClassVariants, CompoundRule, VariantDimension};

const BASE: &[&str] = &[
    "button",
    "transition-all",
    "font-inter font-medium",
    "cursor-pointer",
    "inline-flex items-center justify-center",
    "relative",
];

static DIMENSIONS: [VariantDimension<IconButtonStyle>; 5] = [
    VariantDimension {
        name: "colorSchema",
        lookup: |style| match style.color_schema {
            ColorSchema::Primary => "bg-primary text-black border-primary hover:bg-opacity-80",
            ColorSchema::Secondary => {
                "bg-mineshaft text-gray-300 border-mineshaft hover:bg-opacity-80"
            }
            ColorSchema::Danger => "bg-red text-white border-red",
        },
    },
    VariantDimension {
        name: "variant",
        lookup: |style| match style.variant {
            IconButtonVariant::Solid | IconButtonVariant::Plain => "",
            IconButtonVariant::Outline => "bg-transparent border-2 border-solid",
        },
    },
    VariantDimension {
        name: "isDisabled",
        lookup: |style| {
            if style.is_disabled {
                "bg-opacity-70 cursor-not-allowed"
            } else {
                ""
            }
        },
    },
    VariantDimension {
        name: "isRounded",
        lookup: |style| if style.is_rounded { "rounded-md" } else { "" },
    },
    VariantDimension {
        name: "size",
        lookup: |style| match style.size {
            IconButtonSize::Xs => "text-xs py-1 px-2",
            IconButtonSize::Sm => "text-sm py-2 px-3",
            IconButtonSize::Md => "text-md py-3 px-4",
            IconButtonSize::Lg => "text-lg py-3 px-6",
        },
    },
];

static COMPOUNDS: [CompoundRule<IconButtonStyle>; 7] = [
    CompoundRule {
        when: |style| is(style, ColorSchema::Primary, IconButtonVariant::Outline),
        class: "text-primary hover:bg-primary hover:text-black",
    },
    CompoundRule {
        when: |style| is(style, ColorSchema::Secondary, IconButtonVariant::Outline),
        class: "hover:bg-mineshaft",
    },
    CompoundRule {
        when: |style| is(style, ColorSchema::Danger, IconButtonVariant::Outline),
        class: "text-red hover:bg-red hover:text-black",
    },
    CompoundRule {
        when: |style| is(style, ColorSchema::Primary, IconButtonVariant::Plain),
        class: "text-primary",
    },
    CompoundRule {
        when: |style| is(style, ColorSchema::Secondary, IconButtonVariant::Plain),
        class: "text-mineshaft",
    },
    CompoundRule {
        when: |style| is(style, ColorSchema::Danger, IconButtonVariant::Plain),
        class: "text-red",
    },
    CompoundRule {
        when: |style| {
            matches!(
                style.color_schema,
                ColorSchema::Danger | ColorSchema::Primary | ColorSchema::Secondary
            ) && matches!(style.variant, IconButtonVariant::Plain)
        },
        class: "bg-transparent py-1 px-1",
    },
];

static ICON_BUTTON: ClassVariants<IconButtonStyle> =
    ClassVariants::new(BASE, &DIMENSIONS, &COMPOUNDS);

fn is(style: &IconButtonStyle, color_schema: ColorSchema, variant: IconButtonVariant) -> bool {
    style.color_schema == color_schema && style.variant == variant
}

/// Variant table backing [`IconButtonStyle::class_name`].
pub fn icon_button_variants() -> &'static ClassVariants<IconButtonStyle> {
    &ICON_BUTTON
}

/// Resolves the merged class string for an icon button style, with `extra` classes taking
/// precedence over computed ones.
pub fn icon_button_class(style: &IconButtonStyle, extra: Option<&str>) -> String {
    ICON_BUTTON.resolve(style, extra)
}
