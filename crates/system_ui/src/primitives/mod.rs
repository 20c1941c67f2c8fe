//! Shared control primitives and their semantic style tokens.

use std::str::FromStr;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod controls;
mod styles;

pub use controls::{IconButton, IconButtonAttrs, RESERVED_ATTRIBUTES};
pub use styles::{icon_button_class, icon_button_variants};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when a loosely typed token does not name a known style value.
pub enum VariantParseError {
    /// The token is not one of the dimension's enumerated values.
    #[error("unknown {dimension} `{value}` (expected one of: {expected})")]
    UnknownValue {
        /// Style dimension being parsed (for example `colorSchema`).
        dimension: &'static str,
        /// Rejected input.
        value: String,
        /// Comma-separated list of accepted tokens.
        expected: String,
    },
}

/// Enumerated style dimension with stable string tokens.
pub trait VariantToken: Copy + Default + 'static {
    /// Dimension name used in design tokens and diagnostics.
    const DIMENSION: &'static str;
    /// Every value of the dimension in declaration order.
    const ALL: &'static [Self];

    /// Stable token for the value (also used in `data-ui-*` attributes).
    fn token(self) -> &'static str;

    /// Parses a token, returning [`VariantParseError::UnknownValue`] for anything outside the
    /// dimension's domain.
    ///
    /// # Errors
    ///
    /// Fails when `raw` (trimmed, case-insensitive) matches no token.
    fn parse_token(raw: &str) -> Result<Self, VariantParseError> {
        let wanted = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.token().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| VariantParseError::UnknownValue {
                dimension: Self::DIMENSION,
                value: raw.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|value| value.token())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Parses a token, falling back to the default value (with a logged warning) when it is not
    /// recognized.
    fn from_token_or_default(raw: &str) -> Self {
        Self::parse_token(raw).unwrap_or_else(|err| {
            let fallback = Self::default();
            logging::warn!("{err}; using default `{}`", fallback.token());
            fallback
        })
    }
}

macro_rules! variant_from_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromStr for $ty {
                type Err = VariantParseError;

                fn from_str(raw: &str) -> Result<Self, Self::Err> {
                    <$ty as VariantToken>::parse_token(raw)
                }
            }
        )+
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Color schemes for icon buttons.
pub enum ColorSchema {
    /// Brand color.
    Primary,
    /// Muted neutral color.
    Secondary,
    /// Destructive action color.
    Danger,
}

impl Default for ColorSchema {
    fn default() -> Self {
        Self::Primary
    }
}

impl VariantToken for ColorSchema {
    const DIMENSION: &'static str = "colorSchema";
    const ALL: &'static [Self] = &[Self::Primary, Self::Secondary, Self::Danger];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Visual treatments for icon buttons.
pub enum IconButtonVariant {
    /// Filled background.
    Solid,
    /// Transparent background with a colored border.
    Outline,
    /// Transparent background, no border emphasis, tight padding.
    Plain,
}

impl Default for IconButtonVariant {
    fn default() -> Self {
        Self::Solid
    }
}

impl VariantToken for IconButtonVariant {
    const DIMENSION: &'static str = "variant";
    const ALL: &'static [Self] = &[Self::Solid, Self::Outline, Self::Plain];

    fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Outline => "outline",
            Self::Plain => "plain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Icon button sizing tokens.
pub enum IconButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default size.
    Md,
    /// Large.
    Lg,
}

impl Default for IconButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantToken for IconButtonSize {
    const DIMENSION: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Xs, Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

variant_from_str!(ColorSchema, IconButtonVariant, IconButtonSize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
/// Complete style configuration of an icon button.
///
/// Deserializes from design-token objects such as
/// `{"colorSchema": "danger", "variant": "outline", "isRounded": false}`; omitted fields take
/// their defaults and unknown values are rejected.
pub struct IconButtonStyle {
    /// Color scheme.
    pub color_schema: ColorSchema,
    /// Visual treatment.
    pub variant: IconButtonVariant,
    /// Size.
    pub size: IconButtonSize,
    /// Whether corners are rounded.
    pub is_rounded: bool,
    /// Whether the button is disabled. Feeds both styling and the rendered attributes.
    pub is_disabled: bool,
}

impl Default for IconButtonStyle {
    fn default() -> Self {
        Self {
            color_schema: ColorSchema::default(),
            variant: IconButtonVariant::default(),
            size: IconButtonSize::default(),
            is_rounded: true,
            is_disabled: false,
        }
    }
}

impl IconButtonStyle {
    /// Builds a style from loosely typed tokens, substituting defaults (and logging a warning)
    /// for unrecognized values.
    pub fn from_tokens_lenient(
        color_schema: Option<&str>,
        variant: Option<&str>,
        size: Option<&str>,
    ) -> Self {
        Self {
            color_schema: color_schema
                .map(ColorSchema::from_token_or_default)
                .unwrap_or_default(),
            variant: variant
                .map(IconButtonVariant::from_token_or_default)
                .unwrap_or_default(),
            size: size
                .map(IconButtonSize::from_token_or_default)
                .unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Resolved class string for this style, with `extra` classes merged last.
    pub fn class_name(&self, extra: Option<&str>) -> String {
        icon_button_class(self, extra)
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
