//! Tailwind-style class merging.
//!
//! Utilities that set the same CSS property under the same variant modifiers conflict; the one
//! appearing last wins and earlier ones are dropped. Classes the merger does not recognize are
//! kept as-is, with exact duplicates collapsed to their last occurrence.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// CSS property families recognized by [`merge_classes`].
enum ClassGroup {
    /// `display` (`block`, `inline-flex`, `hidden`, ...).
    Display,
    /// `position` (`relative`, `absolute`, ...).
    Position,
    /// `cursor-*`.
    Cursor,
    /// `transition*`.
    Transition,
    /// `items-*`.
    AlignItems,
    /// `justify-*` for content distribution.
    JustifyContent,
    /// `font-<weight>`.
    FontWeight,
    /// `font-<family>`.
    FontFamily,
    /// `text-<size>`.
    FontSize,
    /// `text-left`, `text-center`, ...
    TextAlign,
    /// `text-<color>`.
    TextColor,
    /// `text-opacity-*`.
    TextOpacity,
    /// `bg-opacity-*`.
    BackgroundOpacity,
    /// `bg-<color>`.
    BackgroundColor,
    /// `border`, `border-<width>`.
    BorderWidth,
    /// `border-solid`, `border-dashed`, ...
    BorderStyle,
    /// `border-<color>`.
    BorderColor,
    /// `rounded`, `rounded-<size>`.
    Rounded,
    /// `rounded-t-*`.
    RoundedTop,
    /// `rounded-r-*`.
    RoundedRight,
    /// `rounded-b-*`.
    RoundedBottom,
    /// `rounded-l-*`.
    RoundedLeft,
    /// `rounded-tl-*`.
    RoundedTopLeft,
    /// `rounded-tr-*`.
    RoundedTopRight,
    /// `rounded-br-*`.
    RoundedBottomRight,
    /// `rounded-bl-*`.
    RoundedBottomLeft,
    /// `opacity-*`.
    Opacity,
    /// `w-*`.
    Width,
    /// `h-*`.
    Height,
    /// `p-*`.
    Padding,
    /// `px-*`.
    PaddingX,
    /// `py-*`.
    PaddingY,
    /// `pt-*`.
    PaddingTop,
    /// `pr-*`.
    PaddingRight,
    /// `pb-*`.
    PaddingBottom,
    /// `pl-*`.
    PaddingLeft,
    /// `m-*`.
    Margin,
    /// `mx-*`.
    MarginX,
    /// `my-*`.
    MarginY,
    /// `mt-*`.
    MarginTop,
    /// `mr-*`.
    MarginRight,
    /// `mb-*`.
    MarginBottom,
    /// `ml-*`.
    MarginLeft,
}

impl ClassGroup {
    /// Narrower groups a later utility of this group also overrides.
    fn overrides(self) -> &'static [ClassGroup] {
        match self {
            Self::Padding => &[
                Self::PaddingX,
                Self::PaddingY,
                Self::PaddingTop,
                Self::PaddingRight,
                Self::PaddingBottom,
                Self::PaddingLeft,
            ],
            Self::PaddingX => &[Self::PaddingRight, Self::PaddingLeft],
            Self::PaddingY => &[Self::PaddingTop, Self::PaddingBottom],
            Self::Margin => &[
                Self::MarginX,
                Self::MarginY,
                Self::MarginTop,
                Self::MarginRight,
                Self::MarginBottom,
                Self::MarginLeft,
            ],
            Self::MarginX => &[Self::MarginRight, Self::MarginLeft],
            Self::MarginY => &[Self::MarginTop, Self::MarginBottom],
            Self::Rounded => &[
                Self::RoundedTop,
                Self::RoundedRight,
                Self::RoundedBottom,
                Self::RoundedLeft,
                Self::RoundedTopLeft,
                Self::RoundedTopRight,
                Self::RoundedBottomRight,
                Self::RoundedBottomLeft,
            ],
            Self::RoundedTop => &[Self::RoundedTopLeft, Self::RoundedTopRight],
            Self::RoundedRight => &[Self::RoundedTopRight, Self::RoundedBottomRight],
            Self::RoundedBottom => &[Self::RoundedBottomRight, Self::RoundedBottomLeft],
            Self::RoundedLeft => &[Self::RoundedTopLeft, Self::RoundedBottomLeft],
            _ => &[],
        }
    }
}

const DISPLAY: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "table",
    "inline-table",
    "grid",
    "inline-grid",
    "contents",
    "flow-root",
    "list-item",
    "hidden",
];
const POSITION: &[&str] = &["static", "fixed", "absolute", "relative", "sticky"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const FONT_SIZES: &[&str] = &["xs", "sm", "base", "md", "lg", "xl"];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_NON_COLOR: &[&str] = &["ellipsis", "clip", "wrap", "nowrap", "balance", "pretty"];
const BACKGROUND_NON_COLOR: &[&str] = &[
    "fixed",
    "local",
    "scroll",
    "auto",
    "cover",
    "contain",
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
    "center",
    "top",
    "bottom",
    "left",
    "right",
    "none",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BORDER_SIDES: &[&str] = &["x", "y", "t", "r", "b", "l", "s", "e"];
const RADIUS_SIZES: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

/// Merges class lists, letting later utilities override earlier conflicting ones.
///
/// Each part may itself hold several whitespace-separated classes. Surviving classes keep their
/// relative order and are joined by single spaces.
///
/// ```
/// use system_ui::merge_classes;
///
/// assert_eq!(merge_classes(["px-4 py-3", "px-1"]), "py-3 px-1");
/// ```
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<S> = parts.into_iter().collect();
    let tokens: Vec<&str> = parts
        .iter()
        .flat_map(|part| part.as_ref().split_whitespace())
        .collect();

    let mut claimed: HashSet<ConflictKey> = HashSet::new();
    let mut seen_unknown: HashSet<&str> = HashSet::new();
    let mut keep = vec![false; tokens.len()];

    for (index, token) in tokens.iter().enumerate().rev() {
        let parsed = ParsedClass::parse(token);
        match parsed.group {
            Some(group) => {
                let key = parsed.key(group);
                if claimed.contains(&key) {
                    continue;
                }
                for narrower in group.overrides() {
                    claimed.insert(parsed.key(*narrower));
                }
                claimed.insert(key);
                keep[index] = true;
            }
            None => {
                if seen_unknown.insert(*token) {
                    keep[index] = true;
                }
            }
        }
    }

    tokens
        .iter()
        .zip(keep)
        .filter_map(|(token, keep)| keep.then_some(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey {
    modifiers: String,
    important: bool,
    group: ClassGroup,
}

#[derive(Debug)]
struct ParsedClass {
    modifiers: String,
    important: bool,
    group: Option<ClassGroup>,
}

impl ParsedClass {
    fn parse(token: &str) -> Self {
        let mut segments = split_modifiers(token);
        let base = segments.pop().unwrap_or_default();
        segments.sort_unstable();

        let (important, base) = match base.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, base),
        };
        let base = base.strip_prefix('-').unwrap_or(base);

        Self {
            modifiers: segments.join(":"),
            important,
            group: classify(base),
        }
    }

    fn key(&self, group: ClassGroup) -> ConflictKey {
        ConflictKey {
            modifiers: self.modifiers.clone(),
            important: self.important,
            group,
        }
    }
}

/// Splits `hover:focus:bg-red` into `["hover", "focus", "bg-red"]`, ignoring colons nested in
/// arbitrary values such as `bg-[url(a:b)]`.
fn split_modifiers(token: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                segments.push(&token[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(&token[start..]);
    segments
}

fn classify(base: &str) -> Option<ClassGroup> {
    if DISPLAY.contains(&base) {
        return Some(ClassGroup::Display);
    }
    if POSITION.contains(&base) {
        return Some(ClassGroup::Position);
    }
    if base == "transition" || base.starts_with("transition-") {
        return Some(ClassGroup::Transition);
    }

    let (prefix, value) = base.split_once('-').unwrap_or((base, ""));
    match prefix {
        "border" => classify_border(value),
        "rounded" => classify_rounded(value),
        _ if value.is_empty() => None,
        "cursor" => Some(ClassGroup::Cursor),
        "items" => Some(ClassGroup::AlignItems),
        "justify" if value.starts_with("items-") || value.starts_with("self-") => None,
        "justify" => Some(ClassGroup::JustifyContent),
        "font" if FONT_WEIGHTS.contains(&value) => Some(ClassGroup::FontWeight),
        "font" => Some(ClassGroup::FontFamily),
        "text" => classify_text(value),
        "bg" => classify_background(value),
        "opacity" => Some(ClassGroup::Opacity),
        "w" => Some(ClassGroup::Width),
        "h" => Some(ClassGroup::Height),
        "p" => Some(ClassGroup::Padding),
        "px" => Some(ClassGroup::PaddingX),
        "py" => Some(ClassGroup::PaddingY),
        "pt" => Some(ClassGroup::PaddingTop),
        "pr" => Some(ClassGroup::PaddingRight),
        "pb" => Some(ClassGroup::PaddingBottom),
        "pl" => Some(ClassGroup::PaddingLeft),
        "m" => Some(ClassGroup::Margin),
        "mx" => Some(ClassGroup::MarginX),
        "my" => Some(ClassGroup::MarginY),
        "mt" => Some(ClassGroup::MarginTop),
        "mr" => Some(ClassGroup::MarginRight),
        "mb" => Some(ClassGroup::MarginBottom),
        "ml" => Some(ClassGroup::MarginLeft),
        _ => None,
    }
}

fn classify_text(value: &str) -> Option<ClassGroup> {
    if value.starts_with("opacity-") {
        Some(ClassGroup::TextOpacity)
    } else if is_font_size(value) {
        Some(ClassGroup::FontSize)
    } else if TEXT_ALIGN.contains(&value) {
        Some(ClassGroup::TextAlign)
    } else if TEXT_NON_COLOR.contains(&value) {
        None
    } else if let Some(inner) = arbitrary_value(value) {
        if looks_like_length(inner) {
            Some(ClassGroup::FontSize)
        } else {
            Some(ClassGroup::TextColor)
        }
    } else {
        Some(ClassGroup::TextColor)
    }
}

fn classify_background(value: &str) -> Option<ClassGroup> {
    if value.starts_with("opacity-") {
        Some(ClassGroup::BackgroundOpacity)
    } else if BACKGROUND_NON_COLOR.contains(&value)
        || value.starts_with("gradient-")
        || value.starts_with("clip-")
        || value.starts_with("origin-")
        || value.starts_with("blend-")
        || value.starts_with("[url(")
    {
        None
    } else {
        Some(ClassGroup::BackgroundColor)
    }
}

fn classify_border(value: &str) -> Option<ClassGroup> {
    if value.is_empty() || value.chars().all(|ch| ch.is_ascii_digit()) {
        return Some(ClassGroup::BorderWidth);
    }
    if BORDER_STYLES.contains(&value) {
        return Some(ClassGroup::BorderStyle);
    }
    let head = value.split('-').next().unwrap_or(value);
    if BORDER_SIDES.contains(&head)
        || value.starts_with("opacity-")
        || value == "collapse"
        || value == "separate"
    {
        return None;
    }
    match arbitrary_value(value) {
        Some(inner) if looks_like_length(inner) => Some(ClassGroup::BorderWidth),
        _ => Some(ClassGroup::BorderColor),
    }
}

fn classify_rounded(value: &str) -> Option<ClassGroup> {
    if value.is_empty() || RADIUS_SIZES.contains(&value) || arbitrary_value(value).is_some() {
        return Some(ClassGroup::Rounded);
    }
    match value.split('-').next() {
        Some("t") => Some(ClassGroup::RoundedTop),
        Some("r") => Some(ClassGroup::RoundedRight),
        Some("b") => Some(ClassGroup::RoundedBottom),
        Some("l") => Some(ClassGroup::RoundedLeft),
        Some("tl") => Some(ClassGroup::RoundedTopLeft),
        Some("tr") => Some(ClassGroup::RoundedTopRight),
        Some("br") => Some(ClassGroup::RoundedBottomRight),
        Some("bl") => Some(ClassGroup::RoundedBottomLeft),
        _ => None,
    }
}

fn is_font_size(value: &str) -> bool {
    if FONT_SIZES.contains(&value) {
        return true;
    }
    value
        .strip_suffix("xl")
        .is_some_and(|scale| !scale.is_empty() && scale.chars().all(|ch| ch.is_ascii_digit()))
}

fn arbitrary_value(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn looks_like_length(inner: &str) -> bool {
    inner.starts_with("length:")
        || inner
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_digit() || ch == '.')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_padding_axis_replaces_earlier_one() {
        assert_eq!(merge_classes(["py-3 px-4", "py-1 px-1"]), "py-1 px-1");
    }

    #[test]
    fn shorthand_padding_overrides_axes_but_not_the_reverse() {
        assert_eq!(merge_classes(["px-4 py-3 p-2"]), "p-2");
        assert_eq!(merge_classes(["p-2 px-4"]), "p-2 px-4");
        assert_eq!(merge_classes(["pt-1 pl-2 py-3"]), "pl-2 py-3");
    }

    #[test]
    fn text_size_and_text_color_do_not_conflict() {
        assert_eq!(
            merge_classes(["text-black text-md", "text-primary"]),
            "text-md text-primary"
        );
        assert_eq!(merge_classes(["text-gray-300 text-2xl text-sm"]), "text-gray-300 text-sm");
    }

    #[test]
    fn background_opacity_is_separate_from_background_color() {
        assert_eq!(
            merge_classes(["bg-primary bg-opacity-70", "bg-transparent"]),
            "bg-opacity-70 bg-transparent"
        );
    }

    #[test]
    fn text_opacity_is_separate_from_text_color() {
        assert_eq!(
            merge_classes(["text-red text-opacity-50"]),
            "text-red text-opacity-50"
        );
        assert_eq!(
            merge_classes(["text-opacity-50 text-primary text-opacity-75"]),
            "text-primary text-opacity-75"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes(["bg-red hover:bg-red", "hover:bg-primary"]),
            "bg-red hover:bg-primary"
        );
        assert_eq!(
            merge_classes(["hover:focus:text-red focus:hover:text-black"]),
            "focus:hover:text-black"
        );
    }

    #[test]
    fn border_width_style_and_color_are_independent() {
        assert_eq!(
            merge_classes(["border border-red border-solid", "border-2 border-primary"]),
            "border-solid border-2 border-primary"
        );
        assert_eq!(merge_classes(["border-x-2 border-4"]), "border-x-2 border-4");
    }

    #[test]
    fn font_weight_and_family_are_independent() {
        assert_eq!(
            merge_classes(["font-inter font-medium", "font-bold"]),
            "font-inter font-bold"
        );
    }

    #[test]
    fn cursor_display_and_position_keep_last() {
        assert_eq!(
            merge_classes([
                "cursor-pointer inline-flex relative",
                "cursor-not-allowed hidden absolute",
            ]),
            "cursor-not-allowed hidden absolute"
        );
    }

    #[test]
    fn rounded_shorthand_overrides_sides() {
        assert_eq!(merge_classes(["rounded-t-lg rounded-md"]), "rounded-md");
        assert_eq!(merge_classes(["rounded-md rounded-t-lg"]), "rounded-md rounded-t-lg");
        assert_eq!(merge_classes(["rounded rounded-full"]), "rounded-full");
    }

    #[test]
    fn rounded_corners_yield_to_wider_radius_utilities() {
        assert_eq!(merge_classes(["rounded-tl-lg rounded-md"]), "rounded-md");
        assert_eq!(
            merge_classes(["rounded-tr-lg rounded-bl-sm rounded-t-md"]),
            "rounded-bl-sm rounded-t-md"
        );
        assert_eq!(
            merge_classes(["rounded-md rounded-br-none"]),
            "rounded-md rounded-br-none"
        );
        assert_eq!(merge_classes(["rounded-bl-lg rounded-bl-none"]), "rounded-bl-none");
    }

    #[test]
    fn unknown_classes_are_kept_and_deduplicated() {
        assert_eq!(
            merge_classes(["button icon-slot", "button", "  "]),
            "icon-slot button"
        );
    }

    #[test]
    fn important_marker_scopes_conflicts() {
        assert_eq!(merge_classes(["!px-2 px-4"]), "!px-2 px-4");
        assert_eq!(merge_classes(["!px-2 !px-4"]), "!px-4");
    }

    #[test]
    fn arbitrary_values_are_classified() {
        assert_eq!(merge_classes(["text-sm text-[14px]"]), "text-[14px]");
        assert_eq!(merge_classes(["text-red text-[#ff0000]"]), "text-[#ff0000]");
        assert_eq!(merge_classes(["p-1 p-[3px]"]), "p-[3px]");
    }

    #[test]
    fn negative_margins_share_the_margin_group() {
        assert_eq!(merge_classes(["mt-2 -mt-1"]), "-mt-1");
    }

    #[test]
    fn colons_inside_arbitrary_values_are_not_modifiers() {
        assert_eq!(
            split_modifiers("hover:bg-[url(a:b)]"),
            vec!["hover", "bg-[url(a:b)]"]
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(merge_classes(Vec::<String>::new()), "");
        assert_eq!(merge_classes([""]), "");
    }
}
