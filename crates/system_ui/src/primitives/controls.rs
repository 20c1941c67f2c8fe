use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use super::*;

/// Attribute names the icon button owns; pass-through attributes using them are dropped.
pub const RESERVED_ATTRIBUTES: &[&str] = &["type", "aria-label", "class"];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Attributes [`IconButton`] computes from its props on every render.
pub struct IconButtonAttrs {
    /// Merged class string.
    pub class: String,
    /// Accessible label, copied verbatim from the required prop.
    pub aria_label: String,
    /// Native `disabled` attribute.
    pub disabled: bool,
    /// `aria-disabled` token, driven by the same flag as `disabled`.
    pub aria_disabled: &'static str,
}

impl IconButtonAttrs {
    /// Value of the `type` attribute. Icon buttons never submit an enclosing form.
    pub const BUTTON_TYPE: &'static str = "button";

    /// Computes the explicit attributes for `style`, merging `class` over the variant classes.
    pub fn new(style: &IconButtonStyle, aria_label: &str, class: Option<&str>) -> Self {
        Self {
            class: style.class_name(class),
            aria_label: aria_label.to_string(),
            disabled: style.is_disabled,
            aria_disabled: bool_token(style.is_disabled),
        }
    }
}

pub(crate) fn retain_passthrough<T>(attributes: Vec<(&'static str, T)>) -> Vec<(&'static str, T)> {
    attributes
        .into_iter()
        .filter(|(name, _)| {
            let reserved = RESERVED_ATTRIBUTES
                .iter()
                .any(|reserved| reserved.eq_ignore_ascii_case(name));
            if reserved {
                logging::warn!("icon button ignores pass-through `{name}` attribute");
            }
            !reserved
        })
        .collect()
}

#[component]
/// Icon-only button with variant-driven classes and a required accessible label.
///
/// `is_disabled` drives the disabled styling, the native `disabled` attribute and
/// `aria-disabled` together. Extra native attributes are spread after the computed ones, except
/// the names in [`RESERVED_ATTRIBUTES`].
pub fn IconButton(
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] color_schema: ColorSchema,
    #[prop(optional)] variant: IconButtonVariant,
    #[prop(optional)] size: IconButtonSize,
    #[prop(default = true)] is_rounded: bool,
    #[prop(optional, into)] is_disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let attrs = create_memo(move |_| {
        let style = IconButtonStyle {
            color_schema,
            variant,
            size,
            is_rounded,
            is_disabled: is_disabled.get(),
        };
        IconButtonAttrs::new(&style, &aria_label.get(), class.as_deref())
    });
    let passthrough = retain_passthrough(attributes);

    view! {
        <button
            node_ref=node_ref
            type=IconButtonAttrs::BUTTON_TYPE
            class=move || attrs.with(|attrs| attrs.class.clone())
            aria-label=move || attrs.with(|attrs| attrs.aria_label.clone())
            disabled=move || attrs.with(|attrs| attrs.disabled)
            aria-disabled=move || attrs.with(|attrs| attrs.aria_disabled)
            title=title
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-color=color_schema.token()
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-rounded=bool_token(is_rounded)
            data-ui-disabled=move || attrs.with(|attrs| attrs.aria_disabled)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            {..passthrough}
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn delete_item_example_renders_red_small_square_outline() {
        let style = IconButtonStyle {
            color_schema: ColorSchema::Danger,
            variant: IconButtonVariant::Outline,
            size: IconButtonSize::Sm,
            is_rounded: false,
            ..IconButtonStyle::default()
        };
        let attrs = IconButtonAttrs::new(&style, "Delete item", None);
        let classes: Vec<&str> = attrs.class.split(' ').collect();

        assert_eq!(attrs.aria_label, "Delete item");
        assert!(!attrs.disabled);
        assert_eq!(attrs.aria_disabled, "false");
        for expected in [
            "border-red",
            "border-2",
            "text-red",
            "hover:bg-red",
            "text-sm",
            "py-2",
            "px-3",
        ] {
            assert!(classes.contains(&expected), "missing {expected} in {}", attrs.class);
        }
        assert!(!classes.contains(&"rounded-md"));
    }

    #[test]
    fn disabled_flag_sets_both_disabled_attributes_for_every_style() {
        for &color_schema in ColorSchema::ALL {
            for &variant in IconButtonVariant::ALL {
                for &size in IconButtonSize::ALL {
                    let style = IconButtonStyle {
                        color_schema,
                        variant,
                        size,
                        is_disabled: true,
                        ..IconButtonStyle::default()
                    };
                    let attrs = IconButtonAttrs::new(&style, "Close", None);

                    assert!(attrs.disabled, "{style:?}");
                    assert_eq!(attrs.aria_disabled, "true", "{style:?}");
                }
            }
        }
    }

    #[test]
    fn aria_label_is_copied_verbatim() {
        let label = "  Öffnen <menu> & more ";
        let attrs = IconButtonAttrs::new(&IconButtonStyle::default(), label, None);

        assert_eq!(attrs.aria_label, label);
    }

    #[test]
    fn caller_class_is_merged_last() {
        let attrs = IconButtonAttrs::new(&IconButtonStyle::default(), "Edit", Some("p-0"));

        assert!(attrs.class.ends_with(" p-0"));
        assert!(!attrs.class.contains("px-4"));
        assert!(!attrs.class.contains("py-3"));
    }

    #[test]
    fn reserved_attributes_cannot_be_passed_through() {
        let attributes = vec![
            ("aria-label", "Sneaky"),
            ("data-testid", "delete"),
            ("type", "submit"),
            ("Class", "hijack"),
            ("tabindex", "-1"),
            ("aria-disabled", "false"),
        ];

        assert_eq!(
            retain_passthrough(attributes),
            vec![
                ("data-testid", "delete"),
                ("tabindex", "-1"),
                ("aria-disabled", "false"),
            ]
        );
    }

    #[test]
    fn button_type_never_submits() {
        assert_eq!(IconButtonAttrs::BUTTON_TYPE, "button");
    }
}
