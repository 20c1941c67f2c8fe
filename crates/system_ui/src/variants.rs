//! Variant tables that turn a style configuration into a merged class string.
//!
//! A table holds a base class list shared by every configuration, one lookup per style
//! dimension, and an ordered list of compound rules that fire when several dimensions match at
//! once. Resolution appends base, dimension and compound fragments (in that order) followed by
//! the caller's own classes, then hands the list to [`merge_classes`].

use std::fmt;

use crate::class_merge::merge_classes;

/// One style dimension of a variant table.
pub struct VariantDimension<C: 'static> {
    /// Dimension name as it appears in design tokens (for example `colorSchema`).
    pub name: &'static str,
    /// Returns the classes this dimension contributes for a configuration, possibly empty.
    pub lookup: fn(&C) -> &'static str,
}

/// Conditional classes applied when a predicate over several dimensions holds.
///
/// Rules are not mutually exclusive: every matching rule contributes, in declaration order.
pub struct CompoundRule<C: 'static> {
    /// Predicate over the configuration.
    pub when: fn(&C) -> bool,
    /// Classes appended when `when` matches.
    pub class: &'static str,
}

/// Static description of a component's class variants.
pub struct ClassVariants<C: 'static> {
    base: &'static [&'static str],
    dimensions: &'static [VariantDimension<C>],
    compounds: &'static [CompoundRule<C>],
}

impl<C: 'static> ClassVariants<C> {
    /// Builds a table from static parts; usable in `static` items.
    pub const fn new(
        base: &'static [&'static str],
        dimensions: &'static [VariantDimension<C>],
        compounds: &'static [CompoundRule<C>],
    ) -> Self {
        Self {
            base,
            dimensions,
            compounds,
        }
    }

    /// Returns the ordered, unmerged fragment list for `config`.
    ///
    /// Caller classes, when present, come last so they take precedence during merging.
    pub fn fragments<'a>(&self, config: &C, class: Option<&'a str>) -> ClassFragments<'a> {
        let mut fragments = ClassFragments::default();
        for base in self.base {
            fragments.append(base);
        }
        for dimension in self.dimensions {
            fragments.append((dimension.lookup)(config));
        }
        for rule in self.compounds.iter().filter(|rule| (rule.when)(config)) {
            fragments.append(rule.class);
        }
        if let Some(class) = class {
            fragments.append(class);
        }
        fragments
    }

    /// Resolves `config` (plus optional caller classes) to a merged class string.
    pub fn resolve(&self, config: &C, class: Option<&str>) -> String {
        merge_classes(self.fragments(config, class).iter())
    }

    /// Names of the table's dimensions in lookup order.
    pub fn dimension_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.dimensions.iter().map(|dimension| dimension.name)
    }
}

impl<C: 'static> fmt::Debug for ClassVariants<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassVariants")
            .field("base", &self.base)
            .field("dimensions", &self.dimension_names().collect::<Vec<_>>())
            .field("compounds", &self.compounds.len())
            .finish()
    }
}

/// Ordered class tokens collected during one resolution, before merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFragments<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ClassFragments<'a> {
    fn append(&mut self, classes: &'a str) {
        self.tokens.extend(classes.split_whitespace());
    }

    /// Iterates tokens in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.tokens.iter().copied()
    }

    /// Tokens in resolution order.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }

    /// Whether `token` appears anywhere in the list.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|candidate| *candidate == token)
    }

    /// Number of tokens collected.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens were collected.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
