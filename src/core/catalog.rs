//! Fixed vocabulary of the extraction engine: which words announce a
//! component and which property names are tried for it.

use crate::domain::model::ComponentKind;

/// One output property and the words that may introduce its value in a
/// prompt, most preferred first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRule {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

const fn rule(name: &'static str, aliases: &'static [&'static str]) -> PropertyRule {
    PropertyRule { name, aliases }
}

const BUTTON_RULES: &[PropertyRule] = &[rule("label", &["label", "text"])];
const INPUT_RULES: &[PropertyRule] = &[rule("placeholder", &["placeholder"])];
const CARD_RULES: &[PropertyRule] = &[rule("title", &["title"]), rule("content", &["content", "text"])];
const NAVBAR_RULES: &[PropertyRule] = &[rule("title", &["title"])];
const FORM_RULES: &[PropertyRule] = &[rule("submitText", &["submit", "button"])];
const HERO_RULES: &[PropertyRule] = &[
    rule("title", &["title"]),
    rule("subtitle", &["subtitle"]),
    rule("buttonText", &["button"]),
];
const TESTIMONIAL_RULES: &[PropertyRule] = &[
    rule("quote", &["quote", "text"]),
    rule("author", &["author", "name"]),
];

/// Words whose case-insensitive presence anywhere in the prompt marks the kind as present.
pub const fn trigger_words(kind: ComponentKind) -> &'static [&'static str] {
    match kind {
        ComponentKind::Button => &["button"],
        ComponentKind::Input => &["input"],
        ComponentKind::Card => &["card"],
        ComponentKind::Navbar => &["navbar", "navigation"],
        ComponentKind::Form => &["form"],
        ComponentKind::Hero => &["hero"],
        ComponentKind::Gallery => &["gallery", "image"],
        ComponentKind::Testimonial => &["testimonial", "review"],
    }
}

pub const fn property_rules(kind: ComponentKind) -> &'static [PropertyRule] {
    match kind {
        ComponentKind::Button => BUTTON_RULES,
        ComponentKind::Input => INPUT_RULES,
        ComponentKind::Card => CARD_RULES,
        ComponentKind::Navbar => NAVBAR_RULES,
        ComponentKind::Form => FORM_RULES,
        ComponentKind::Hero => HERO_RULES,
        ComponentKind::Gallery => &[],
        ComponentKind::Testimonial => TESTIMONIAL_RULES,
    }
}

/// Every alias of every property of `kind`, in rule order, without duplicates.
pub fn all_aliases(kind: ComponentKind) -> Vec<&'static str> {
    let mut aliases: Vec<&'static str> = Vec::new();
    for alias in property_rules(kind).iter().flat_map(|r| r.aliases.iter().copied()) {
        if !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }
    aliases
}

/// Words that steer the fallback towards a hero section.
pub const HERO_FALLBACK_WORDS: &[&str] = &["welcome", "landing"];

pub const HERO_FALLBACK_TITLE: &str = "Welcome";
pub const CARD_FALLBACK_TITLE: &str = "Generated Content";
