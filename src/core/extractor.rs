//! Pulls property values for a detected component out of the prompt text.
//!
//! A single pattern template, parameterised by component keyword and property
//! alias, is compiled once per pair. The template is permissive on purpose:
//! it is unanchored, the first match anywhere in the text wins, and quotes
//! are not required to pair up.

use crate::core::catalog::{all_aliases, property_rules};
use crate::domain::model::{ComponentKind, PropertyBag};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled patterns for one component kind.
#[derive(Debug)]
struct KindPatterns {
    aliases: Vec<(&'static str, Regex)>,
    /// Matches "and <alias>" / ", <alias>" inside an unquoted capture.
    boundary: Option<Regex>,
}

/// All property patterns for the fixed catalog, built once per process.
#[derive(Debug)]
pub struct PropertyPatterns {
    kinds: Vec<KindPatterns>,
}

static PATTERNS: OnceLock<PropertyPatterns> = OnceLock::new();

/// Shared, lazily compiled pattern set.
pub fn patterns() -> &'static PropertyPatterns {
    PATTERNS.get_or_init(|| {
        // Only engine-owned literals (all escaped) go into these patterns.
        PropertyPatterns::build().expect("catalog patterns are valid regular expressions")
    })
}

/// Pattern source for `alias` under `keyword`.
///
/// `siblings` are the aliases of the same component; any run of
/// `sibling value and` clauses may sit between the keyword and `alias`,
/// which lets "hero with title 'A' and subtitle 'B'" reach `subtitle`.
fn pattern_source(keyword: &str, alias: &str, siblings: &[&str]) -> String {
    let continuation = if siblings.is_empty() {
        String::new()
    } else {
        let group = siblings
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        format!(
            r#"(?:(?:{group})[:\s]+(?:"[^"]*"|'[^']*'|[^"']+?)(?:\s*,\s*|\s+and\s+))*?"#
        )
    };

    format!(
        r#"(?i){keyword}\s+(?:(?:with|having)\s+)?{continuation}{alias}[:\s]+(["']?)([^"']+)["']?"#,
        keyword = regex::escape(keyword),
        alias = regex::escape(alias),
    )
}

fn boundary_source(siblings: &[&str]) -> String {
    let group = siblings
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)(?:\s*,\s*|\s+and\s+)(?:{group})\b")
}

fn capture(pattern: &Regex, boundary: Option<&Regex>, text: &str) -> Option<String> {
    let caps = pattern.captures(text)?;
    let quoted = caps.get(1).is_some_and(|q| !q.as_str().is_empty());
    let value = caps.get(2)?.as_str().trim();

    // An unquoted value runs on into the next clause; stop it there.
    if !quoted {
        if let Some(cut) = boundary.and_then(|b| b.find(value)) {
            let head = value[..cut.start()].trim_end().trim_end_matches(',').trim();
            if !head.is_empty() {
                return Some(head.to_string());
            }
        }
    }

    Some(value.to_string())
}

impl PropertyPatterns {
    pub fn build() -> Result<Self, regex::Error> {
        let mut kinds = Vec::with_capacity(ComponentKind::ALL.len());

        for kind in ComponentKind::ALL {
            let siblings = all_aliases(kind);
            let mut aliases = Vec::with_capacity(siblings.len());
            for alias in &siblings {
                let source = pattern_source(kind.as_str(), alias, &siblings);
                aliases.push((*alias, Regex::new(&source)?));
            }
            let boundary = if siblings.is_empty() {
                None
            } else {
                Some(Regex::new(&boundary_source(&siblings))?)
            };
            kinds.push(KindPatterns { aliases, boundary });
        }

        Ok(Self { kinds })
    }

    fn for_kind(&self, kind: ComponentKind) -> &KindPatterns {
        &self.kinds[kind as usize]
    }

    /// Value introduced by `alias` after the `kind` keyword, if any.
    ///
    /// Aliases outside the catalog are compiled on demand with the same template.
    pub fn extract(&self, text: &str, kind: ComponentKind, alias: &str) -> Option<String> {
        let patterns = self.for_kind(kind);
        if let Some((_, regex)) = patterns.aliases.iter().find(|(a, _)| *a == alias) {
            return capture(regex, patterns.boundary.as_ref(), text);
        }

        let regex = Regex::new(&pattern_source(kind.as_str(), alias, &[])).ok()?;
        capture(&regex, None, text)
    }

    /// Runs every property rule of `kind`; the first alias that matches wins.
    pub fn extract_all(&self, text: &str, kind: ComponentKind) -> PropertyBag {
        let mut bag = PropertyBag::new();

        for rule in property_rules(kind) {
            let value = rule
                .aliases
                .iter()
                .find_map(|alias| self.extract(text, kind, alias));

            match &value {
                Some(v) => tracing::debug!("{}.{} = {:?}", kind, rule.name, v),
                None => tracing::debug!("{}.{} not found", kind, rule.name),
            }
            bag.insert(rule.name, value);
        }

        bag
    }
}

/// Single property lookup against the shared pattern set.
pub fn extract_property(text: &str, kind: ComponentKind, alias: &str) -> Option<String> {
    patterns().extract(text, kind, alias)
}

/// Property bag for `kind`, with every rule name present (`None` when not found).
pub fn extract_properties(text: &str, kind: ComponentKind) -> PropertyBag {
    patterns().extract_all(text, kind)
}
