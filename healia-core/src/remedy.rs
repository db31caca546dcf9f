//! Herbal remedy catalog
//!
//! One canonical record per [`Condition`]: the remedies to choose from and the
//! tip the wellness plan shows for that condition. A separate table holds a
//! descriptive tip for every herb.
//!
//! The catalog is built once and never mutated. [`CatalogBuilder::build`]
//! rejects a catalog where a condition has no remedies, lists a remedy twice,
//! or names a remedy that has no herb tip.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::random::{self, RandomSource};
use crate::types::Condition;

/// Shown after every remedy suggestion.
pub const HEALTHCARE_DISCLAIMER: &str =
    "Always consult a healthcare professional before starting herbal treatments.";

/// Remedies and plan tip for one condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionRecord {
    remedies: Vec<String>,
    tip: String,
}

impl ConditionRecord {
    /// Remedies in catalog order
    pub fn remedies(&self) -> &[String] {
        &self.remedies
    }

    /// Tip appended to the wellness plan
    pub fn tip(&self) -> &str {
        &self.tip
    }
}

/// A randomly chosen remedy for a condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemedySuggestion {
    pub condition: Condition,
    pub remedy: String,
    /// Herb tip; always present for a validated catalog
    pub tip: Option<String>,
}

/// Result of a herb lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HerbInfo {
    /// Canonical herb name as stored in the catalog
    pub name: String,
    pub tip: String,
}

#[derive(Debug, Clone)]
struct HerbTip {
    name: String,
    tip: String,
}

/// Immutable condition → remedy lookup.
#[derive(Debug, Clone)]
pub struct RemedyCatalog {
    conditions: BTreeMap<Condition, ConditionRecord>,
    /// Keyed by title-cased herb name
    herbs: BTreeMap<String, HerbTip>,
}

impl RemedyCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The built-in catalog.
    pub fn standard() -> Result<Self> {
        Self::builder()
            .condition(
                Condition::Headache,
                &["Ginger tea", "Willow bark", "Peppermint oil"],
                "💧 Stay hydrated and try ginger tea or peppermint oil.",
            )
            .condition(
                Condition::Anxiety,
                &["Chamomile", "Ashwagandha", "Valerian root"],
                "🌿 Consider chamomile tea or ashwagandha supplements.",
            )
            .condition(
                Condition::Insomnia,
                &["Lavender", "Lemon balm", "Passionflower"],
                "🌙 Use lavender essential oil or lemon balm before bed.",
            )
            .condition(
                Condition::Indigestion,
                &["Peppermint", "Ginger", "Fennel seeds"],
                "🍵 Drink fennel seed tea after meals.",
            )
            .condition(
                Condition::Cold,
                &["Echinacea", "Ginger", "Elderberry"],
                "🍯 Take elderberry syrup and rest well.",
            )
            .herb(
                "Ginger tea",
                "Ginger helps reduce inflammation and ease nausea.",
            )
            .herb(
                "Willow bark",
                "Often called 'natural aspirin', good for relieving pain.",
            )
            .herb("Peppermint oil", "Used for headaches and digestive relief.")
            .herb(
                "Chamomile",
                "Chamomile is commonly used to relax the mind and aid sleep.",
            )
            .herb(
                "Ashwagandha",
                "An adaptogen that helps the body cope with stress.",
            )
            .herb(
                "Valerian root",
                "Promotes relaxation and can help with sleep.",
            )
            .herb("Lavender", "Lavender can reduce anxiety and promote calm.")
            .herb(
                "Lemon balm",
                "A calming herb, often used for anxiety and sleep.",
            )
            .herb(
                "Passionflower",
                "Used for insomnia, anxiety, and nervous disorders.",
            )
            .herb(
                "Peppermint",
                "Peppermint relaxes the digestive tract and eases bloating.",
            )
            .herb(
                "Ginger",
                "Ginger settles the stomach and warms the body during a cold.",
            )
            .herb(
                "Fennel seeds",
                "Great for relieving bloating and indigestion.",
            )
            .herb("Echinacea", "Boosts the immune system and fights infections.")
            .herb("Elderberry", "Popular for fighting cold and flu symptoms.")
            .build()
    }

    /// Conditions present in the catalog, in selector order.
    pub fn conditions(&self) -> impl Iterator<Item = Condition> + '_ {
        self.conditions.keys().copied()
    }

    pub fn record(&self, condition: Condition) -> Option<&ConditionRecord> {
        self.conditions.get(&condition)
    }

    pub fn remedies(&self, condition: Condition) -> &[String] {
        self.record(condition)
            .map(ConditionRecord::remedies)
            .unwrap_or(&[])
    }

    /// Tip the wellness plan shows for a condition.
    pub fn condition_tip(&self, condition: Condition) -> Option<&str> {
        self.record(condition).map(ConditionRecord::tip)
    }

    /// Descriptive tip for a herb. The name is title-cased before the lookup.
    pub fn herb_tip(&self, name: &str) -> Option<&str> {
        self.herbs
            .get(&title_case(name))
            .map(|h| h.tip.as_str())
    }

    /// Suggest one remedy for a condition, chosen uniformly at random.
    pub fn suggest(
        &self,
        condition: Condition,
        rng: &mut dyn RandomSource,
    ) -> Result<RemedySuggestion> {
        let record = self
            .record(condition)
            .ok_or_else(|| Error::UnknownCondition(condition.as_str().to_string()))?;

        let remedy = random::choose(rng, &record.remedies)
            .cloned()
            .ok_or_else(|| {
                Error::Catalog(format!("no remedy drawn for {}", condition.as_str()))
            })?;
        let tip = self.herb_tip(&remedy).map(str::to_string);

        tracing::debug!(condition = %condition, remedy = %remedy, "Suggested remedy");

        Ok(RemedySuggestion {
            condition,
            remedy,
            tip,
        })
    }

    /// Suggest a remedy for a condition given as a raw key.
    pub fn suggest_by_key(&self, key: &str, rng: &mut dyn RandomSource) -> Result<RemedySuggestion> {
        let condition: Condition = key.parse()?;
        self.suggest(condition, rng)
    }

    /// Look up a herb by name.
    ///
    /// The query is trimmed and title-cased, so "lemon BALM" finds "Lemon balm".
    pub fn lookup_by_name(&self, query: &str) -> Result<HerbInfo> {
        let query = query.trim();
        self.herbs
            .get(&title_case(query))
            .map(|h| HerbInfo {
                name: h.name.clone(),
                tip: h.tip.clone(),
            })
            .ok_or_else(|| Error::NotFound(query.to_string()))
    }
}

/// Builder that validates catalog invariants on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    conditions: Vec<(Condition, Vec<String>, String)>,
    herbs: Vec<(String, String)>,
}

impl CatalogBuilder {
    pub fn condition(mut self, condition: Condition, remedies: &[&str], tip: &str) -> Self {
        self.conditions.push((
            condition,
            remedies.iter().map(|r| r.to_string()).collect(),
            tip.to_string(),
        ));
        self
    }

    pub fn herb(mut self, name: &str, tip: &str) -> Self {
        self.herbs.push((name.to_string(), tip.to_string()));
        self
    }

    pub fn build(self) -> Result<RemedyCatalog> {
        let mut herbs = BTreeMap::new();
        for (name, tip) in self.herbs {
            let key = title_case(&name);
            if herbs.contains_key(&key) {
                return Err(Error::Catalog(format!("herb '{}' listed twice", name)));
            }
            herbs.insert(key, HerbTip { name, tip });
        }

        let mut conditions = BTreeMap::new();
        for (condition, remedies, tip) in self.conditions {
            if conditions.contains_key(&condition) {
                return Err(Error::Catalog(format!(
                    "condition '{}' defined twice",
                    condition
                )));
            }
            if remedies.is_empty() {
                return Err(Error::Catalog(format!(
                    "condition '{}' has no remedies",
                    condition
                )));
            }

            let mut seen = HashSet::new();
            for remedy in &remedies {
                let key = title_case(remedy);
                if !seen.insert(key.clone()) {
                    return Err(Error::Catalog(format!(
                        "condition '{}' lists '{}' twice",
                        condition, remedy
                    )));
                }
                if !herbs.contains_key(&key) {
                    return Err(Error::Catalog(format!(
                        "remedy '{}' for '{}' has no herb tip",
                        remedy, condition
                    )));
                }
            }

            conditions.insert(condition, ConditionRecord { remedies, tip });
        }

        tracing::debug!(
            conditions = conditions.len(),
            herbs = herbs.len(),
            "Remedy catalog built"
        );

        Ok(RemedyCatalog { conditions, herbs })
    }
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts after any non-alphabetic character.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
