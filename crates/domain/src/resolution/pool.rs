//! Action pool calculation - totals and display formulas per matrix action.

use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::MatrixAction;
use crate::value_objects::{DeckStat, ResolvedStats};

use super::formula::resolve_formula;

/// One computed table row for a matrix action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRow {
    /// `"<limit>(<value>)"`, or `"(n/a)"` for limitless actions
    pub limit_display: String,
    /// `"Skill(v) + Attribute(v)"` plus every positive named bonus
    pub formula_display: String,
    pub total: i32,
}

/// Compute an action's dice-pool total and display strings.
///
/// `direct_bonuses` is the caller-supplied legacy bonus map, keyed by action
/// name and/or id string; both keys are honored and summed when present.
/// The contribution ledgers in `resolved` feed the total with every value,
/// negative included, while the formula string only renders positive ones.
///
/// Callers are expected to filter out inactive actions before computing rows.
pub fn compute_action_row(
    action: &MatrixAction,
    resolved: &ResolvedStats,
    direct_bonuses: &HashMap<String, i32>,
) -> ActionRow {
    let (skill_key, attribute_key) = resolve_formula(action, &resolved.replacements);
    let skill_val = resolved.skill(&skill_key);
    let attr_val = resolved.attribute(&attribute_key);

    let direct = direct_bonuses.get(&action.name).copied().unwrap_or(0)
        + direct_bonuses.get(action.id.as_str()).copied().unwrap_or(0);

    let details = resolved.details_for(&action.id);
    let detail_sum: i32 = details.iter().map(|c| c.value).sum();
    let global_sum: i32 = resolved
        .global_matrix_action_details
        .iter()
        .map(|c| c.value)
        .sum();

    let total = attr_val + skill_val + direct + detail_sum + global_sum;

    let formula_display = if action.formula.is_empty() {
        "N/a".to_string()
    } else {
        let mut formula = format!(
            "{}({}) + {}({})",
            format_component_name(&skill_key),
            skill_val,
            format_component_name(&attribute_key),
            attr_val
        );
        for contribution in details
            .iter()
            .chain(resolved.global_matrix_action_details.iter())
        {
            if contribution.value > 0 {
                formula.push_str(&format!(" + {}({})", contribution.name, contribution.value));
            }
        }
        formula
    };

    let limit_display = match action.limit.as_deref() {
        Some(limit) => {
            let value = DeckStat::from_str(limit)
                .map(|stat| resolved.deck_stats.get(stat))
                .unwrap_or(0);
            format!("{}({})", limit, value)
        }
        None => "(n/a)".to_string(),
    };

    ActionRow {
        limit_display,
        formula_display,
        total,
    }
}

/// Render a formula component key for humans.
///
/// camelCase keys gain spaces and an initial capital; the empty key (absent
/// formula component) renders as `"?"`. `electronicWarfare` keeps its
/// traditional short form.
pub fn format_component_name(name: &str) -> String {
    if name.is_empty() {
        return "?".to_string();
    }
    if name == "electronicWarfare" {
        return "E.War".to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ActionId;
    use crate::value_objects::{BaseStats, Contribution, DeckStats, OriginKind, Replacement};

    fn resolved() -> ResolvedStats {
        ResolvedStats::from_base(
            &BaseStats::new()
                .with_attribute("logic", 5)
                .with_attribute("intuition", 4)
                .with_skill("hacking", 3)
                .with_skill("cybercombat", 6)
                .with_deck_stats(DeckStats::new(2, 3, 4, 5)),
        )
    }

    fn action() -> MatrixAction {
        MatrixAction::new("brute-force", "Brute Force")
            .with_formula("hacking", "logic")
            .with_limit("attack")
    }

    #[test]
    fn plain_pool_is_attribute_plus_skill() {
        let row = compute_action_row(&action(), &resolved(), &HashMap::new());
        assert_eq!(row.total, 8);
        assert_eq!(row.formula_display, "Hacking(3) + Logic(5)");
        assert_eq!(row.limit_display, "attack(2)");
    }

    #[test]
    fn limit_lookup_is_case_insensitive_but_keeps_spelling() {
        let action = action().with_limit("Data Processing");
        let row = compute_action_row(&action, &resolved(), &HashMap::new());
        assert_eq!(row.limit_display, "Data Processing(4)");
    }

    #[test]
    fn unknown_limit_resolves_to_zero() {
        let action = action().with_limit("armor");
        let row = compute_action_row(&action, &resolved(), &HashMap::new());
        assert_eq!(row.limit_display, "armor(0)");
    }

    #[test]
    fn limitless_action_renders_na() {
        let mut action = action();
        action.limit = None;
        let row = compute_action_row(&action, &resolved(), &HashMap::new());
        assert_eq!(row.limit_display, "(n/a)");
    }

    #[test]
    fn empty_formula_renders_na_but_counts_bonuses() {
        let mut resolved = resolved();
        resolved.global_matrix_action_details.push(Contribution::new(
            "Hot Sim",
            2,
            OriginKind::Program,
        ));
        let action = MatrixAction::new("odd", "Odd");
        let row = compute_action_row(&action, &resolved, &HashMap::new());
        assert_eq!(row.formula_display, "N/a");
        assert_eq!(row.total, 2);
    }

    #[test]
    fn replacement_redirects_the_skill_lookup() {
        let mut resolved = resolved();
        resolved
            .replacements
            .push(Replacement::new("hacking", "cybercombat"));

        let row = compute_action_row(&action(), &resolved, &HashMap::new());
        assert_eq!(row.total, 11); // cybercombat 6 + logic 5
        assert_eq!(row.formula_display, "Cybercombat(6) + Logic(5)");
    }

    #[test]
    fn direct_bonuses_sum_name_and_id_keys() {
        let mut bonuses = HashMap::new();
        bonuses.insert("Brute Force".to_string(), 1);
        bonuses.insert("brute-force".to_string(), 2);

        let row = compute_action_row(&action(), &resolved(), &bonuses);
        assert_eq!(row.total, 11);
    }

    #[test]
    fn targeted_details_feed_total_and_formula() {
        let mut resolved = resolved();
        resolved.add_targeted(
            ActionId::new("brute-force"),
            Contribution::new("Codeslinger", 2, OriginKind::Quality),
        );

        let row = compute_action_row(&action(), &resolved, &HashMap::new());
        assert_eq!(row.total, 10);
        assert_eq!(
            row.formula_display,
            "Hacking(3) + Logic(5) + Codeslinger(2)"
        );
    }

    #[test]
    fn global_details_raise_every_row() {
        let mut resolved = resolved();
        resolved
            .global_matrix_action_details
            .push(Contribution::new("Hot Sim", 2, OriginKind::Program));
        resolved
            .global_matrix_action_details
            .push(Contribution::new("Overclock", 2, OriginKind::Program));

        let brute = compute_action_row(&action(), &resolved, &HashMap::new());
        assert_eq!(brute.total, 12);
        assert_eq!(
            brute.formula_display,
            "Hacking(3) + Logic(5) + Hot Sim(2) + Overclock(2)"
        );

        let search = MatrixAction::new("matrix-search", "Matrix Search")
            .with_formula("cybercombat", "intuition");
        let row = compute_action_row(&search, &resolved, &HashMap::new());
        assert_eq!(row.total, 14); // 6 + 4 + 2 + 2
    }

    #[test]
    fn negative_contributions_count_but_stay_hidden() {
        let mut resolved = resolved();
        resolved.add_targeted(
            ActionId::new("brute-force"),
            Contribution::new("Link-Lock", -2, OriginKind::Quality),
        );

        let row = compute_action_row(&action(), &resolved, &HashMap::new());
        assert_eq!(row.total, 6);
        assert_eq!(row.formula_display, "Hacking(3) + Logic(5)");
    }

    #[test]
    fn component_names_render_for_humans() {
        assert_eq!(format_component_name(""), "?");
        assert_eq!(format_component_name("hacking"), "Hacking");
        assert_eq!(format_component_name("dataProcessing"), "Data Processing");
        assert_eq!(format_component_name("electronicWarfare"), "E.War");
    }
}
