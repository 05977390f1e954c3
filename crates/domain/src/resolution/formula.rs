//! Formula resolution - applying replacement rules to action formulas.

use crate::entities::MatrixAction;
use crate::value_objects::Replacement;

/// Resolve the effective `(skill_key, attribute_key)` pair for an action.
///
/// Starts from the action's raw formula components (empty string when the
/// formula is short) and walks the replacement list exactly once, left to
/// right: whenever the current skill key equals a rule's `from` it becomes
/// that rule's `to`, and the attribute key is rewritten independently by the
/// same check. The list is never re-walked, so there is no fixed-point
/// iteration; a later rule can only see what the earlier rules left behind
/// in this single pass.
pub fn resolve_formula(action: &MatrixAction, replacements: &[Replacement]) -> (String, String) {
    let mut skill_key = action.skill_key().to_string();
    let mut attribute_key = action.attribute_key().to_string();

    for replacement in replacements {
        if skill_key == replacement.from {
            skill_key = replacement.to.clone();
        }
        if attribute_key == replacement.from {
            attribute_key = replacement.to.clone();
        }
    }

    (skill_key, attribute_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action() -> MatrixAction {
        MatrixAction::new("brute-force", "Brute Force").with_formula("hacking", "logic")
    }

    #[test]
    fn no_replacements_returns_raw_components() {
        let (skill, attr) = resolve_formula(&action(), &[]);
        assert_eq!(skill, "hacking");
        assert_eq!(attr, "logic");
    }

    #[test]
    fn missing_components_resolve_to_empty() {
        let sparse = MatrixAction::new("odd", "Odd");
        let (skill, attr) = resolve_formula(&sparse, &[Replacement::new("hacking", "cybercombat")]);
        assert_eq!(skill, "");
        assert_eq!(attr, "");
    }

    #[test]
    fn skill_and_attribute_rewrite_independently() {
        let rules = vec![
            Replacement::new("hacking", "cybercombat"),
            Replacement::new("logic", "intuition"),
        ];
        let (skill, attr) = resolve_formula(&action(), &rules);
        assert_eq!(skill, "cybercombat");
        assert_eq!(attr, "intuition");
    }

    #[test]
    fn single_pass_applies_rules_in_list_order() {
        // The second rule sees the first rule's output within the same pass,
        // but the list is walked only once.
        let rules = vec![
            Replacement::new("hacking", "cybercombat"),
            Replacement::new("cybercombat", "software"),
        ];
        let (skill, _) = resolve_formula(&action(), &rules);
        assert_eq!(skill, "software");

        // Reversed order: the chain never forms
        let rules = vec![
            Replacement::new("cybercombat", "software"),
            Replacement::new("hacking", "cybercombat"),
        ];
        let (skill, _) = resolve_formula(&action(), &rules);
        assert_eq!(skill, "cybercombat");
    }
}
