//! Plain-text rendering of calculation results

use std::fmt::Write;

use crate::party::{Character, MonsterGroup};
use crate::save::SavedCalculation;
use crate::xp::CalculationResult;

/// Full breakdown of a result, one block per character
pub fn render_result(result: &CalculationResult, characters: &[Character], monsters: &[MonsterGroup]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Party hit dice:    {:.2} (average level {:.2})", result.total_party_hit_dice, result.average_party_level);
    let _ = writeln!(out, "Monster hit dice:  {:.2}", result.total_monster_hit_dice);
    let _ = writeln!(out, "Total XP:          {}", result.total_xp);
    let _ = writeln!(out, "XP per character:  {:.2}", result.xp_per_character);
    let _ = writeln!(out, "Adjustment:        {:.2}", result.adjustment_factor);

    for share in &result.characters {
        let name = characters
            .iter()
            .find(|c| c.id() == share.character_id)
            .map(Character::display_name)
            .unwrap_or_else(|| format!("Character {}", share.character_id));

        let _ = writeln!(out);
        let _ = writeln!(out, "{} (HD {:.2}): {} XP", name, share.effective_hit_dice, share.adjusted_xp);

        for contribution in &share.contributions {
            let group = monsters
                .iter()
                .find(|g| g.id() == contribution.monster_group_id)
                .map(MonsterGroup::display_name)
                .unwrap_or_else(|| format!("Monster group {}", contribution.monster_group_id));
            let _ = writeln!(
                out,
                "  {:<24} {:>9.2} x {:.2} = {}",
                group, contribution.base_share, contribution.adjustment_factor, contribution.adjusted_xp
            );
        }

        if share.remainder_bonus > 0 {
            let _ = writeln!(out, "  {:<24} + {}", "remainder", share.remainder_bonus);
        }
    }

    out
}

/// One line per saved calculation
pub fn render_history(saved: &[SavedCalculation]) -> String {
    if saved.is_empty() {
        return "No saved calculations.\n".to_string();
    }

    let mut out = String::new();
    for calc in saved {
        let _ = writeln!(
            out,
            "{:<16} {}  {} characters, {} monster groups, {} XP",
            calc.id(),
            calc.created_at().format("%Y-%m-%d %H:%M"),
            calc.characters().len(),
            calc.monsters().len(),
            calc.result().total_xp
        );
    }
    out
}
