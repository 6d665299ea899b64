//! Built-in sample skill trees, used when the data store returns no definitions

use super::SkillRow;
use serde_json::json;

struct SampleSkill {
    id: &'static str,
    name: &'static str,
    tree: &'static str,
    tier: u32,
    category: &'static str,
    prerequisites: &'static [&'static str],
    max_rank: u32,
    /// (effect type, target, value)
    effects: &'static [(&'static str, &'static str, f64)],
}

const SAMPLE_SKILLS: &[SampleSkill] = &[
    // === Combat ===
    SampleSkill { id: "combat_sword_path", name: "Path of the Sword", tree: "combat", tier: 1, category: "active", prerequisites: &[], max_rank: 5, effects: &[("ability_unlock", "power_strike", 1.0)] },
    SampleSkill { id: "combat_toughness", name: "Toughness", tree: "combat", tier: 1, category: "passive", prerequisites: &[], max_rank: 3, effects: &[("stat_bonus", "health", 10.0)] },
    SampleSkill { id: "combat_whirlwind", name: "Whirlwind", tree: "combat", tier: 2, category: "active", prerequisites: &["combat_sword_path"], max_rank: 5, effects: &[("ability_unlock", "whirlwind", 1.0)] },
    SampleSkill { id: "combat_weapon_focus", name: "Weapon Focus", tree: "combat", tier: 2, category: "passive", prerequisites: &["combat_sword_path"], max_rank: 3, effects: &[("stat_bonus", "attack_damage", 2.0), ("stat_bonus", "crit_chance", 1.0)] },
    SampleSkill { id: "combat_berserker", name: "Berserker", tree: "combat", tier: 3, category: "ultimate", prerequisites: &["combat_whirlwind", "combat_weapon_focus"], max_rank: 3, effects: &[("ability_unlock", "berserker_rage", 1.0)] },
    // === Magic ===
    SampleSkill { id: "magic_fire_path", name: "Path of Flame", tree: "magic", tier: 1, category: "active", prerequisites: &[], max_rank: 5, effects: &[("ability_unlock", "fireball", 1.0)] },
    SampleSkill { id: "magic_mana_well", name: "Mana Well", tree: "magic", tier: 1, category: "passive", prerequisites: &[], max_rank: 3, effects: &[("stat_bonus", "mana", 10.0), ("stat_bonus", "mana_regen", 1.0)] },
    SampleSkill { id: "magic_frost_path", name: "Path of Frost", tree: "magic", tier: 2, category: "active", prerequisites: &["magic_fire_path"], max_rank: 5, effects: &[("ability_unlock", "ice_shard", 1.0)] },
    SampleSkill { id: "magic_restoration", name: "Restoration", tree: "magic", tier: 2, category: "active", prerequisites: &["magic_mana_well"], max_rank: 5, effects: &[("ability_unlock", "healing_touch", 1.0)] },
    SampleSkill { id: "magic_meteor", name: "Meteor", tree: "magic", tier: 3, category: "ultimate", prerequisites: &["magic_frost_path", "magic_restoration"], max_rank: 3, effects: &[("ability_unlock", "meteor_strike", 1.0)] },
    // === Crafting ===
    SampleSkill { id: "crafting_gathering", name: "Gathering", tree: "crafting", tier: 1, category: "passive", prerequisites: &[], max_rank: 3, effects: &[("stat_bonus", "movement_speed", 1.0)] },
    SampleSkill { id: "crafting_smithing", name: "Smithing", tree: "crafting", tier: 1, category: "active", prerequisites: &[], max_rank: 3, effects: &[("ability_unlock", "field_repair", 1.0)] },
    SampleSkill { id: "crafting_alchemy", name: "Alchemy", tree: "crafting", tier: 2, category: "active", prerequisites: &["crafting_gathering"], max_rank: 5, effects: &[("ability_unlock", "alchemical_bomb", 1.0)] },
    SampleSkill { id: "crafting_masterwork", name: "Masterwork", tree: "crafting", tier: 3, category: "passive", prerequisites: &["crafting_alchemy", "crafting_smithing"], max_rank: 1, effects: &[("stat_bonus", "armor", 10.0)] },
    // === Exploration ===
    SampleSkill { id: "exploration_pathfinding", name: "Pathfinding", tree: "exploration", tier: 1, category: "passive", prerequisites: &[], max_rank: 3, effects: &[("stat_bonus", "movement_speed", 2.0)] },
    SampleSkill { id: "exploration_keen_eye", name: "Keen Eye", tree: "exploration", tier: 2, category: "passive", prerequisites: &["exploration_pathfinding"], max_rank: 3, effects: &[("stat_bonus", "crit_chance", 2.0)] },
    SampleSkill { id: "exploration_archery", name: "Hunter's Archery", tree: "exploration", tier: 2, category: "active", prerequisites: &["exploration_pathfinding"], max_rank: 5, effects: &[("ability_unlock", "quick_shot", 1.0)] },
    // === Social ===
    SampleSkill { id: "social_silver_tongue", name: "Silver Tongue", tree: "social", tier: 1, category: "passive", prerequisites: &[], max_rank: 3, effects: &[] },
    SampleSkill { id: "social_leadership", name: "Leadership", tree: "social", tier: 2, category: "passive", prerequisites: &["social_silver_tongue"], max_rank: 3, effects: &[("stat_bonus", "attack_speed", 1.0)] },
    // === Defensive ===
    SampleSkill { id: "defensive_iron_skin", name: "Iron Skin", tree: "defensive", tier: 1, category: "passive", prerequisites: &[], max_rank: 5, effects: &[("stat_bonus", "armor", 5.0)] },
    SampleSkill { id: "defensive_warding", name: "Warding", tree: "defensive", tier: 1, category: "passive", prerequisites: &[], max_rank: 5, effects: &[("stat_bonus", "magic_resist", 5.0)] },
    SampleSkill { id: "defensive_shield_wall", name: "Shield Wall", tree: "defensive", tier: 2, category: "active", prerequisites: &["defensive_iron_skin"], max_rank: 5, effects: &[("ability_unlock", "shield_bash", 1.0)] },
    SampleSkill { id: "defensive_last_stand", name: "Last Stand", tree: "defensive", tier: 3, category: "legendary", prerequisites: &["defensive_shield_wall", "defensive_warding"], max_rank: 1, effects: &[("stat_bonus", "hp", 50.0)] },
];

/// Deterministic sample skill rows covering every tree type
pub fn sample_skill_rows() -> Vec<SkillRow> {
    SAMPLE_SKILLS.iter().map(to_row).collect()
}

fn to_row(skill: &SampleSkill) -> SkillRow {
    let effects: Vec<serde_json::Value> = skill
        .effects
        .iter()
        .map(|&(kind, target, value)| match kind {
            "ability_unlock" => json!({ "type": kind, "target": target, "value": value, "abilityId": target }),
            _ => json!({ "type": kind, "target": target, "value": value }),
        })
        .collect();

    SkillRow {
        id: skill.id.to_string(),
        name: skill.name.to_string(),
        description: format!("{} ({} tier {})", skill.name, skill.tree, skill.tier),
        icon: format!("{}.png", skill.id),
        tier: skill.tier,
        skill_tree: skill.tree.to_string(),
        category: skill.category.to_string(),
        prerequisites: skill.prerequisites.iter().map(|p| p.to_string()).collect(),
        cost_skill_points: skill.tier,
        cost_level: 1 + (skill.tier - 1) * 5,
        cost_gold: None,
        max_rank: skill.max_rank,
        effects: Some(serde_json::Value::Array(effects).to_string()),
    }
}
