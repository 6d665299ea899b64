//! Integration test: skill rows -> progression -> abilities and stats -> combat
//!
//! Exercises the public API the way a UI layer would, backed by the
//! in-memory repository.

use campaign_core::ability::{default_milestones, AbilityCatalog, AbilityResolver};
use campaign_core::combat::{advance_turn, perform_ability_with_rng, TurnResources};
use campaign_core::damage::{calculate_damage_with_resistance_with_rng, calculate_enemy_attack_damage_with_rng};
use campaign_core::defense::{calculate_damage_reduction, CombatantDefenses};
use campaign_core::dice::{roll_damage, roll_damage_with_rng, DamageExpression};
use campaign_core::skill_tree::{
    calculate_tree_positions, map_ds_to_skill_nodes, sample_skill_rows, LayoutConfig, LayoutStyle,
    PlayerProgression, SkillNode,
};
use campaign_core::stat_bonus::{get_stat_bonuses_from_skills, CharacterResources};
use campaign_core::{
    is_magical_damage, Ability, AbilityCategory, CampaignConfig, DamageType, InMemorySkillRepository,
    SkillCategory, SkillEffect, SkillTreeType,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn sample_nodes(progression: &PlayerProgression) -> Vec<SkillNode> {
    let catalog = AbilityCatalog::default_catalog();
    let config = CampaignConfig::default_config();
    map_ds_to_skill_nodes(&sample_skill_rows(), progression, catalog.rules(), &config.progression)
}

fn find<'a>(nodes: &'a mut [SkillNode], id: &str) -> &'a mut SkillNode {
    nodes
        .iter_mut()
        .find(|n| n.id.as_str() == id)
        .unwrap_or_else(|| panic!("missing skill {}", id))
}

#[test]
fn test_roll_damage_properties() {
    assert_eq!(roll_damage("15"), 15);
    assert_eq!(roll_damage("bogus"), 0);
    for _ in 0..200 {
        assert!((5..=15).contains(&roll_damage("2d6+3")));
    }
}

#[test]
fn test_reduction_curve_points() {
    assert_eq!(calculate_damage_reduction(0.0), 0.0);
    assert!((calculate_damage_reduction(100.0) - 0.5).abs() < 1e-9);
    assert!(calculate_damage_reduction(10_000.0) <= 0.9);
}

#[test]
fn test_minimum_damage_against_huge_armor() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let fortress = CombatantDefenses {
        armor_current: Some(1_000_000),
        defense: None,
        magic_resist_current: Some(1_000_000),
    };
    for expr in ["1", "1d4", "2d6 + 3", "0", "bogus"] {
        let info = calculate_damage_with_resistance_with_rng(expr, &fortress, None, &mut rng);
        assert!(info.final_damage >= 1, "{} dealt {}", expr, info.final_damage);
    }
}

#[test]
fn test_magic_keyword_classification() {
    let slash = Ability::new("slash", "Slash", AbilityCategory::Basic);
    let fire_slash = Ability::new("fire_slash", "Fireball Slash", AbilityCategory::Basic);
    assert!(!is_magical_damage(&slash));
    assert!(is_magical_damage(&fire_slash));
}

#[test]
fn test_sword_path_rank_two_end_to_end() {
    let catalog = AbilityCatalog::default_catalog();
    let milestones = default_milestones();
    let resolver = AbilityResolver::new(&catalog, &milestones);

    let mut progression = PlayerProgression::new(5, 5);
    let mut nodes = sample_nodes(&progression);
    let sword = find(&mut nodes, "combat_sword_path");
    progression.upgrade_skill(sword).unwrap();
    progression.upgrade_skill(sword).unwrap();

    let mut repo = InMemorySkillRepository::new();
    repo.insert_nodes("hero", &nodes);

    let unlocked: Vec<String> = progression
        .unlocked_skills
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();
    assert_eq!(unlocked, vec!["combat_sword_path".to_string()]);

    let abilities = resolver.get_abilities_from_unlocked_skills_with_levels(&repo, "hero", &unlocked);
    assert_eq!(abilities.len(), 1);
    let strike = &abilities[0];
    assert_eq!(strike.id, "power_strike");
    assert_eq!(strike.level, 2);
    assert_eq!(strike.damage.as_deref(), Some("2d6 + 3 + 1d4"));

    let expr = DamageExpression::parse(strike.damage.as_deref().unwrap()).unwrap();
    assert_eq!(expr.min_roll(), 6);
    assert_eq!(expr.max_roll(), 19);
}

#[test]
fn test_milestone_counts_with_unmatched_skills() {
    let catalog = AbilityCatalog::default_catalog();
    let config = CampaignConfig::default_config();
    let resolver = AbilityResolver::new(&catalog, &config.milestones);

    let mut repo = InMemorySkillRepository::new();
    for (count, expected) in [(5, 3), (10, 6), (15, 8)] {
        let ids: Vec<String> = (0..count).map(|i| format!("social_rumor_{}", i)).collect();
        for id in &ids {
            repo.insert_skill("bard", id.as_str(), 1, Vec::new());
        }
        let abilities = resolver.get_abilities_from_unlocked_skills_with_levels(&repo, "bard", &ids);
        assert_eq!(abilities.len(), expected, "{} skills", count);
    }
}

#[test]
fn test_stat_bonuses_feed_resources() {
    let mut progression = PlayerProgression::new(5, 10);
    let mut nodes = sample_nodes(&progression);
    for _ in 0..3 {
        progression.upgrade_skill(find(&mut nodes, "defensive_iron_skin")).unwrap();
    }
    progression.upgrade_skill(find(&mut nodes, "combat_toughness")).unwrap();

    let mut repo = InMemorySkillRepository::new();
    repo.insert_nodes("hero", &nodes);

    let bonuses = get_stat_bonuses_from_skills(&repo, "hero");
    assert_eq!(bonuses.armor, 15);
    assert_eq!(bonuses.health, 10);

    let empty = get_stat_bonuses_from_skills(&InMemorySkillRepository::new(), "nobody").to_map();
    assert_eq!(empty.len(), 10);
    assert!(empty.values().all(|v| *v == 0));

    let hero = CharacterResources::default().with_bonuses(&bonuses);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let info = calculate_enemy_attack_damage_with_rng(20, &hero, false, &mut rng);
    assert_eq!(info.damage_type, DamageType::Physical);
    assert_eq!(info.resistance_used, 15);
}

#[test]
fn test_stacked_layout_places_tier_on_one_point() {
    let mut skills: Vec<SkillNode> = ["a", "b", "c"]
        .iter()
        .map(|id| SkillNode::new(*id, *id, SkillTreeType::Combat, 1, SkillCategory::Passive))
        .collect();
    let stacked = LayoutConfig {
        style: LayoutStyle::Stacked,
        ..LayoutConfig::default()
    };
    calculate_tree_positions(&mut skills, &stacked);
    assert_eq!(skills[0].position, skills[1].position);
    assert_eq!(skills[1].position, skills[2].position);

    calculate_tree_positions(&mut skills, &LayoutConfig::default());
    assert_ne!(skills[0].position, skills[1].position);
    assert_eq!(skills[0].position.y, skills[2].position.y);
}

#[test]
fn test_sample_tree_layout_has_no_overlaps() {
    let mut nodes = sample_nodes(&PlayerProgression::default());
    calculate_tree_positions(&mut nodes, &CampaignConfig::default_config().layout);

    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            assert_ne!(a.position, b.position, "{} overlaps {}", a.id, b.id);
        }
    }
}

#[test]
fn test_encounter_turn_cycle() {
    let catalog = AbilityCatalog::default_catalog();
    let mut fireball = catalog.instantiate("fireball").unwrap();
    let mut turn = TurnResources::from_character(&CharacterResources::default());
    let enemy = CombatantDefenses::with_defense(40, 20);
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    let used = perform_ability_with_rng(&mut fireball, &mut turn, &enemy, &mut rng).unwrap();
    let info = used.damage.unwrap();
    assert_eq!(info.damage_type, DamageType::Magical);
    assert_eq!(info.resistance_used, 20);
    assert!(info.final_damage >= 1);

    // Cooling down: a second cast in the same turn is rejected
    assert!(perform_ability_with_rng(&mut fireball, &mut turn, &enemy, &mut rng).is_err());

    let mut abilities = vec![fireball];
    for _ in 0..abilities[0].cooldown_max {
        advance_turn(&mut abilities, &mut turn);
    }
    assert!(abilities[0].is_ready());
    assert_eq!(turn.action_points, turn.max_action_points);
}

#[test]
fn test_seeded_rolls_are_reproducible() {
    let roll = |seed| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..10).map(|_| roll_damage_with_rng("3d6 + 1d4", &mut rng)).collect::<Vec<_>>()
    };
    assert_eq!(roll(3), roll(3));
}

#[test]
fn test_explicit_unlock_effects_resolve() {
    let catalog = AbilityCatalog::default_catalog();
    let resolver = AbilityResolver::new(&catalog, &[]);
    let skill = SkillNode::new("magic_secret", "Secret Arts", SkillTreeType::Magic, 3, SkillCategory::Legendary)
        .with_effects(vec![SkillEffect::ability_unlock("divine_intervention")]);

    let abilities = resolver.get_abilities_from_skill(&skill);
    assert_eq!(abilities.len(), 1);
    assert_eq!(abilities[0].id, "divine_intervention");
}
