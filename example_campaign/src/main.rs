//! Example Campaign - A scripted encounter demonstrating campaign_core
//!
//! This example shows:
//! - Mapping data store skill rows into skill trees and laying them out
//! - Buying skill ranks with a character's skill points
//! - Resolving abilities and stat bonuses from unlocked skills
//! - A turn-based fight using damage resolution and the turn lifecycle
//!
//! Usage: `cargo run -p example_campaign [path/to/campaign.toml]`

use campaign_core::ability::{AbilityCatalog, AbilityResolver};
use campaign_core::combat::{advance_turn, check_ability, perform_ability_with_rng, TurnResources};
use campaign_core::damage::{calculate_damage_with_resistance_with_rng, calculate_enemy_attack_damage_with_rng};
use campaign_core::defense::CombatantDefenses;
use campaign_core::skill_tree::{
    calculate_tree_positions, map_ds_to_skill_nodes, sample_skill_rows, PlayerProgression, SkillNode,
};
use campaign_core::stat_bonus::{get_stat_bonuses_from_skills, CharacterResources};
use campaign_core::{Ability, CampaignConfig, InMemorySkillRepository};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CHARACTER_ID: &str = "hero";
const MAX_ROUNDS: u32 = 12;

/// Skills bought for the hero, in order
const SKILL_PLAN: &[&str] = &[
    "combat_sword_path",
    "combat_sword_path",
    "combat_toughness",
    "combat_toughness",
    "defensive_iron_skin",
    "defensive_iron_skin",
    "defensive_iron_skin",
    "magic_fire_path",
    "magic_mana_well",
    "defensive_warding",
];

/// The enemy of the encounter
struct Enemy {
    name: String,
    health: i32,
    attack_power: i32,
    magical_attacks: bool,
    defenses: CombatantDefenses,
}

/// Encounter state
struct EncounterState {
    player: CharacterResources,
    turn: TurnResources,
    abilities: Vec<Ability>,
    enemy: Enemy,
    round: u32,
    messages: Vec<String>,
    rng: ChaCha8Rng,
}

impl EncounterState {
    fn new(player: CharacterResources, abilities: Vec<Ability>, enemy: Enemy) -> Self {
        EncounterState {
            turn: TurnResources::from_character(&player),
            player,
            abilities,
            enemy,
            round: 1,
            messages: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(42),
        }
    }

    fn is_over(&self) -> bool {
        self.enemy.health <= 0 || !self.player.is_alive() || self.round > MAX_ROUNDS
    }

    /// Use the first usable ability, or a basic attack when none is ready
    fn player_action(&mut self) {
        let usable = self
            .abilities
            .iter()
            .position(|a| a.damage.is_some() && check_ability(a, &self.turn).is_ok());

        let (name, info) = match usable {
            Some(index) => {
                let ability = &mut self.abilities[index];
                match perform_ability_with_rng(ability, &mut self.turn, &self.enemy.defenses, &mut self.rng) {
                    Ok(used) => (ability.name.clone(), used.damage),
                    Err(err) => {
                        self.messages.push(format!("{} failed: {}", ability.name, err));
                        return;
                    }
                }
            }
            None => {
                let expr = self.player.attack_damage.to_string();
                let info = calculate_damage_with_resistance_with_rng(&expr, &self.enemy.defenses, None, &mut self.rng);
                ("Attack".to_string(), Some(info))
            }
        };

        match info {
            Some(info) => {
                self.enemy.health -= info.final_damage;
                self.messages.push(format!("{}: {}", name, info.breakdown()));
            }
            None => self.messages.push(format!("{}: no damage", name)),
        }
    }

    fn enemy_action(&mut self) {
        let info = calculate_enemy_attack_damage_with_rng(
            self.enemy.attack_power,
            &self.player,
            self.enemy.magical_attacks,
            &mut self.rng,
        );
        self.player.take_damage(info.final_damage);
        self.messages.push(format!("{} hits you: {}", self.enemy.name, info.breakdown()));
    }

    fn play_round(&mut self) {
        self.messages.push(format!("-- Round {} --", self.round));
        self.player_action();

        if self.enemy.health > 0 {
            self.enemy_action();
        }

        self.turn.apply_to(&mut self.player);
        advance_turn(&mut self.abilities, &mut self.turn);
        self.round += 1;
    }
}

fn load_config() -> CampaignConfig {
    let Some(path) = std::env::args().nth(1) else {
        return CampaignConfig::default_config();
    };
    match CampaignConfig::load(Path::new(&path)) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%path, %err, "could not load campaign config, using defaults");
            CampaignConfig::default_config()
        }
    }
}

/// Buy every rank in `SKILL_PLAN` that the hero can afford
fn buy_skills(progression: &mut PlayerProgression, nodes: &mut [SkillNode]) {
    for skill_id in SKILL_PLAN {
        let Some(node) = nodes.iter_mut().find(|n| n.id.as_str() == *skill_id) else {
            tracing::warn!(skill = skill_id, "planned skill not in tree");
            continue;
        };
        match progression.upgrade_skill(node) {
            Ok(rank) => println!("Learned {} (rank {})", node.name, rank),
            Err(err) => println!("Could not learn {}: {}", node.name, err),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config();
    let catalog = AbilityCatalog::default_catalog();
    if let Err(err) = config.validate_against(&catalog) {
        tracing::warn!(%err, "campaign config references unknown abilities");
    }
    tracing::info!(abilities = catalog.len(), "loaded ability catalog");

    // === Skill trees ===
    let mut progression = PlayerProgression::new(12, 14);
    let rows = sample_skill_rows();
    let mut nodes = map_ds_to_skill_nodes(&rows, &progression, catalog.rules(), &config.progression);
    calculate_tree_positions(&mut nodes, &config.layout);
    println!("Skill trees: {} skills", nodes.len());

    buy_skills(&mut progression, &mut nodes);
    println!(
        "Skill points: {} unspent of {} (consistent: {})",
        progression.unspent_skill_points,
        progression.skill_points,
        progression.is_consistent(&nodes)
    );

    let mut repo = InMemorySkillRepository::new();
    repo.insert_nodes(CHARACTER_ID, &nodes);

    // === Abilities and stats ===
    let resolver = AbilityResolver::new(&catalog, &config.milestones);
    let unlocked: Vec<String> = progression
        .unlocked_skills
        .iter()
        .map(|id| id.as_str().to_string())
        .collect();
    let abilities = resolver.get_abilities_from_unlocked_skills_with_levels(&repo, CHARACTER_ID, &unlocked);

    println!("Abilities:");
    for ability in &abilities {
        println!(
            "  {} (level {}) damage: {}",
            ability.name,
            ability.level,
            ability.damage.as_deref().unwrap_or("-")
        );
    }

    let bonuses = get_stat_bonuses_from_skills(&repo, CHARACTER_ID);
    let player = CharacterResources::default().with_bonuses(&bonuses);
    println!(
        "Hero: {}/{} HP, {} mana, {} armor, {} magic resist",
        player.health_current, player.health_max, player.mana_current, player.armor_current, player.magic_resist_current
    );

    // === Encounter ===
    let enemy = Enemy {
        name: "Cave Troll".to_string(),
        health: 120,
        attack_power: 14,
        magical_attacks: false,
        defenses: CombatantDefenses::with_defense(40, 10),
    };
    let mut state = EncounterState::new(player, abilities, enemy);
    while !state.is_over() {
        state.play_round();
    }

    for message in &state.messages {
        println!("{}", message);
    }

    if state.enemy.health <= 0 {
        println!("{} defeated in {} rounds!", state.enemy.name, state.round - 1);
    } else if !state.player.is_alive() {
        println!("The hero has fallen.");
    } else {
        println!("The {} retreats.", state.enemy.name);
    }
}
