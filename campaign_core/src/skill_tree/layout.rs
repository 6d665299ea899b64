//! Skill tree layout - tree columns, tier rows, sibling placement
//!
//! Each tree gets a column centered at `origin_x + column * column_width`.
//! Each tier sits at `origin_y + (tier - 1) * tier_spacing`. Within a tier,
//! skills are ordered by prerequisite count then name and either fanned out
//! around the column center or stacked on it.

use super::SkillNode;
use crate::types::SkillTreeType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How skills sharing a tier are placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutStyle {
    /// Every skill of a tier sits on the tier center
    Stacked,
    /// Skills are spread evenly around the tier center by sibling index
    FanOut,
}

/// Layout tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_origin_x")]
    pub origin_x: f64,
    #[serde(default = "default_column_width")]
    pub column_width: f64,
    #[serde(default = "default_origin_y")]
    pub origin_y: f64,
    #[serde(default = "default_tier_spacing")]
    pub tier_spacing: f64,
    #[serde(default = "default_sibling_spacing")]
    pub sibling_spacing: f64,
    #[serde(default = "default_style")]
    pub style: LayoutStyle,
    /// Column order, left to right. Trees not listed are placed after these.
    #[serde(default = "default_tree_order")]
    pub tree_order: Vec<SkillTreeType>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            origin_x: default_origin_x(),
            column_width: default_column_width(),
            origin_y: default_origin_y(),
            tier_spacing: default_tier_spacing(),
            sibling_spacing: default_sibling_spacing(),
            style: default_style(),
            tree_order: default_tree_order(),
        }
    }
}

fn default_origin_x() -> f64 {
    200.0
}
fn default_column_width() -> f64 {
    400.0
}
fn default_origin_y() -> f64 {
    200.0
}
fn default_tier_spacing() -> f64 {
    120.0
}
fn default_sibling_spacing() -> f64 {
    110.0
}
fn default_style() -> LayoutStyle {
    LayoutStyle::FanOut
}
fn default_tree_order() -> Vec<SkillTreeType> {
    vec![
        SkillTreeType::Combat,
        SkillTreeType::Crafting,
        SkillTreeType::Magic,
        SkillTreeType::Exploration,
        SkillTreeType::Social,
        SkillTreeType::Defensive,
    ]
}

impl LayoutConfig {
    /// Column index of a tree
    pub fn column_of(&self, tree: SkillTreeType) -> usize {
        if let Some(index) = self.tree_order.iter().position(|t| *t == tree) {
            return index;
        }
        let unlisted = SkillTreeType::all()
            .iter()
            .filter(|t| !self.tree_order.contains(t))
            .position(|t| *t == tree)
            .unwrap_or(0);
        self.tree_order.len() + unlisted
    }

    /// Horizontal center of a tree column
    pub fn column_center(&self, tree: SkillTreeType) -> f64 {
        self.origin_x + self.column_of(tree) as f64 * self.column_width
    }

    /// Vertical position of a tier
    pub fn tier_y(&self, tier: u32) -> f64 {
        self.origin_y + tier.saturating_sub(1) as f64 * self.tier_spacing
    }
}

/// Assign positions to every skill in place
pub fn calculate_tree_positions(skills: &mut [SkillNode], config: &LayoutConfig) {
    let mut groups: BTreeMap<(SkillTreeType, u32), Vec<usize>> = BTreeMap::new();
    for (index, skill) in skills.iter().enumerate() {
        groups
            .entry((skill.skill_tree, skill.tier))
            .or_default()
            .push(index);
    }

    for ((tree, tier), mut members) in groups {
        members.sort_by(|&a, &b| {
            let (a, b) = (&skills[a], &skills[b]);
            a.prerequisites
                .len()
                .cmp(&b.prerequisites.len())
                .then_with(|| a.name.cmp(&b.name))
        });

        let center_x = config.column_center(tree);
        let y = config.tier_y(tier);
        let count = members.len();

        for (sibling, index) in members.into_iter().enumerate() {
            let x = match config.style {
                LayoutStyle::Stacked => center_x,
                LayoutStyle::FanOut => {
                    let offset = sibling as f64 - (count as f64 - 1.0) / 2.0;
                    center_x + offset * config.sibling_spacing
                }
            };
            skills[index].position.x = x;
            skills[index].position.y = y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SkillCategory;

    fn node(id: &str, tree: SkillTreeType, tier: u32) -> SkillNode {
        SkillNode::new(id, id, tree, tier, SkillCategory::Passive)
    }

    #[test]
    fn test_stacked_places_tier_on_one_point() {
        let mut skills = vec![
            node("a", SkillTreeType::Combat, 1),
            node("b", SkillTreeType::Combat, 1),
            node("c", SkillTreeType::Combat, 1),
        ];
        let config = LayoutConfig {
            style: LayoutStyle::Stacked,
            ..LayoutConfig::default()
        };
        calculate_tree_positions(&mut skills, &config);

        assert_eq!(skills[0].position, skills[1].position);
        assert_eq!(skills[1].position, skills[2].position);
        assert!((skills[0].position.y - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fan_out_spreads_around_center() {
        let mut skills = vec![
            node("b", SkillTreeType::Combat, 1),
            node("a", SkillTreeType::Combat, 1),
            node("c", SkillTreeType::Combat, 1),
        ];
        let config = LayoutConfig::default();
        calculate_tree_positions(&mut skills, &config);

        let center = config.column_center(SkillTreeType::Combat);
        // Sorted by name: a, b, c
        assert!((skills[1].position.x - (center - 110.0)).abs() < f64::EPSILON);
        assert!((skills[0].position.x - center).abs() < f64::EPSILON);
        assert!((skills[2].position.x - (center + 110.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fewer_prerequisites_placed_first() {
        let mut skills = vec![
            node("alpha", SkillTreeType::Magic, 2).with_prerequisites(&["x", "y"]),
            node("zeta", SkillTreeType::Magic, 2).with_prerequisites(&["x"]),
        ];
        calculate_tree_positions(&mut skills, &LayoutConfig::default());
        assert!(skills[1].position.x < skills[0].position.x);
    }

    #[test]
    fn test_single_skill_centered() {
        let mut skills = vec![node("solo", SkillTreeType::Crafting, 1)];
        let config = LayoutConfig::default();
        calculate_tree_positions(&mut skills, &config);
        assert!((skills[0].position.x - config.column_center(SkillTreeType::Crafting)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tier_rows() {
        let mut skills = vec![
            node("t1", SkillTreeType::Combat, 1),
            node("t3", SkillTreeType::Combat, 3),
        ];
        calculate_tree_positions(&mut skills, &LayoutConfig::default());
        assert!((skills[0].position.y - 200.0).abs() < f64::EPSILON);
        assert!((skills[1].position.y - 440.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tree_columns() {
        let config = LayoutConfig::default();
        assert!((config.column_center(SkillTreeType::Combat) - 200.0).abs() < f64::EPSILON);
        assert!((config.column_center(SkillTreeType::Crafting) - 600.0).abs() < f64::EPSILON);
        assert!((config.column_center(SkillTreeType::Magic) - 1000.0).abs() < f64::EPSILON);

        // Trees missing from the order are appended
        let partial = LayoutConfig {
            tree_order: vec![SkillTreeType::Magic],
            ..LayoutConfig::default()
        };
        assert_eq!(partial.column_of(SkillTreeType::Magic), 0);
        assert_eq!(partial.column_of(SkillTreeType::Combat), 1);
        assert_eq!(partial.column_of(SkillTreeType::Crafting), 2);
        assert_eq!(partial.column_of(SkillTreeType::Defensive), 5);
    }
}
