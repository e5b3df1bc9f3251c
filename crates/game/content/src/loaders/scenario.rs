//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::map::MapLayout;
use crate::scenario::{OrderSpec, Scenario};
use crate::units::UnitTemplate;

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario and check it against the templates and map it will
    /// be played with.
    pub fn load(
        path: &Path,
        templates: &[UnitTemplate],
        layout: &MapLayout,
    ) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content, templates, layout)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(
        content: &str,
        templates: &[UnitTemplate],
        layout: &MapLayout,
    ) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Self::validate(&scenario, templates, layout)?;
        Ok(scenario)
    }

    fn validate(
        scenario: &Scenario,
        templates: &[UnitTemplate],
        layout: &MapLayout,
    ) -> LoadResult<()> {
        for (index, spawn) in scenario.units.iter().enumerate() {
            let template = templates
                .iter()
                .find(|template| template.name == spawn.template)
                .ok_or_else(|| {
                    anyhow::anyhow!("unit {} uses unknown template '{}'", index, spawn.template)
                })?;

            let ground = layout.terrain(spawn.tile);
            anyhow::ensure!(
                ground.is_some_and(|terrain| terrain.is_passable())
                    && !layout.mines().contains(&spawn.tile),
                "unit {} spawns on {} which is not walkable",
                index,
                spawn.tile
            );

            match spawn.order {
                Some(OrderSpec::Move(tile)) => anyhow::ensure!(
                    layout.terrain(tile).is_some(),
                    "unit {} is sent off the map to {}",
                    index,
                    tile
                ),
                Some(OrderSpec::Harvest(tile)) => {
                    anyhow::ensure!(
                        template.harvest.is_some(),
                        "unit {} ('{}') cannot harvest",
                        index,
                        template.name
                    );
                    anyhow::ensure!(
                        layout.terrain(tile).is_some(),
                        "unit {} harvests off the map at {}",
                        index,
                        tile
                    );
                }
                Some(OrderSpec::Attack(target)) => {
                    anyhow::ensure!(
                        template.attack.is_some(),
                        "unit {} ('{}') cannot attack",
                        index,
                        template.name
                    );
                    anyhow::ensure!(
                        target < scenario.units.len() && target != index,
                        "unit {} attacks invalid unit {}",
                        index,
                        target
                    );
                }
                None => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::MapLoader;
    use crate::units::{AttackProfile, HarvestProfile};
    use skirmish_core::{Position, Race};

    fn templates() -> Vec<UnitTemplate> {
        vec![
            UnitTemplate::new("peasant", Race::Human, 30, 2.0).with_harvest(HarvestProfile {
                capacity: 10,
                extraction_time: 1.0,
                drop_off_time: 0.5,
            }),
            UnitTemplate::new("grunt", Race::Orc, 60, 1.5).with_attack(AttackProfile {
                damage: 8,
                interval: 1.0,
                range: 1,
            }),
        ]
    }

    fn layout() -> MapLayout {
        MapLoader::from_rows(&["...T", "....", "~~.."], vec![(Race::Human, (0, 0))]).unwrap()
    }

    #[test]
    fn parses_a_valid_scenario() {
        let scenario = ScenarioLoader::parse(
            r#"(
                player: Human,
                units: [
                    (template: "peasant", race: Human, tile: (x: 1, y: 1),
                     order: Some(Harvest((x: 3, y: 0))), selected: true),
                    (template: "grunt", race: Orc, tile: (x: 3, y: 2),
                     order: Some(Attack(0))),
                ],
            )"#,
            &templates(),
            &layout(),
        )
        .unwrap();

        assert_eq!(scenario.player, Race::Human);
        assert_eq!(scenario.units.len(), 2);
        assert!(scenario.units[0].selected);
        assert_eq!(
            scenario.units[0].order,
            Some(OrderSpec::Harvest(Position::new(3, 0)))
        );
        assert!(!scenario.units[1].selected);
    }

    #[test]
    fn rejects_spawn_in_water() {
        let error = ScenarioLoader::parse(
            r#"(player: Human, units: [(template: "peasant", race: Human, tile: (x: 0, y: 2))])"#,
            &templates(),
            &layout(),
        )
        .unwrap_err();
        assert!(error.to_string().contains("not walkable"));
    }

    #[test]
    fn rejects_orders_the_template_cannot_follow() {
        let error = ScenarioLoader::parse(
            r#"(player: Orc, units: [
                (template: "grunt", race: Orc, tile: (x: 1, y: 1), order: Some(Harvest((x: 3, y: 0)))),
            ])"#,
            &templates(),
            &layout(),
        )
        .unwrap_err();
        assert!(error.to_string().contains("cannot harvest"));
    }

    #[test]
    fn rejects_self_attack() {
        let error = ScenarioLoader::parse(
            r#"(player: Orc, units: [
                (template: "grunt", race: Orc, tile: (x: 1, y: 1), order: Some(Attack(0))),
            ])"#,
            &templates(),
            &layout(),
        )
        .unwrap_err();
        assert!(error.to_string().contains("invalid unit"));
    }
}
