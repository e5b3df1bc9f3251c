//! The simulated world and its tick loop.
//!
//! A tick runs in five steps, in this order:
//! 1. producers advance (production timers, movement, extraction, combat)
//!    and queue [`UnitEvent`]s; combat damage lands immediately
//! 2. queued events are delivered to their units
//! 3. every unit's state machine updates
//! 4. destroyed units leave a corpse and go back to the pool
//! 5. effects age and expire
//!
//! Everything runs on the caller's thread, one unit at a time, so units see
//! the shared services exclusively while they use them. Orders deliver their
//! events on the spot so the next tick already sees the unit reacting.
use std::collections::BTreeMap;
use std::sync::Arc;

use skirmish_content::{
    Content, MapLayout, OrderSpec, RulesConfig, Scenario, UnitTemplate,
};
use skirmish_core::{
    Economy, EntityId, Hud, Position, Race, Services, TerrainMap, Unit, UnitEvent, UnitGraph,
    UnitStateKind, unit_graph,
};
use tracing::{debug, info, trace};

use crate::effect::{Effect, EffectKind};
use crate::error::{Result, WorldError};
use crate::kit::{Progress, UnitKit};
use crate::pool::UnitPool;
use crate::production::Production;
use crate::services::{GridMap, HudLog, PlayerLedger};

struct Entry {
    unit: Unit,
    kit: UnitKit,
}

pub struct World {
    map: GridMap,
    ledger: PlayerLedger,
    hud: HudLog,
    graph: Arc<UnitGraph>,
    rules: RulesConfig,
    templates: BTreeMap<String, UnitTemplate>,
    units: BTreeMap<EntityId, Entry>,
    productions: Vec<Production>,
    pool: UnitPool,
    effects: Vec<Effect>,
    queue: Vec<(EntityId, UnitEvent)>,
    next_id: u32,
    ticks: u64,
    clock: f64,
}

impl World {
    pub fn new(
        rules: RulesConfig,
        templates: impl IntoIterator<Item = UnitTemplate>,
        layout: &MapLayout,
        player: Race,
    ) -> Result<Self> {
        let mut ledger = PlayerLedger::new(player);
        for (race, tile) in layout.warehouses() {
            ledger.set_warehouse(*race, *tile);
        }

        Ok(Self {
            map: GridMap::from_layout(layout),
            ledger,
            hud: HudLog::default(),
            graph: Arc::new(unit_graph()?),
            rules,
            templates: templates
                .into_iter()
                .map(|template| (template.name.clone(), template))
                .collect(),
            units: BTreeMap::new(),
            productions: Vec::new(),
            pool: UnitPool::default(),
            effects: Vec::new(),
            queue: Vec::new(),
            next_id: 1,
            ticks: 0,
            clock: 0.0,
        })
    }

    /// Builds the world described by loaded content and applies its scenario.
    pub fn from_content(content: &Content) -> Result<Self> {
        let mut world = Self::new(
            content.rules,
            content.units.iter().cloned(),
            &content.map,
            content.scenario.player,
        )?;
        world.apply_scenario(&content.scenario)?;
        Ok(world)
    }

    /// Spawns the scenario's units, selects them, and hands out their orders.
    ///
    /// Returns the ids in scenario order.
    pub fn apply_scenario(&mut self, scenario: &Scenario) -> Result<Vec<EntityId>> {
        let ids = scenario
            .units
            .iter()
            .map(|spawn| self.spawn(&spawn.template, spawn.race, spawn.tile))
            .collect::<Result<Vec<_>>>()?;

        for (index, (spawn, id)) in scenario.units.iter().zip(&ids).enumerate() {
            if spawn.selected {
                self.select(*id)?;
            }
            match spawn.order {
                Some(OrderSpec::Move(tile)) => self.move_to(*id, tile)?,
                Some(OrderSpec::Harvest(tile)) => self.harvest(*id, tile)?,
                Some(OrderSpec::Attack(target)) => {
                    let target = *ids
                        .get(target)
                        .ok_or(WorldError::UnknownSpawnTarget { index, target })?;
                    self.attack(*id, target)?;
                }
                None => {}
            }
        }

        info!(units = ids.len(), player = %scenario.player, "scenario applied");
        Ok(ids)
    }

    // Orders

    /// Places a unit of `template` on `tile`, reusing a pooled one if any.
    pub fn spawn(&mut self, template: &str, race: Race, tile: Position) -> Result<EntityId> {
        let template = self
            .templates
            .get(template)
            .ok_or_else(|| WorldError::UnknownTemplate(template.to_owned()))?;
        if !self.map.contains(tile) {
            return Err(WorldError::OffMap(tile));
        }
        if !self.map.is_walkable(tile) {
            return Err(WorldError::Blocked(tile));
        }

        let (unit, kit) = match self.pool.take(&template.name, race) {
            Some((mut unit, kit)) => {
                kit.reset(tile);
                unit.recycle();
                (unit, kit)
            }
            None => {
                let id = EntityId(self.next_id);
                self.next_id += 1;
                UnitKit::assemble(
                    id,
                    race,
                    template,
                    tile,
                    self.rules.unit,
                    Arc::clone(&self.graph),
                )?
            }
        };

        let id = unit.id();
        if race == self.ledger.player() {
            self.ledger.claim(id);
        }
        info!(entity = %id, template = %template.name, race = %race, tile = ?tile, "unit spawned");
        self.units.insert(id, Entry { unit, kit });
        Ok(id)
    }

    /// Spawns a unit that stays hidden until `producer` finishes it in
    /// `duration` seconds.
    pub fn produce(
        &mut self,
        template: &str,
        race: Race,
        tile: Position,
        producer: EntityId,
        duration: f64,
    ) -> Result<EntityId> {
        let id = self.spawn(template, race, tile)?;
        let entry = self.units.get_mut(&id).ok_or(WorldError::UnknownEntity(id))?;
        entry.unit.begin_production()?;
        self.productions.push(Production::new(id, producer, duration));
        debug!(entity = %id, producer = %producer, duration, "production started");
        Ok(id)
    }

    pub fn move_to(&mut self, id: EntityId, tile: Position) -> Result<()> {
        if !self.map.contains(tile) {
            return Err(WorldError::OffMap(tile));
        }
        let entry = live(&mut self.units, id)?;
        interrupt(id, &entry.kit, &mut self.queue);
        entry.kit.mover.lock().set_destination(tile);
        self.deliver_events();
        debug!(entity = %id, tile = ?tile, "move ordered");
        Ok(())
    }

    pub fn harvest(&mut self, id: EntityId, tile: Position) -> Result<()> {
        let kind = self
            .map
            .resource_at(tile)
            .ok_or(WorldError::NoResource(tile))?;
        let entry = live(&mut self.units, id)?;
        if !entry.kit.harvester.lock().can_harvest() {
            return Err(WorldError::CannotHarvest(id));
        }

        interrupt(id, &entry.kit, &mut self.queue);
        if let Some(event) = entry.kit.harvester.lock().start(kind, tile) {
            self.queue.push((id, event));
        }
        self.deliver_events();
        debug!(entity = %id, resource = %kind, tile = ?tile, "harvest ordered");
        Ok(())
    }

    pub fn attack(&mut self, id: EntityId, target: EntityId) -> Result<()> {
        match self.units.get(&target) {
            Some(entry) if !entry.unit.body().is_dead() => {}
            Some(_) => return Err(WorldError::Dead(target)),
            None => return Err(WorldError::UnknownEntity(target)),
        }
        let entry = live(&mut self.units, id)?;
        if id == target || !entry.kit.combat.lock().can_attack() {
            return Err(WorldError::CannotAttack(id));
        }

        interrupt(id, &entry.kit, &mut self.queue);
        entry.kit.combat.lock().engage(target);
        self.queue.push((id, UnitEvent::AttackStarted { target }));
        self.deliver_events();
        debug!(entity = %id, target = %target, "attack ordered");
        Ok(())
    }

    /// Halts movement, extraction and combat.
    pub fn stop(&mut self, id: EntityId) -> Result<()> {
        let entry = live(&mut self.units, id)?;
        interrupt(id, &entry.kit, &mut self.queue);
        entry.kit.mover.lock().stop();
        self.deliver_events();
        Ok(())
    }

    /// Deals `amount` damage outside of combat. Returns the life left.
    pub fn damage(&mut self, id: EntityId, amount: u32) -> Result<u32> {
        let entry = self
            .units
            .get_mut(&id)
            .ok_or(WorldError::UnknownEntity(id))?;
        let stats = entry.unit.stats_mut();
        stats.take_damage(amount);
        Ok(stats.life())
    }

    /// Adds the unit to the player's selection if it can be picked.
    pub fn select(&mut self, id: EntityId) -> Result<bool> {
        let entry = self
            .units
            .get(&id)
            .ok_or(WorldError::UnknownEntity(id))?;
        let body = entry.unit.body();
        let mut hitbox = entry.kit.hitbox.lock();
        if !hitbox.selectable || !body.is_visible() || !body.is_displayed() {
            return Ok(false);
        }
        hitbox.highlighted = true;
        self.hud.select(id);
        Ok(true)
    }

    // Simulation

    pub fn tick(&mut self, delta: f64) {
        self.ticks += 1;
        self.clock += delta;
        trace!(tick = self.ticks, delta, "tick");

        self.advance_producers(delta);
        self.deliver_events();
        self.update_units(delta);
        self.reap();
        self.effects.retain_mut(|effect| effect.age(delta));
    }

    /// Runs `ticks` ticks of the configured length.
    pub fn run(&mut self, ticks: u64) {
        let delta = self.rules.simulation.tick_seconds;
        for _ in 0..ticks {
            self.tick(delta);
        }
    }

    fn advance_producers(&mut self, delta: f64) {
        let queue = &mut self.queue;
        self.productions.retain_mut(|production| match production.advance(delta) {
            Some(event) => {
                queue.push((production.unit, event));
                false
            }
            None => true,
        });

        for (id, entry) in &self.units {
            entry.kit.sprite.lock().advance(delta);
            if entry.unit.state() == UnitStateKind::Die {
                continue;
            }

            let progress = {
                let mut mover = entry.kit.mover.lock();
                mover.advance(delta, &self.map);
                Progress {
                    tile: mover.tile(),
                    moving: mover.is_moving(),
                    carrying: entry.unit.body().flags().carry_resource().is_some(),
                    warehouse: self.ledger.warehouse(entry.unit.body().stats().race()),
                }
            };
            let map = &self.map;
            let events = entry.kit.harvester.lock().advance(delta, progress, |tile| {
                map.resource_at(tile).is_some()
            });
            self.queue.extend(events.into_iter().map(|event| (*id, event)));
        }

        self.advance_combat(delta);
    }

    fn advance_combat(&mut self, delta: f64) {
        let targets: BTreeMap<EntityId, (Position, bool, bool)> = self
            .units
            .iter()
            .map(|(id, entry)| {
                let body = entry.unit.body();
                (*id, (entry.kit.tile(), body.is_dead(), body.is_visible()))
            })
            .collect();

        let mut hits = Vec::new();
        for (id, entry) in &self.units {
            if entry.unit.body().is_dead() {
                continue;
            }
            let mut combat = entry.kit.combat.lock();
            let Some(target) = combat.target() else {
                continue;
            };

            match targets.get(&target) {
                Some(&(tile, false, visible)) => {
                    let mut mover = entry.kit.mover.lock();
                    if mover.tile().chebyshev(tile) <= combat.range() {
                        mover.stop();
                        if visible && let Some(damage) = combat.swing(delta) {
                            hits.push((*id, target, damage));
                        }
                    } else if mover.destination() != Some(tile) {
                        mover.set_destination(tile);
                    }
                }
                _ => {
                    combat.disengage();
                    self.queue.push((*id, UnitEvent::AttackStopped));
                }
            }
        }

        for (attacker, target, damage) in hits {
            if let Some(entry) = self.units.get_mut(&target) {
                let stats = entry.unit.stats_mut();
                stats.take_damage(damage);
                debug!(entity = %attacker, target = %target, damage, life = stats.life(), "hit");
            }
        }
    }

    fn deliver_events(&mut self) {
        let mut services = Services::new(&mut self.map, &mut self.ledger, &mut self.hud);
        for (id, event) in self.queue.drain(..) {
            match self.units.get_mut(&id) {
                Some(entry) => entry.unit.handle(event, &mut services),
                None => trace!(entity = %id, event = event.name(), "event for a removed unit"),
            }
        }
    }

    fn update_units(&mut self, delta: f64) {
        let mut services = Services::new(&mut self.map, &mut self.ledger, &mut self.hud);
        for entry in self.units.values_mut() {
            entry.unit.update(delta, &mut services);
        }
    }

    fn reap(&mut self) {
        let destroyed: Vec<EntityId> = self
            .units
            .iter()
            .filter(|(_, entry)| entry.unit.body().is_destroyed())
            .map(|(id, _)| *id)
            .collect();

        for id in destroyed {
            let Some(entry) = self.units.remove(&id) else {
                continue;
            };
            let race = entry.unit.body().stats().race();
            let tile = entry.kit.tile();

            self.effects.push(Effect::new(
                EffectKind::Corpse { unit: id, race },
                tile,
                self.rules.simulation.corpse_delay,
            ));
            self.ledger.release(id);
            self.hud.remove_from_selection(id);
            self.productions.retain(|production| production.unit != id);
            info!(entity = %id, race = %race, tile = ?tile, "unit removed");

            self.pool.put(race, entry.unit, entry.kit);
        }
    }

    // Queries

    pub fn unit(&self, id: EntityId) -> Option<&Unit> {
        self.units.get(&id).map(|entry| &entry.unit)
    }

    pub fn kit(&self, id: EntityId) -> Option<&UnitKit> {
        self.units.get(&id).map(|entry| &entry.kit)
    }

    pub fn state(&self, id: EntityId) -> Option<UnitStateKind> {
        self.unit(id).map(Unit::state)
    }

    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values().map(|entry| &entry.unit)
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Number of live units per state.
    pub fn state_counts(&self) -> BTreeMap<UnitStateKind, usize> {
        let mut counts = BTreeMap::new();
        for unit in self.units() {
            *counts.entry(unit.state()).or_default() += 1;
        }
        counts
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn ledger(&self) -> &PlayerLedger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut PlayerLedger {
        &mut self.ledger
    }

    pub fn hud(&self) -> &HudLog {
        &self.hud
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn pool(&self) -> &UnitPool {
        &self.pool
    }

    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulated seconds so far.
    pub fn clock(&self) -> f64 {
        self.clock
    }
}

/// Looks up a unit that can still take orders.
fn live(units: &mut BTreeMap<EntityId, Entry>, id: EntityId) -> Result<&mut Entry> {
    let entry = units.get_mut(&id).ok_or(WorldError::UnknownEntity(id))?;
    if entry.unit.body().is_dead() {
        return Err(WorldError::Dead(id));
    }
    Ok(entry)
}

/// Abandons harvesting and combat, queueing the matching notifications.
fn interrupt(id: EntityId, kit: &UnitKit, queue: &mut Vec<(EntityId, UnitEvent)>) {
    let dropped = kit.harvester.lock().cancel();
    queue.extend(dropped.into_iter().map(|event| (id, event)));
    if kit.combat.lock().disengage().is_some() {
        queue.push((id, UnitEvent::AttackStopped));
    }
}
