//! Resource extraction, carry and drop-off.
//!
//! The extraction subsystem drives the cycle; the unit reacts here by
//! steering its pathfinder, keeping its [`FlagStore`](super::FlagStore) in
//! step, crediting the economy, and felling trees.

use tracing::{debug, warn};

use crate::common::Position;
use crate::env::{Services, closest_tree, cut_tree};
use crate::error::WorkflowError;
use crate::kinds::ResourceType;

use super::body::UnitBody;
use super::events::ExtractorListener;

impl ExtractorListener for UnitBody {
    fn on_start_goto_resource(
        &mut self,
        kind: ResourceType,
        location: Position,
        _services: &mut Services<'_>,
    ) {
        if self.flags.carry_resource().is_some() {
            return;
        }
        debug!(entity = %self.id, resource = %kind, tile = ?location, "heading to resource");
        self.parts.pathfinder.set_destination(location);
        self.flags.set_goto_resource(true);
    }

    fn on_start_extraction(
        &mut self,
        kind: ResourceType,
        location: Position,
        _services: &mut Services<'_>,
    ) {
        if let Some(carried) = self.flags.carry_resource() {
            warn!(
                entity = %self.id,
                resource = %kind,
                %carried,
                "extraction ignored while carrying"
            );
            return;
        }
        self.flags.start_extracting(kind);
        if kind.is_directional() {
            self.parts.pathfinder.point_to(location);
        }
    }

    fn on_start_carry(&mut self, kind: ResourceType, quantity: u32, services: &mut Services<'_>) {
        if let Err(error) = self.begin_carry(kind, services) {
            warn!(entity = %self.id, resource = %kind, quantity, %error, "cannot carry");
            self.parts.extractor.stop_extraction();
        }
    }

    fn on_start_drop_off(
        &mut self,
        kind: ResourceType,
        quantity: u32,
        services: &mut Services<'_>,
    ) {
        self.hide(services);
        if services.economy.owns(self.id) {
            services.economy.increase_resource(kind, quantity);
        }
        debug!(entity = %self.id, resource = %kind, quantity, "dropping off");
    }

    fn on_dropped_off(&mut self, _kind: ResourceType, remaining: u32, _services: &mut Services<'_>) {
        if remaining == 0 {
            self.show();
            self.flags.clear_carry();
        }
    }

    fn on_extraction_stopped(&mut self, _services: &mut Services<'_>) {
        self.flags.set_goto_resource(false);
        self.flags.clear_extract();
    }
}

impl UnitBody {
    /// Sends the unit to its race's warehouse with a load of `kind`.
    fn begin_carry(
        &mut self,
        kind: ResourceType,
        services: &mut Services<'_>,
    ) -> Result<(), WorkflowError> {
        let race = self.stats.race();
        let warehouse = services
            .economy
            .warehouse(race)
            .ok_or(WorkflowError::NoWarehouse {
                entity: self.id,
                race,
            })?;

        if kind == ResourceType::Wood {
            match self.cut_wood(services) {
                Ok(true) => {}
                Ok(false) => {
                    debug!(entity = %self.id, "tree already felled, nothing to carry");
                    self.flags.clear_extract();
                    return Ok(());
                }
                Err(error) => {
                    warn!(entity = %self.id, %error, "cannot cut wood");
                    self.parts.extractor.stop_extraction();
                }
            }
        }

        self.parts.pathfinder.set_destination(warehouse);
        self.flags.start_carrying(kind);

        if services.economy.owns(self.id) {
            services
                .hud
                .switch_extract_carry(self.flags.carry_resource().is_some());
        }
        Ok(())
    }

    /// Fells the tree being harvested and retargets the next one nearby.
    ///
    /// Returns false if another unit felled the tree first. The search for the
    /// next tree runs either way.
    fn cut_wood(&mut self, services: &mut Services<'_>) -> Result<bool, WorkflowError> {
        let tile = self
            .parts
            .extractor
            .resource_location()
            .ok_or(WorkflowError::NoResourceLocation { entity: self.id })?;

        let felled = cut_tree(&mut *services.map, tile);
        if felled {
            debug!(entity = %self.id, tile = ?tile, "tree felled");
        }

        let from = self.parts.pathfinder.tile();
        match closest_tree(&*services.map, tile, from, self.config.tree_search_radius) {
            Some(next) => {
                debug!(entity = %self.id, tile = ?next, "next tree");
                self.parts.extractor.set_resource(ResourceType::Wood, next);
            }
            None => {
                warn!(entity = %self.id, tile = ?tile, "no tree left nearby");
                self.parts.extractor.stop_extraction();
            }
        }
        Ok(felled)
    }
}
