mod common;

use std::sync::Arc;

use common::{Rig, World, spawn, spawn_with};
use skirmish_core::{
    AssemblyError, CoreConfig, EntityId, Position, Race, ResourceType, TerrainKind, TerrainMap,
    Unit, UnitBody, UnitBuilder, UnitEvent, UnitStateKind, unit_graph,
};
use state_machine::{State, StateGraph, Step, Transition};

const OPEN: &[&str] = &[".....", ".....", ".....", ".....", "....."];
const WAREHOUSE: Position = Position::new(0, 0);
const MINE: Position = Position::new(4, 4);

#[test]
fn new_unit_starts_idle() {
    let rig = Rig::at(Position::new(2, 2));
    let unit = spawn(1, &rig);

    assert_eq!(unit.state(), UnitStateKind::Idle);
    assert!(unit.body().flags().is_clear());
    assert!(unit.body().is_visible());
    assert!(unit.body().is_displayed());
    assert_eq!(rig.get().animations, vec!["idle"]);
}

#[test]
fn death_preempts_every_other_condition() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartExtraction {
            kind: ResourceType::Gold,
            location: MINE,
        },
        &mut world.services(),
    );
    unit.handle(
        UnitEvent::AttackStarted {
            target: EntityId(9),
        },
        &mut world.services(),
    );
    rig.set_moving(true);
    unit.stats_mut().set_life(0);

    let step = unit.update(0.1, &mut world.services());
    assert_eq!(
        step,
        Step::Changed {
            from: UnitStateKind::Idle,
            to: UnitStateKind::Die,
        }
    );
}

#[test]
fn death_preempts_from_every_busy_state() {
    let setups: [(UnitStateKind, fn(&mut Unit, &Rig, &mut World)); 4] = [
        (UnitStateKind::Walk, |_, rig, _| rig.set_moving(true)),
        (UnitStateKind::Attack, |unit, _, world| {
            unit.handle(
                UnitEvent::AttackStarted {
                    target: EntityId(2),
                },
                &mut world.services(),
            )
        }),
        (UnitStateKind::ExtractGold, |unit, _, world| {
            unit.handle(
                UnitEvent::StartExtraction {
                    kind: ResourceType::Gold,
                    location: MINE,
                },
                &mut world.services(),
            )
        }),
        (UnitStateKind::Produce, |unit, _, _| {
            unit.begin_production().unwrap();
        }),
    ];

    for (busy, setup) in setups {
        let mut world = World::with_warehouse(OPEN, WAREHOUSE);
        let rig = Rig::at(Position::new(2, 2));
        let mut unit = spawn(1, &rig);

        setup(&mut unit, &rig, &mut world);
        unit.update(0.1, &mut world.services());
        assert_eq!(unit.state(), busy);

        unit.stats_mut().take_damage(1_000);
        unit.update(0.1, &mut world.services());
        assert_eq!(unit.state(), UnitStateKind::Die, "from {busy}");
    }
}

#[test]
fn dying_while_walking_skips_arrival() {
    let mut world = World::new(OPEN);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    rig.set_moving(true);
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Walk);

    unit.stats_mut().set_life(0);
    let step = unit.update(0.1, &mut world.services());
    assert_eq!(
        step,
        Step::Changed {
            from: UnitStateKind::Walk,
            to: UnitStateKind::Die,
        }
    );

    let record = rig.get();
    assert!(!record.moving);
    assert_eq!(record.moves_stopped, 1);
    assert_eq!(record.attacks_stopped, 1);
    assert_eq!(record.extractions_stopped, 1);
    assert!(!record.collidable);
    assert!(!record.selectable);
    assert_eq!(record.animations.last(), Some(&"die"));
}

#[test]
fn walk_returns_to_idle_on_arrival() {
    let mut world = World::new(OPEN);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    rig.set_moving(true);
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Walk);

    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Walk);
    assert!((unit.machine().elapsed() - 0.1).abs() < f64::EPSILON);

    rig.set_moving(false);
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Idle);
}

#[test]
fn attack_interrupts_walking_and_ends_in_idle() {
    let mut world = World::new(OPEN);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    rig.set_moving(true);
    unit.update(0.1, &mut world.services());
    unit.handle(
        UnitEvent::AttackStarted {
            target: EntityId(7),
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Attack);

    unit.handle(UnitEvent::AttackStopped, &mut world.services());
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Idle);
}

#[test]
fn gold_round_trip() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartExtraction {
            kind: ResourceType::Gold,
            location: MINE,
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::ExtractGold);
    assert_eq!(rig.get().facing, None);

    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 100,
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::CarryGold);
    assert_eq!(unit.body().flags().extract_resource(), None);
    assert_eq!(
        unit.body().flags().carry_resource(),
        Some(ResourceType::Gold)
    );
    assert_eq!(rig.get().destination, Some(WAREHOUSE));
    assert_eq!(world.hud.carry_label, Some(true));

    unit.handle(
        UnitEvent::StartDropOff {
            kind: ResourceType::Gold,
            quantity: 100,
        },
        &mut world.services(),
    );
    assert!(!unit.body().is_visible());
    assert!(!rig.get().collidable);
    assert_eq!(world.economy.stock(ResourceType::Gold), 100);

    unit.handle(
        UnitEvent::DroppedOff {
            kind: ResourceType::Gold,
            remaining: 0,
        },
        &mut world.services(),
    );
    assert!(unit.body().is_visible());
    assert!(rig.get().collidable);
    assert_eq!(unit.body().flags().carry_resource(), None);

    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Idle);
}

#[test]
fn partial_drop_off_keeps_unit_inside() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    for event in [
        UnitEvent::StartExtraction {
            kind: ResourceType::Gold,
            location: MINE,
        },
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        UnitEvent::StartDropOff {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        UnitEvent::DroppedOff {
            kind: ResourceType::Gold,
            remaining: 5,
        },
    ] {
        unit.handle(event, &mut world.services());
    }

    assert!(!unit.body().is_visible());
    assert_eq!(
        unit.body().flags().carry_resource(),
        Some(ResourceType::Gold)
    );
}

#[test]
fn unowned_units_do_not_credit_the_player() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(2, &rig);

    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );
    unit.handle(
        UnitEvent::StartDropOff {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );

    assert_eq!(world.economy.stock(ResourceType::Gold), 0);
    assert_eq!(world.hud.carry_label, None);
}

#[test]
fn hiding_a_selected_unit_clears_the_selection() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    world.hud.selection.insert(EntityId(1));
    let rig = Rig::at(Position::new(2, 2));
    rig.get().highlighted = true;
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartDropOff {
            kind: ResourceType::Wood,
            quantity: 10,
        },
        &mut world.services(),
    );

    assert!(world.hud.selection.is_empty());
    assert_eq!(world.hud.menu_clears, 1);
    assert!(!rig.get().highlighted);
}

#[test]
fn extract_and_carry_never_overlap() {
    let mut world = World::with_warehouse(&[".....", ".TT..", "....."], WAREHOUSE);
    let rig = Rig::at(Position::new(1, 2));
    rig.set_resource(ResourceType::Wood, Position::new(1, 1));
    let mut unit = spawn(1, &rig);

    let events = [
        UnitEvent::StartGotoResource {
            kind: ResourceType::Wood,
            location: Position::new(1, 1),
        },
        UnitEvent::StartExtraction {
            kind: ResourceType::Wood,
            location: Position::new(1, 1),
        },
        UnitEvent::StartCarry {
            kind: ResourceType::Wood,
            quantity: 10,
        },
        UnitEvent::StartExtraction {
            kind: ResourceType::Gold,
            location: MINE,
        },
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        UnitEvent::StartDropOff {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        UnitEvent::DroppedOff {
            kind: ResourceType::Gold,
            remaining: 0,
        },
        UnitEvent::StartExtraction {
            kind: ResourceType::Gold,
            location: MINE,
        },
        UnitEvent::ExtractionStopped,
    ];

    for event in events {
        unit.handle(event, &mut world.services());
        unit.update(0.1, &mut world.services());
        let flags = unit.body().flags();
        assert!(
            !(flags.extract_resource().is_some() && flags.carry_resource().is_some()),
            "overlap after {event:?}"
        );
    }
    assert!(!unit.body().flags().is_goto_resource());
}

#[test]
fn goto_resource_is_ignored_while_carrying() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartGotoResource {
            kind: ResourceType::Gold,
            location: MINE,
        },
        &mut world.services(),
    );
    assert_eq!(rig.get().destination, Some(MINE));
    assert!(unit.body().flags().is_goto_resource());

    unit.handle(UnitEvent::ExtractionStopped, &mut world.services());
    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );
    unit.handle(
        UnitEvent::StartGotoResource {
            kind: ResourceType::Gold,
            location: Position::new(3, 3),
        },
        &mut world.services(),
    );

    assert_eq!(rig.get().destination, Some(WAREHOUSE));
    assert!(!unit.body().flags().is_goto_resource());
}

#[test]
fn extraction_is_ignored_while_carrying() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::CarryGold);

    unit.handle(
        UnitEvent::StartExtraction {
            kind: ResourceType::Wood,
            location: Position::new(3, 3),
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());

    let flags = unit.body().flags();
    assert_eq!(flags.carry_resource(), Some(ResourceType::Gold));
    assert_eq!(flags.extract_resource(), None);
    assert_eq!(unit.state(), UnitStateKind::CarryGold);
    assert_eq!(rig.get().destination, Some(WAREHOUSE));
    assert_eq!(rig.get().facing, None);
}

#[test]
fn wood_extraction_faces_the_tree() {
    let mut world = World::new(&[".T.", "..."]);
    let rig = Rig::at(Position::new(1, 1));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartExtraction {
            kind: ResourceType::Wood,
            location: Position::new(1, 0),
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());

    assert_eq!(unit.state(), UnitStateKind::ExtractWood);
    assert_eq!(rig.get().facing, Some(Position::new(1, 0)));
    assert_eq!(rig.get().animations.last(), Some(&"extract_wood"));
}

#[test]
fn cutting_wood_moves_on_to_the_adjacent_tree() {
    let mut world = World::with_warehouse(&[".....", ".TT..", "....."], WAREHOUSE);
    let rig = Rig::at(Position::new(1, 2));
    rig.set_resource(ResourceType::Wood, Position::new(1, 1));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Wood,
            quantity: 10,
        },
        &mut world.services(),
    );

    assert_eq!(
        world.map.terrain(Position::new(1, 1)),
        Some(TerrainKind::TreeCut)
    );
    assert_eq!(world.map.resolved, vec![Position::new(1, 1)]);
    let record = rig.get();
    assert_eq!(
        record.resource,
        Some((ResourceType::Wood, Position::new(2, 1)))
    );
    assert_eq!(record.extractions_stopped, 0);
    assert_eq!(
        unit.body().flags().carry_resource(),
        Some(ResourceType::Wood)
    );
}

#[test]
fn cutting_the_last_tree_stops_extraction() {
    let mut world = World::with_warehouse(&[".....", ".T...", "....."], WAREHOUSE);
    let rig = Rig::at(Position::new(1, 2));
    rig.set_resource(ResourceType::Wood, Position::new(1, 1));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Wood,
            quantity: 10,
        },
        &mut world.services(),
    );

    let record = rig.get();
    assert_eq!(record.resource, None);
    assert_eq!(record.extractions_stopped, 1);
    assert_eq!(record.destination, Some(WAREHOUSE));
}

#[test]
fn only_one_unit_fells_a_shared_tree() {
    let mut world = World::with_warehouse(&[".....", ".TT..", "....."], WAREHOUSE);
    let first = Rig::at(Position::new(1, 2));
    let second = Rig::at(Position::new(0, 1));
    first.set_resource(ResourceType::Wood, Position::new(1, 1));
    second.set_resource(ResourceType::Wood, Position::new(1, 1));
    let mut a = spawn(1, &first);
    let mut b = spawn(2, &second);

    let carry = UnitEvent::StartCarry {
        kind: ResourceType::Wood,
        quantity: 10,
    };
    a.handle(carry, &mut world.services());
    b.handle(carry, &mut world.services());

    assert_eq!(world.map.resolved, vec![Position::new(1, 1)]);
    assert_eq!(
        second.get().resource,
        Some((ResourceType::Wood, Position::new(2, 1)))
    );
    assert_eq!(a.body().flags().carry_resource(), Some(ResourceType::Wood));
}

#[test]
fn late_cutter_carries_nothing() {
    let mut world = World::with_warehouse(&[".....", ".TT..", "....."], WAREHOUSE);
    let first = Rig::at(Position::new(1, 2));
    let second = Rig::at(Position::new(0, 1));
    first.set_resource(ResourceType::Wood, Position::new(1, 1));
    second.set_resource(ResourceType::Wood, Position::new(1, 1));
    let mut a = spawn(1, &first);
    let mut b = spawn(2, &second);

    let extract = UnitEvent::StartExtraction {
        kind: ResourceType::Wood,
        location: Position::new(1, 1),
    };
    let carry = UnitEvent::StartCarry {
        kind: ResourceType::Wood,
        quantity: 10,
    };
    for unit in [&mut a, &mut b] {
        unit.handle(extract, &mut world.services());
        unit.update(0.1, &mut world.services());
        assert_eq!(unit.state(), UnitStateKind::ExtractWood);
    }
    a.handle(carry, &mut world.services());
    b.handle(carry, &mut world.services());
    a.update(0.1, &mut world.services());
    b.update(0.1, &mut world.services());

    assert_eq!(a.state(), UnitStateKind::CarryWood);
    assert_eq!(b.state(), UnitStateKind::Idle);
    assert!(b.body().flags().is_clear());
    assert_eq!(second.get().destination, None);
    assert_eq!(
        second.get().resource,
        Some((ResourceType::Wood, Position::new(2, 1)))
    );
    assert_eq!(world.hud.carry_label, Some(true));
}

#[test]
fn carrying_without_warehouse_aborts_extraction() {
    let mut world = World::new(OPEN);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::StartExtraction {
            kind: ResourceType::Gold,
            location: MINE,
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );

    assert_eq!(rig.get().extractions_stopped, 1);
    assert_eq!(unit.body().flags().carry_resource(), None);
    assert_eq!(unit.state(), UnitStateKind::ExtractGold);

    unit.handle(UnitEvent::ExtractionStopped, &mut world.services());
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Idle);
}

#[test]
fn dying_unit_is_destroyed_after_the_delay() {
    let mut world = World::new(OPEN);
    world.hud.selection.insert(EntityId(1));
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn_with(1, &rig, CoreConfig::default().with_death_delay(1.0));

    unit.stats_mut().set_life(0);
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Die);
    assert!(world.hud.selection.is_empty());
    assert_eq!(world.hud.menu_clears, 1);

    unit.update(0.5, &mut world.services());
    assert!(!unit.body().is_destroyed());

    rig.set_moving(true);
    unit.update(0.6, &mut world.services());
    assert!(unit.body().is_destroyed());
    assert_eq!(unit.state(), UnitStateKind::Die);
}

#[test]
fn recycle_is_idempotent() {
    let mut world = World::with_warehouse(OPEN, WAREHOUSE);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.handle(
        UnitEvent::AttackStarted {
            target: EntityId(3),
        },
        &mut world.services(),
    );
    unit.handle(
        UnitEvent::StartCarry {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );
    unit.handle(
        UnitEvent::StartDropOff {
            kind: ResourceType::Gold,
            quantity: 10,
        },
        &mut world.services(),
    );
    unit.stats_mut().set_life(0);
    unit.update(0.1, &mut world.services());
    unit.update(5.0, &mut world.services());
    assert!(unit.body().is_destroyed());

    let snapshot = |body: &UnitBody| {
        (
            *body.flags(),
            *body.stats(),
            body.is_visible(),
            body.is_displayed(),
            body.is_destroyed(),
        )
    };

    unit.recycle();
    let once = (unit.state(), snapshot(unit.body()));
    unit.recycle();
    let twice = (unit.state(), snapshot(unit.body()));

    assert_eq!(once, twice);
    assert_eq!(unit.state(), UnitStateKind::Idle);
    assert!(unit.body().flags().is_clear());
    assert!(unit.body().is_visible());
    assert_eq!(unit.body().stats().life(), 40);

    let record = rig.get();
    assert!(record.collidable);
    assert!(record.selectable);
    assert!(!record.moving);
}

#[test]
fn recycle_on_a_fresh_unit_keeps_it_idle() {
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.recycle();

    assert_eq!(unit.state(), UnitStateKind::Idle);
    assert!(unit.body().flags().is_clear());
}

#[test]
fn produced_unit_waits_hidden_until_released() {
    let mut world = World::new(OPEN);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    let step = unit.begin_production().unwrap();
    assert_eq!(
        step,
        Step::Changed {
            from: UnitStateKind::Idle,
            to: UnitStateKind::Produce,
        }
    );
    assert!(!unit.body().is_displayed());

    unit.update(1.0, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Produce);

    unit.handle(
        UnitEvent::ProductionEnded {
            producer: EntityId(50),
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Idle);
    assert!(unit.body().is_displayed());
}

#[test]
fn production_signal_persists_until_recycled() {
    let mut world = World::new(OPEN);
    let rig = Rig::at(Position::new(2, 2));
    let mut unit = spawn(1, &rig);

    unit.begin_production().unwrap();
    unit.handle(
        UnitEvent::ProductionEnded {
            producer: EntityId(50),
        },
        &mut world.services(),
    );
    unit.update(0.1, &mut world.services());
    assert!(unit.body().flags().is_produced());

    unit.begin_production().unwrap();
    assert!(!unit.body().flags().is_produced());
    unit.update(0.1, &mut world.services());
    assert_eq!(unit.state(), UnitStateKind::Produce);
}

#[test]
fn forced_change_to_unknown_state_leaves_unit_alone() {
    struct Only;

    impl State<UnitBody, UnitStateKind> for Only {
        fn kind(&self) -> UnitStateKind {
            UnitStateKind::Idle
        }

        fn transitions(&self) -> Vec<Transition<UnitBody, UnitStateKind>> {
            vec![Transition::new(UnitStateKind::Die, |body| body.is_dead())]
        }
    }

    struct Gone;

    impl State<UnitBody, UnitStateKind> for Gone {
        fn kind(&self) -> UnitStateKind {
            UnitStateKind::Die
        }

        fn transitions(&self) -> Vec<Transition<UnitBody, UnitStateKind>> {
            Vec::new()
        }

        fn is_terminal(&self) -> bool {
            true
        }
    }

    let graph = StateGraph::builder().state(Only).state(Gone).build().unwrap();
    let rig = Rig::default();
    let mut unit = UnitBuilder::new(EntityId(1), Race::Orc)
        .pathfinder(rig.clone())
        .attacker(rig.clone())
        .extractor(rig.clone())
        .collidable(rig.clone())
        .selectable(rig.clone())
        .build(Arc::new(graph))
        .unwrap();
    let mut world = World::new(OPEN);

    assert!(
        unit.change_state(UnitStateKind::Walk, &mut world.services())
            .is_err()
    );
    assert_eq!(unit.state(), UnitStateKind::Idle);
    assert!(unit.begin_production().is_err());
    assert_eq!(unit.state(), UnitStateKind::Idle);
}

#[test]
fn assembly_requires_every_part() {
    let rig = Rig::default();
    let result = UnitBuilder::new(EntityId(4), Race::Human)
        .pathfinder(rig.clone())
        .attacker(rig.clone())
        .collidable(rig.clone())
        .selectable(rig.clone())
        .build(Arc::new(unit_graph().unwrap()));

    assert_eq!(
        result.unwrap_err(),
        AssemblyError::MissingPart {
            entity: EntityId(4),
            part: "extractor",
        }
    );
}

#[test]
fn assembly_requires_a_death_state() {
    struct Lonely;

    impl State<UnitBody, UnitStateKind> for Lonely {
        fn kind(&self) -> UnitStateKind {
            UnitStateKind::Idle
        }

        fn transitions(&self) -> Vec<Transition<UnitBody, UnitStateKind>> {
            Vec::new()
        }

        fn is_terminal(&self) -> bool {
            true
        }
    }

    let graph = StateGraph::builder().state(Lonely).build().unwrap();
    let rig = Rig::default();
    let result = UnitBuilder::new(EntityId(1), Race::Human)
        .pathfinder(rig.clone())
        .attacker(rig.clone())
        .extractor(rig.clone())
        .collidable(rig.clone())
        .selectable(rig.clone())
        .build(Arc::new(graph));

    assert_eq!(
        result.unwrap_err(),
        AssemblyError::MissingState(UnitStateKind::Die)
    );
}
