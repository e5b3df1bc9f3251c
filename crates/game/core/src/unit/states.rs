//! The unit state graph.
//!
//! Every non-terminal state checks death first, so a unit with no health left
//! goes to [`UnitStateKind::Die`] on the next update regardless of anything
//! else it was doing.

use state_machine::{GraphError, State, StateGraph, Transition};

use crate::kinds::ResourceType;

use super::body::UnitBody;

/// Named states of a unit.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum UnitStateKind {
    Idle,
    Walk,
    Attack,
    ExtractWood,
    ExtractGold,
    CarryWood,
    CarryGold,
    /// Waiting, undisplayed, for a producer to release the unit.
    Produce,
    Die,
}

impl UnitStateKind {
    /// Animation played when entering the state.
    pub fn animation(self) -> &'static str {
        self.into()
    }

    pub fn extracting(kind: ResourceType) -> Self {
        match kind {
            ResourceType::Wood => UnitStateKind::ExtractWood,
            ResourceType::Gold => UnitStateKind::ExtractGold,
        }
    }

    pub fn carrying(kind: ResourceType) -> Self {
        match kind {
            ResourceType::Wood => UnitStateKind::CarryWood,
            ResourceType::Gold => UnitStateKind::CarryGold,
        }
    }
}

/// State graph shared by every unit.
pub type UnitGraph = StateGraph<UnitBody, UnitStateKind>;

type Exit = Transition<UnitBody, UnitStateKind>;

/// Builds the standard unit graph.
///
/// # Errors
///
/// Only fails if the graph below is inconsistent, which is a bug.
pub fn unit_graph() -> Result<UnitGraph, GraphError<UnitStateKind>> {
    StateGraph::builder()
        .state(Idle)
        .state(Walk)
        .state(Attack)
        .state(Extract(ResourceType::Wood))
        .state(Extract(ResourceType::Gold))
        .state(Carry(ResourceType::Wood))
        .state(Carry(ResourceType::Gold))
        .state(Produce)
        .state(Die)
        .build()
}

// Conditions

fn is_dead(body: &UnitBody) -> bool {
    body.stats.is_dead()
}

fn is_moving(body: &UnitBody) -> bool {
    body.is_moving()
}

fn has_arrived(body: &UnitBody) -> bool {
    !body.is_moving()
}

fn attack_started(body: &UnitBody) -> bool {
    body.flags.is_attack_started()
}

fn attack_ended(body: &UnitBody) -> bool {
    !body.flags.is_attack_started()
}

fn is_produced(body: &UnitBody) -> bool {
    body.flags.is_produced()
}

fn extracting_wood(body: &UnitBody) -> bool {
    body.flags.extract_resource() == Some(ResourceType::Wood)
}

fn extracting_gold(body: &UnitBody) -> bool {
    body.flags.extract_resource() == Some(ResourceType::Gold)
}

fn carrying_wood(body: &UnitBody) -> bool {
    body.flags.carry_resource() == Some(ResourceType::Wood)
}

fn carrying_gold(body: &UnitBody) -> bool {
    body.flags.carry_resource() == Some(ResourceType::Gold)
}

fn not_extracting_wood(body: &UnitBody) -> bool {
    !extracting_wood(body)
}

fn not_extracting_gold(body: &UnitBody) -> bool {
    !extracting_gold(body)
}

fn not_carrying_wood(body: &UnitBody) -> bool {
    !carrying_wood(body)
}

fn not_carrying_gold(body: &UnitBody) -> bool {
    !carrying_gold(body)
}

const DIE: Exit = Transition::new(UnitStateKind::Die, is_dead);

fn announce(body: &mut UnitBody, kind: UnitStateKind) {
    tracing::trace!(entity = %body.id, state = %kind, "entering state");
    body.play(kind.animation());
}

// States

struct Idle;

impl State<UnitBody, UnitStateKind> for Idle {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::Idle
    }

    fn transitions(&self) -> Vec<Exit> {
        vec![
            DIE,
            Transition::new(UnitStateKind::ExtractWood, extracting_wood),
            Transition::new(UnitStateKind::ExtractGold, extracting_gold),
            Transition::new(UnitStateKind::CarryWood, carrying_wood),
            Transition::new(UnitStateKind::CarryGold, carrying_gold),
            Transition::new(UnitStateKind::Walk, is_moving),
            Transition::new(UnitStateKind::Attack, attack_started),
        ]
    }

    fn enter(&self, body: &mut UnitBody) {
        announce(body, UnitStateKind::Idle);
    }
}

struct Walk;

impl State<UnitBody, UnitStateKind> for Walk {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::Walk
    }

    fn transitions(&self) -> Vec<Exit> {
        vec![
            DIE,
            Transition::new(UnitStateKind::Attack, attack_started),
            Transition::new(UnitStateKind::Idle, has_arrived),
        ]
    }

    fn enter(&self, body: &mut UnitBody) {
        announce(body, UnitStateKind::Walk);
    }
}

struct Attack;

impl State<UnitBody, UnitStateKind> for Attack {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::Attack
    }

    fn transitions(&self) -> Vec<Exit> {
        vec![DIE, Transition::new(UnitStateKind::Idle, attack_ended)]
    }

    fn enter(&self, body: &mut UnitBody) {
        announce(body, UnitStateKind::Attack);
    }
}

struct Extract(ResourceType);

impl State<UnitBody, UnitStateKind> for Extract {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::extracting(self.0)
    }

    fn transitions(&self) -> Vec<Exit> {
        match self.0 {
            ResourceType::Wood => vec![
                DIE,
                Transition::new(UnitStateKind::CarryWood, carrying_wood),
                Transition::new(UnitStateKind::Idle, not_extracting_wood),
            ],
            ResourceType::Gold => vec![
                DIE,
                Transition::new(UnitStateKind::CarryGold, carrying_gold),
                Transition::new(UnitStateKind::Idle, not_extracting_gold),
            ],
        }
    }

    fn enter(&self, body: &mut UnitBody) {
        announce(body, self.kind());
    }
}

struct Carry(ResourceType);

impl State<UnitBody, UnitStateKind> for Carry {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::carrying(self.0)
    }

    fn transitions(&self) -> Vec<Exit> {
        let done = match self.0 {
            ResourceType::Wood => not_carrying_wood,
            ResourceType::Gold => not_carrying_gold,
        };
        vec![DIE, Transition::new(UnitStateKind::Idle, done)]
    }

    fn enter(&self, body: &mut UnitBody) {
        announce(body, self.kind());
    }
}

struct Produce;

impl State<UnitBody, UnitStateKind> for Produce {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::Produce
    }

    fn transitions(&self) -> Vec<Exit> {
        vec![DIE, Transition::new(UnitStateKind::Idle, is_produced)]
    }

    fn enter(&self, body: &mut UnitBody) {
        body.display = false;
        announce(body, UnitStateKind::Produce);
    }

    fn exit(&self, body: &mut UnitBody) {
        body.display = true;
    }
}

struct Die;

impl State<UnitBody, UnitStateKind> for Die {
    fn kind(&self) -> UnitStateKind {
        UnitStateKind::Die
    }

    fn transitions(&self) -> Vec<Exit> {
        Vec::new()
    }

    fn is_terminal(&self) -> bool {
        true
    }

    fn enter(&self, body: &mut UnitBody) {
        announce(body, UnitStateKind::Die);
        body.dying_for = 0.0;
        body.parts.stop_all();
        body.parts.collidable.set_enabled(false);
        body.parts.selectable.on_selection(false);
        body.parts.selectable.set_enabled(false);
    }

    fn update(&self, body: &mut UnitBody, delta: f64) {
        if body.destroyed {
            return;
        }
        body.dying_for += delta;
        if body.dying_for >= body.config.death_delay {
            body.destroyed = true;
            tracing::info!(entity = %body.id, "unit destroyed");
        }
    }
}
