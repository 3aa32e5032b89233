//! Frame-by-frame driver for a two-fighter match
//!
//! Each call to [`Duel::step`] runs one frame in a fixed order:
//!
//! 1. buffer both players' input tokens
//! 2. tick fighter timers and apply movement
//! 3. resolve attacks, player one first
//! 4. check the round clock and knockouts
//!
//! Player one's attack is resolved before player two's on the same frame, so
//! a simultaneous press is won by player one.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::combat::attack::AttackType;
use crate::combat::fighter::Fighter;
use crate::combat::phase::FighterState;
use crate::combat::resolution::{resolve_attack, AttackRequest, Exchange, Resolution};
use crate::core::config::CombatConfig;
use crate::core::error::Result;
use crate::core::types::{frame_to_millis, Facing, Frame, PlayerSlot};
use crate::duel::events::CombatEvent;
use crate::duel::report::{FighterStats, MatchReport};
use crate::duel::round::{check_round_end, RoundResult, RoundState};
use crate::input::buffer::InputBuffer;
use crate::input::recognizer::{select_move, MoveSelection};
use crate::input::token::InputToken;
use crate::moves::descriptor::MoveDescriptor;
use crate::moves::frame_data::FrameDataTable;
use crate::moves::roster::MoveSet;

/// Frame data entries the driver needs
const REQUIRED_FRAME_DATA: [&str; 8] = [
    "light_punch",
    "medium_punch",
    "heavy_punch",
    "light_kick",
    "medium_kick",
    "heavy_kick",
    "special",
    "super",
];

/// One player's input for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Tokens that arrived this frame, in order
    pub tokens: Vec<InputToken>,
    /// Holding guard
    pub guard: bool,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn press(tokens: impl IntoIterator<Item = InputToken>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            guard: false,
        }
    }

    pub fn guarding(mut self) -> Self {
        self.guard = true;
        self
    }
}

/// Which move a button press started
#[derive(Debug, Clone, PartialEq)]
enum PlannedMove {
    Normal { name: &'static str },
    Declared { name: String, is_super: bool },
}

#[derive(Debug, Clone, PartialEq)]
struct PlannedAttack {
    request: AttackRequest,
    state: FighterState,
    cost: u32,
    invulnerability: u32,
    kind: PlannedMove,
}

/// A running match between two fighters
#[derive(Debug, Clone)]
pub struct Duel {
    config: CombatConfig,
    frame_data: FrameDataTable,
    movesets: [MoveSet; 2],
    fighters: [Fighter; 2],
    buffers: [InputBuffer; 2],
    held: [InputToken; 2],
    round: RoundState,
    frame: Frame,
    outcome: Option<Option<PlayerSlot>>,
    stats: [FighterStats; 2],
}

impl Duel {
    pub fn new(config: CombatConfig, frame_data: FrameDataTable, movesets: [MoveSet; 2]) -> Result<Self> {
        config.validate()?;
        for name in REQUIRED_FRAME_DATA {
            frame_data.require(name)?;
        }

        let fighters = fresh_fighters(&movesets, &config, [0, 0]);
        let buffers = [
            InputBuffer::from_config(&config),
            InputBuffer::from_config(&config),
        ];
        let round = RoundState::new(&config);

        info!(
            p1 = %movesets[0].name,
            p2 = %movesets[1].name,
            rounds_to_win = config.rounds_to_win,
            "match started"
        );

        Ok(Self {
            config,
            frame_data,
            movesets,
            fighters,
            buffers,
            held: [InputToken::Neutral; 2],
            round,
            frame: 0,
            outcome: None,
            stats: Default::default(),
        })
    }

    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, slot: PlayerSlot) -> &Fighter {
        &self.fighters[slot.index()]
    }

    pub fn moveset(&self, slot: PlayerSlot) -> &MoveSet {
        &self.movesets[slot.index()]
    }

    pub fn buffer(&self, slot: PlayerSlot) -> &InputBuffer {
        &self.buffers[slot.index()]
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn stats(&self, slot: PlayerSlot) -> &FighterStats {
        &self.stats[slot.index()]
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Winner of a finished match; `None` while running or on a draw
    pub fn winner(&self) -> Option<PlayerSlot> {
        self.outcome.flatten()
    }

    /// Run one frame
    pub fn step(&mut self, inputs: [FrameInput; 2]) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }

        let frame = self.frame;
        let now = frame_to_millis(frame);

        let mut pressed = [None; 2];
        let mut guarding = [false; 2];
        for (i, input) in inputs.iter().enumerate() {
            for &token in &input.tokens {
                self.buffers[i].record(token, now);
                if token.is_direction() {
                    self.held[i] = token;
                } else if token == InputToken::Block {
                    guarding[i] = true;
                } else {
                    pressed[i] = Some(token);
                }
            }
            guarding[i] |= input.guard;
        }

        for i in 0..2 {
            let mut fighter = self.fighters[i].tick();
            fighter.state = fighter.state.clone().with_movement(self.held[i]);
            self.fighters[i] = fighter;
        }

        for slot in PlayerSlot::both() {
            if let Some(button) = pressed[slot.index()] {
                let defender_guarding = guarding[slot.opponent().index()];
                self.perform(slot, button, defender_guarding, frame, &mut events);
            }
        }

        self.round.tick();
        self.frame += 1;

        if let Some(result) = check_round_end(&self.fighters, &self.round, &self.config) {
            self.finish_round(result, frame, &mut events);
        }

        events
    }

    /// Summary of the match so far
    pub fn report(&self) -> MatchReport {
        let winner_slot = self.winner();
        MatchReport {
            fighters: [
                self.fighters[0].name.clone(),
                self.fighters[1].name.clone(),
            ],
            winner: winner_slot.map(|slot| self.fighters[slot.index()].name.clone()),
            winner_slot,
            finished: self.is_over(),
            rounds: self.round.results.clone(),
            total_frames: self.frame,
            stats: self.stats.clone(),
        }
    }

    fn perform(
        &mut self,
        slot: PlayerSlot,
        button: InputToken,
        defender_guarding: bool,
        frame: Frame,
        events: &mut Vec<CombatEvent>,
    ) {
        let i = slot.index();
        let o = slot.opponent().index();

        let current = &self.fighters[i];
        let cancelling = !current.is_ready() && current.can_cancel();
        if !current.is_ready() && !cancelling {
            return;
        }

        let plan = match self.plan_attack(slot, button, cancelling) {
            Some(plan) => plan,
            None => return,
        };

        let mut attacker = match self.fighters[i].clone().spend_meter(plan.cost) {
            Some(fighter) => fighter,
            None => return,
        };
        attacker.state = plan.state.clone();
        attacker.combat = attacker.combat.with_invulnerability(plan.invulnerability);

        let stats = &mut self.stats[i];
        stats.attacks += 1;
        match &plan.kind {
            PlannedMove::Normal { name } => {
                events.push(CombatEvent::AttackStarted {
                    frame,
                    player: slot,
                    attack: name.to_string(),
                    attack_type: plan.request.attack_type,
                });
            }
            PlannedMove::Declared { name, is_super } => {
                if *is_super {
                    stats.supers += 1;
                } else {
                    stats.specials += 1;
                }
                info!(player = ?slot, fighter = %attacker.name, move_name = %name, is_super, "special move");
                events.push(CombatEvent::SpecialPerformed {
                    frame,
                    player: slot,
                    name: name.clone(),
                    is_super: *is_super,
                    meter_spent: plan.cost,
                    cancelled: cancelling,
                });
                self.buffers[i].clear();
            }
        }

        let resolution = resolve_attack(
            &attacker,
            &self.fighters[o],
            plan.request,
            defender_guarding,
            &self.config,
        );

        match resolution {
            Resolution::Hit(exchange) => {
                let stats = &mut self.stats[i];
                stats.hits += 1;
                stats.damage_dealt += exchange.damage;
                stats.max_combo = stats.max_combo.max(exchange.defender.combat.combo_count);
                events.push(CombatEvent::Hit {
                    frame,
                    attacker: slot,
                    damage: exchange.damage,
                    combo: exchange.defender.combat.combo_count,
                    defender_health: exchange.defender.health,
                });
                self.apply_exchange(i, o, exchange);
            }
            Resolution::Blocked(exchange) => {
                let stats = &mut self.stats[i];
                stats.blocked += 1;
                stats.damage_dealt += exchange.damage;
                events.push(CombatEvent::Blocked {
                    frame,
                    attacker: slot,
                    chip: exchange.damage,
                    defender_health: exchange.defender.health,
                });
                self.apply_exchange(i, o, exchange);
            }
            Resolution::Whiff => {
                self.stats[i].whiffs += 1;
                events.push(CombatEvent::Whiff {
                    frame,
                    attacker: slot,
                });
                self.fighters[i] = attacker;
            }
        }
    }

    /// Turn a button press into an owned attack plan
    ///
    /// Only specials and supers may cancel an attack in progress.
    fn plan_attack(&self, slot: PlayerSlot, button: InputToken, cancelling: bool) -> Option<PlannedAttack> {
        let i = slot.index();
        let fighter = &self.fighters[i];
        let selection = select_move(
            &self.buffers[i],
            &self.movesets[i],
            fighter.meter,
            fighter.facing,
            self.held[i],
            button,
        );

        match selection {
            MoveSelection::Nothing => None,
            MoveSelection::Normal(_) if cancelling => None,
            MoveSelection::Normal(normal) => {
                let name = normal.move_name();
                let data = self.frame_data.get(name)?;
                Some(PlannedAttack {
                    request: AttackRequest::from_frame_data(data, normal.strength),
                    state: FighterState::attacking(normal.strength, data.total_frames()),
                    cost: 0,
                    invulnerability: 0,
                    kind: PlannedMove::Normal { name },
                })
            }
            MoveSelection::Special(special) => self.plan_declared(special, false),
            MoveSelection::Super(super_move) => self.plan_declared(super_move, true),
        }
    }

    fn plan_declared(&self, descriptor: &MoveDescriptor, is_super: bool) -> Option<PlannedAttack> {
        let class = if is_super {
            AttackType::Super
        } else {
            AttackType::Special
        };
        let data = descriptor.frame_data(self.frame_data.get(class.as_str())?);

        Some(PlannedAttack {
            request: AttackRequest::from_frame_data(&data, descriptor.kind),
            state: FighterState::special(descriptor.name.clone(), data.total_frames()),
            cost: descriptor.cost,
            invulnerability: if is_super { data.startup } else { 0 },
            kind: PlannedMove::Declared {
                name: descriptor.name.clone(),
                is_super,
            },
        })
    }

    fn apply_exchange(&mut self, attacker: usize, defender: usize, exchange: Exchange) {
        let mut new_attacker = exchange.attacker;
        new_attacker.state = new_attacker.state.with_cancel_window();
        self.fighters[attacker] = new_attacker;
        self.fighters[defender] = exchange.defender;
    }

    fn finish_round(&mut self, result: RoundResult, frame: Frame, events: &mut Vec<CombatEvent>) {
        for fighter in self.fighters.iter_mut() {
            if fighter.is_knocked_out() {
                fighter.state = FighterState::knocked_out();
            }
        }

        info!(
            round = result.round,
            winner = ?result.winner,
            reason = ?result.reason,
            p1_health = self.fighters[0].health,
            p2_health = self.fighters[1].health,
            "round over"
        );
        events.push(CombatEvent::RoundOver {
            frame,
            round: result.round,
            winner: result.winner,
            reason: result.reason,
        });

        self.round.record(result, &self.config);

        match self.round.match_winner(&self.config) {
            Some(winner) => {
                self.outcome = Some(winner);
                info!(winner = ?winner, rounds = self.round.results.len(), "match over");
                events.push(CombatEvent::MatchOver { frame, winner });
            }
            None => self.start_next_round(),
        }
    }

    /// Fresh fighters and empty buffers; meter carries over
    fn start_next_round(&mut self) {
        let meters = [self.fighters[0].meter, self.fighters[1].meter];
        self.fighters = fresh_fighters(&self.movesets, &self.config, meters);
        for buffer in self.buffers.iter_mut() {
            buffer.clear();
        }
        self.held = [InputToken::Neutral; 2];
        debug!(round = self.round.number, "next round");
    }
}

fn fresh_fighters(movesets: &[MoveSet; 2], config: &CombatConfig, meters: [u32; 2]) -> [Fighter; 2] {
    let mut one = Fighter::new(movesets[0].name.clone(), config);
    let mut two = Fighter::new(movesets[1].name.clone(), config).with_facing(Facing::Left);
    one.meter = meters[0].min(config.meter_max);
    two.meter = meters[1].min(config.meter_max);
    [one, two]
}
