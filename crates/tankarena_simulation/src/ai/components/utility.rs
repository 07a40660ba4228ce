//! Utility state machine: scoring + выбор состояния.

use bevy::prelude::*;

use crate::ai::{BehaviorKind, BehaviorState, BotAction, BotContext};

/// Score "состояние временно недоступно"
///
/// Проверяется только против победившего score. Выбор идёт от baseline 0,
/// так что победитель всегда > 0 и эта проверка не срабатывает никогда.
/// Оставлено как часть контракта scoring'а.
pub const UNAVAILABLE_SCORE: f32 = -1.0;

/// Индекс победившего состояния или `None` (оставить текущее)
///
/// Running max со строгим `>` от baseline 0: при равенстве выигрывает
/// первый в порядке roster, победитель обязан набрать > 0.
pub fn select_state(scores: &[f32]) -> Option<usize> {
    let mut winner = None;
    let mut best_score = 0.0;

    for (index, &score) in scores.iter().enumerate() {
        if score > best_score {
            best_score = score;
            winner = Some(index);
        }
    }

    if best_score == UNAVAILABLE_SCORE {
        return None;
    }

    winner
}

/// Utility FSM бота
///
/// Roster одинаковый для всех ботов, но у каждого свои экземпляры состояний
/// (с собственной памятью, например последняя позиция цели у Chase).
/// Начальное состояние — первое в roster, его on_enter не вызывается.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct UtilityStateMachine {
    roster: Vec<BehaviorState>,
    current: usize,
    previous: Option<usize>,
}

impl Default for UtilityStateMachine {
    fn default() -> Self {
        Self {
            roster: vec![
                BehaviorState::Patrol,
                BehaviorState::Chase {
                    last_opponent_position: None,
                },
                BehaviorState::Flee,
            ],
            current: 0,
            previous: None,
        }
    }
}

impl UtilityStateMachine {
    /// FSM с произвольным roster (пустой roster не допускается)
    pub fn with_roster(roster: Vec<BehaviorState>) -> Option<Self> {
        if roster.is_empty() {
            return None;
        }

        Some(Self {
            roster,
            current: 0,
            previous: None,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_kind(&self) -> Option<BehaviorKind> {
        self.roster.get(self.current).map(BehaviorState::kind)
    }

    pub fn previous_kind(&self) -> Option<BehaviorKind> {
        self.previous
            .and_then(|index| self.roster.get(index))
            .map(BehaviorState::kind)
    }

    pub fn roster(&self) -> &[BehaviorState] {
        &self.roster
    }

    /// Scores всех состояний roster (в порядке roster)
    pub fn scores(&self, ctx: &BotContext) -> Vec<f32> {
        self.roster.iter().map(|state| state.score(ctx)).collect()
    }

    /// Один тик FSM: scoring → (возможно) переход → update текущего
    ///
    /// При смене состояния on_enter нового вызывается до его update в том же тике.
    pub fn evaluate(&mut self, ctx: &mut BotContext) -> BotAction {
        let scores = self.scores(ctx);

        if let Some(winner) = select_state(&scores) {
            if winner != self.current {
                self.transition_to(winner, ctx);
            }
        }

        match self.roster.get_mut(self.current) {
            Some(state) => state.update(ctx),
            None => BotAction::default(),
        }
    }

    fn transition_to(&mut self, winner: usize, ctx: &mut BotContext) {
        let Some(previous_kind) = self.current_kind() else {
            return;
        };

        self.previous = Some(self.current);
        self.current = winner;

        if let Some(state) = self.roster.get_mut(winner) {
            state.on_enter(ctx, previous_kind);
        }
    }
}
