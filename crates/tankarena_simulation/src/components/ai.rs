//! AI компоненты: utility state machine, config ботов

// NOTE: Bot, BotConfig и UtilityStateMachine определены в crate::ai module
// Экспортируем их здесь для единообразия

pub use crate::ai::{Bot, BotConfig, UtilityStateMachine};
