//! Game State Machine
//!
//! Two phases: the round is running, or the bird has crashed and the game
//! waits for a restart.

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Crash,
    Restart,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: Phase,
    pub to: Phase,
    pub action: GameAction,
}

/// Game Finite State Machine
#[derive(Debug, Clone)]
pub struct GameFsm {
    phase: Phase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            phase: Phase::Active,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_transition(&self, action: GameAction) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition; invalid ones leave the phase untouched
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: GameAction) -> Option<Phase> {
        match (self.phase, action) {
            (Phase::Active, GameAction::Crash) => Some(Phase::GameOver),
            (Phase::GameOver, GameAction::Restart) => Some(Phase::Active),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.phase(), Phase::Active);
        assert!(fsm.is_active());
    }

    #[test]
    fn test_crash_then_restart() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Crash);
        assert!(result.success);
        assert_eq!(result.from, Phase::Active);
        assert_eq!(result.to, Phase::GameOver);
        assert!(fsm.is_game_over());

        let result = fsm.transition(GameAction::Restart);
        assert!(result.success);
        assert!(fsm.is_active());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut fsm = GameFsm::new();
        assert!(!fsm.can_transition(GameAction::Restart));
        let result = fsm.transition(GameAction::Restart);
        assert!(!result.success);
        assert_eq!(fsm.phase(), Phase::Active);

        fsm.transition(GameAction::Crash);
        let result = fsm.transition(GameAction::Crash);
        assert!(!result.success);
        assert_eq!(result.to, Phase::GameOver);
    }
}
