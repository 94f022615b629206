// Player action selection
//
// The visible action is picked every tick from an ordered rule list: the
// first rule whose predicate holds wins. Each action also carries its own
// animation timing (frame count, delay, one-shot or looping).

use std::time::Duration;

/// What the player is visibly doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerAction {
    #[default]
    Idle,
    Walking,
    Jumping,
    Falling,
    Gliding,
    Fireball,
    Scratching,
}

impl PlayerAction {
    /// Every action, in sprite-sheet row order
    pub const ALL: [PlayerAction; 7] = [
        Self::Idle,
        Self::Walking,
        Self::Jumping,
        Self::Falling,
        Self::Gliding,
        Self::Fireball,
        Self::Scratching,
    ];

    /// Row of this action in the player sprite sheet
    pub fn sheet_row(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Walking => 1,
            Self::Jumping => 2,
            Self::Falling => 3,
            Self::Gliding => 4,
            Self::Fireball => 5,
            Self::Scratching => 6,
        }
    }

    pub fn frame_count(self) -> usize {
        match self {
            Self::Idle => 2,
            Self::Walking => 8,
            Self::Jumping => 1,
            Self::Falling => 2,
            Self::Gliding => 4,
            Self::Fireball => 2,
            Self::Scratching => 5,
        }
    }

    /// Time each frame stays up; `None` never advances
    pub fn frame_delay(self) -> Option<Duration> {
        let ms = match self {
            Self::Idle => 400,
            Self::Walking => 40,
            Self::Jumping => return None,
            Self::Falling | Self::Gliding | Self::Fireball => 100,
            Self::Scratching => 50,
        };
        Some(Duration::from_millis(ms))
    }

    /// Plays through once and then hands control back
    pub fn is_one_shot(self) -> bool {
        matches!(self, Self::Fireball | Self::Scratching)
    }

    pub fn is_attack(self) -> bool {
        self.is_one_shot()
    }

    /// Sprite width relative to the base width
    pub fn width_scale(self) -> f32 {
        match self {
            Self::Scratching => 2.0,
            _ => 1.0,
        }
    }

    pub fn animation_name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Jumping => "jump",
            Self::Falling => "fall",
            Self::Gliding => "glide",
            Self::Fireball => "fireball",
            Self::Scratching => "scratch",
        }
    }
}

/// Progress of a fire attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireStage {
    /// Requested; the launch has not been attempted yet
    Charging,
    /// The launch was attempted (successfully or not)
    Launched,
}

/// The single attack slot
///
/// A scratch takes priority over a fire attack. A fire attack requested or
/// interrupted during a scratch waits behind it and plays once the swing
/// completes. A new request for the attack already in flight is ignored
/// until its animation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttackState {
    #[default]
    Ready,
    Scratching {
        /// Fire attack to resume after the swing
        queued: Option<FireStage>,
    },
    Firing(FireStage),
}

impl AttackState {
    /// Action that plays this attack
    pub fn action(self) -> Option<PlayerAction> {
        match self {
            Self::Ready => None,
            Self::Scratching { .. } => Some(PlayerAction::Scratching),
            Self::Firing(_) => Some(PlayerAction::Fireball),
        }
    }

    pub fn is_scratching(self) -> bool {
        matches!(self, Self::Scratching { .. })
    }

    pub fn is_firing(self) -> bool {
        matches!(self, Self::Firing(_))
    }

    /// Slot after a scratch request
    pub fn with_scratch(self) -> Self {
        match self {
            Self::Ready => Self::Scratching { queued: None },
            Self::Firing(stage) => Self::Scratching {
                queued: Some(stage),
            },
            scratching @ Self::Scratching { .. } => scratching,
        }
    }

    /// Slot after a fire request
    pub fn with_fire(self) -> Self {
        match self {
            Self::Ready => Self::Firing(FireStage::Charging),
            Self::Scratching { queued: None } => Self::Scratching {
                queued: Some(FireStage::Charging),
            },
            other => other,
        }
    }

    /// Slot once the current attack has played through (or a swing was
    /// cancelled)
    pub fn completed(self) -> Self {
        match self {
            Self::Scratching {
                queued: Some(stage),
            } => Self::Firing(stage),
            _ => Self::Ready,
        }
    }
}

/// Modifier on airborne descent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AirModifier {
    #[default]
    None,
    /// Reduced gravity while moving down
    Glide,
}

/// Everything action selection looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionInput {
    pub attack: AttackState,
    /// Vertical speed after this tick's motion
    pub dy: f32,
    pub air: AirModifier,
    /// Left or right is held
    pub moving: bool,
}

/// One entry of the selection list
#[derive(Clone, Copy)]
pub struct TransitionRule {
    pub name: &'static str,
    pub applies: fn(&SelectionInput) -> bool,
    pub action: PlayerAction,
}

fn scratching(input: &SelectionInput) -> bool {
    input.attack.is_scratching()
}

fn firing(input: &SelectionInput) -> bool {
    input.attack.is_firing()
}

fn gliding_down(input: &SelectionInput) -> bool {
    input.dy > 0.0 && input.air == AirModifier::Glide
}

fn descending(input: &SelectionInput) -> bool {
    input.dy > 0.0
}

fn ascending(input: &SelectionInput) -> bool {
    input.dy < 0.0
}

fn moving(input: &SelectionInput) -> bool {
    input.moving
}

fn always(_: &SelectionInput) -> bool {
    true
}

/// Selection rules, highest priority first. The last rule always applies.
pub const TRANSITION_RULES: [TransitionRule; 7] = [
    TransitionRule {
        name: "scratch",
        applies: scratching,
        action: PlayerAction::Scratching,
    },
    TransitionRule {
        name: "fire",
        applies: firing,
        action: PlayerAction::Fireball,
    },
    TransitionRule {
        name: "glide",
        applies: gliding_down,
        action: PlayerAction::Gliding,
    },
    TransitionRule {
        name: "fall",
        applies: descending,
        action: PlayerAction::Falling,
    },
    TransitionRule {
        name: "jump",
        applies: ascending,
        action: PlayerAction::Jumping,
    },
    TransitionRule {
        name: "walk",
        applies: moving,
        action: PlayerAction::Walking,
    },
    TransitionRule {
        name: "idle",
        applies: always,
        action: PlayerAction::Idle,
    },
];

/// Pick the action for this tick
pub fn select_action(input: &SelectionInput) -> PlayerAction {
    TRANSITION_RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map_or(PlayerAction::Idle, |rule| rule.action)
}

/// Tracks the current action and reports when it changes
#[derive(Debug, Clone, Default)]
pub struct ActionStateMachine {
    current: PlayerAction,
    previous: PlayerAction,
}

impl ActionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PlayerAction {
        self.current
    }

    pub fn previous_state(&self) -> PlayerAction {
        self.previous
    }

    /// Move to `next`; returns true if the action actually changed
    ///
    /// Re-selecting the current action is a no-op so a running animation is
    /// not restarted.
    pub fn transition(&mut self, next: PlayerAction) -> bool {
        if self.current == next {
            return false;
        }
        self.previous = self.current;
        self.current = next;
        true
    }

    /// Set the action unconditionally
    pub fn force(&mut self, next: PlayerAction) {
        self.previous = self.current;
        self.current = next;
    }
}
