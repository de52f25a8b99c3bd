// src/app/input_handler.rs
//! キーボードのキーコードを World への入力に変換するところ。
//!
//! ブラウザには依存しない。`KeyboardEvent.code()` の文字列だけを受け取る。

use std::sync::{Arc, Mutex};

use log::debug;

use crate::app::lock;
use crate::config::KeyBindings;
use crate::world::World;

/// キーが何の役割か。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveLeft,
    MoveRight,
    Jump,
}

/// World に渡す命令。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    SetMoveLeft(bool),
    SetMoveRight(bool),
    Jump,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputController {
    bindings: KeyBindings,
}

impl InputController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn action_for(&self, code: &str) -> Option<KeyAction> {
        let bound = |keys: &[String]| keys.iter().any(|k| k == code);
        if bound(&self.bindings.left) {
            Some(KeyAction::MoveLeft)
        } else if bound(&self.bindings.right) {
            Some(KeyAction::MoveRight)
        } else if bound(&self.bindings.jump) {
            Some(KeyAction::Jump)
        } else {
            None
        }
    }

    /// 押した時。ジャンプは押した瞬間だけ効く (キーリピートでも毎回効く)。
    pub fn on_key_down(&self, code: &str) -> Option<InputCommand> {
        self.action_for(code).map(|action| match action {
            KeyAction::MoveLeft => InputCommand::SetMoveLeft(true),
            KeyAction::MoveRight => InputCommand::SetMoveRight(true),
            KeyAction::Jump => InputCommand::Jump,
        })
    }

    /// 離した時。ジャンプキーを離しても何も起きない。
    pub fn on_key_up(&self, code: &str) -> Option<InputCommand> {
        match self.action_for(code)? {
            KeyAction::MoveLeft => Some(InputCommand::SetMoveLeft(false)),
            KeyAction::MoveRight => Some(InputCommand::SetMoveRight(false)),
            KeyAction::Jump => None,
        }
    }
}

pub fn apply(world: &mut World, command: InputCommand) {
    match command {
        InputCommand::SetMoveLeft(pressed) => world.set_move_left(pressed),
        InputCommand::SetMoveRight(pressed) => world.set_move_right(pressed),
        InputCommand::Jump => {
            world.jump();
        }
    }
}

/// キーイベント 1 回分。知らないキーなら false を返して何もしない。
pub(crate) fn handle_key(
    world_arc: &Arc<Mutex<World>>,
    controller: &InputController,
    code: &str,
    pressed: bool,
) -> bool {
    let command = if pressed {
        controller.on_key_down(code)
    } else {
        controller.on_key_up(code)
    };
    match command {
        Some(command) => {
            debug!("App::Input: {} -> {:?}", code, command);
            apply(&mut lock(world_arc), command);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Intents;

    fn controller() -> InputController {
        InputController::new(KeyBindings::default())
    }

    #[test]
    fn default_bindings_map_wasd_and_arrows() {
        let c = controller();
        assert_eq!(c.action_for("KeyA"), Some(KeyAction::MoveLeft));
        assert_eq!(c.action_for("ArrowLeft"), Some(KeyAction::MoveLeft));
        assert_eq!(c.action_for("KeyD"), Some(KeyAction::MoveRight));
        assert_eq!(c.action_for("KeyW"), Some(KeyAction::Jump));
        assert_eq!(c.action_for("Space"), Some(KeyAction::Jump));
        assert_eq!(c.action_for("KeyS"), None);
    }

    #[test]
    fn jump_fires_on_key_down_only() {
        let c = controller();
        assert_eq!(c.on_key_down("KeyW"), Some(InputCommand::Jump));
        assert_eq!(c.on_key_up("KeyW"), None);
    }

    #[test]
    fn press_and_release_update_intents() {
        let world = Arc::new(Mutex::new(World::default()));
        let c = controller();

        assert!(handle_key(&world, &c, "KeyD", true));
        assert!(handle_key(&world, &c, "ArrowLeft", true));
        assert_eq!(lock(&world).intents(), Intents::new(true, true));

        assert!(handle_key(&world, &c, "KeyD", false));
        assert_eq!(lock(&world).intents(), Intents::new(true, false));

        assert!(!handle_key(&world, &c, "Enter", true));
    }

    #[test]
    fn jump_key_changes_vertical_velocity() {
        let world = Arc::new(Mutex::new(World::default()));
        handle_key(&world, &controller(), "Space", true);
        assert_eq!(lock(&world).player().velocity.y, -30.0);
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let c = InputController::new(KeyBindings {
            left: vec!["KeyJ".to_string()],
            right: vec!["KeyL".to_string()],
            jump: vec!["KeyI".to_string()],
        });
        assert_eq!(c.on_key_down("KeyL"), Some(InputCommand::SetMoveRight(true)));
        assert_eq!(c.on_key_down("KeyD"), None);
    }
}
