// src/app/browser_event_manager.rs
//! Attaches and detaches the window keydown / keyup listeners.

use std::sync::{Arc, Mutex};

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};

use crate::app::input_handler::{self, InputController};
use crate::app::lock;
use crate::world::World;

/// Listener closures kept alive together with the event name they were attached to.
pub(crate) type EventClosures = Arc<Mutex<Vec<(&'static str, Closure<dyn FnMut(Event)>)>>>;

const KEY_EVENTS: [(&str, bool); 2] = [("keydown", true), ("keyup", false)];

/// Attaches keydown and keyup listeners on the window that feed the world's intents.
pub(crate) fn attach_keyboard_listeners(
    world_arc: &Arc<Mutex<World>>,
    controller: &Arc<InputController>,
    closures_arc: &EventClosures,
) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;

    for (event_name, pressed) in KEY_EVENTS {
        let world_arc = Arc::clone(world_arc);
        let controller = Arc::clone(controller);

        let closure = Closure::wrap(Box::new(move |event: Event| {
            match event.dyn_into::<KeyboardEvent>() {
                Ok(key_event) => {
                    let handled =
                        input_handler::handle_key(&world_arc, &controller, &key_event.code(), pressed);
                    // Stop arrow keys and space from scrolling the page.
                    if handled {
                        key_event.prevent_default();
                    }
                }
                Err(_) => error!("Failed to cast event to KeyboardEvent in {} listener", event_name),
            }
        }) as Box<dyn FnMut(Event)>);

        window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        lock(closures_arc).push((event_name, closure));
        info!("Attached {} listener.", event_name);
    }
    Ok(())
}

/// Removes every listener added by `attach_keyboard_listeners` and drops the closures.
pub(crate) fn detach_keyboard_listeners(closures_arc: &EventClosures) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    let closures: Vec<_> = lock(closures_arc).drain(..).collect();
    for (event_name, closure) in closures {
        window
            .remove_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
        info!("Detached {} listener.", event_name);
    }
    Ok(())
}
