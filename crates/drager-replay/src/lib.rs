//! Drager scenario replay.
//!
//! Loads a JSON scenario, mounts its elements on a [`Stage`] and feeds the
//! scripted events through it, writing every drag notification as a JSON line.

pub mod scenario;

pub use scenario::{ElementDef, Scenario, ScriptedEvent};

use drager_core::{ConfigError, DragData, DragEvent, ElementId, Stage};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Replay errors.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid config for element '{name}': {source}")]
    Config {
        name: String,
        #[source]
        source: ConfigError,
    },
    #[error("Unknown element: {0}")]
    UnknownElement(String),
}

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

/// One output line.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub element: String,
    #[serde(flatten)]
    pub event: DragEvent,
}

/// Read and parse a scenario file.
pub fn load_scenario(path: impl AsRef<Path>) -> ReplayResult<Scenario> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Run a scenario, writing notifications to `out` as JSON lines.
pub fn replay<W: Write>(scenario: &Scenario, out: &mut W) -> ReplayResult<Vec<Notification>> {
    let notifications = run(scenario)?;
    for notification in &notifications {
        serde_json::to_writer(&mut *out, notification)?;
        writeln!(out)?;
    }
    Ok(notifications)
}

/// Run a scenario and collect its notifications.
pub fn run(scenario: &Scenario) -> ReplayResult<Vec<Notification>> {
    let mut stage = Stage::new(scenario.root);
    let mut ids: HashMap<&str, ElementId> = HashMap::new();
    let mut names: HashMap<ElementId, &str> = HashMap::new();

    for element in &scenario.elements {
        element.config.validate().map_err(|source| ReplayError::Config {
            name: element.name.clone(),
            source,
        })?;
        let id = match element.parent {
            Some(parent) => stage.mount_in(parent, element.data, element.config.clone()),
            None => stage.mount(element.data, element.config.clone()),
        };
        ids.insert(&element.name, id);
        names.insert(id, &element.name);
    }

    let lookup = |name: &str| ids.get(name).copied().ok_or_else(|| ReplayError::UnknownElement(name.to_string()));

    let mut notifications = Vec::new();
    for (step, event) in scenario.events.iter().enumerate() {
        log::debug!("step {}: {:?}", step, event);
        match event {
            ScriptedEvent::Down { target, .. } => {
                let id = lookup(target)?;
                if let Some(pointer) = event.pointer_event() {
                    stage.pointer_down(id, &pointer);
                }
            }
            ScriptedEvent::Move { .. } => {
                if let Some(pointer) = event.pointer_event() {
                    stage.pointer_move(&pointer);
                }
            }
            ScriptedEvent::Up { .. } => {
                if let Some(pointer) = event.pointer_event() {
                    stage.pointer_up(&pointer);
                }
            }
            ScriptedEvent::Key { .. } => {
                if let Some(key) = event.key_event() {
                    stage.key_down(&key);
                }
            }
            ScriptedEvent::Click => {
                stage.click();
            }
            ScriptedEvent::Unmount { target } => {
                stage.unmount(lookup(target)?);
            }
        }

        for (id, event) in stage.drain_events() {
            let element = names.get(&id).copied().unwrap_or_default().to_string();
            notifications.push(Notification { element, event });
        }
    }

    for element in &scenario.elements {
        if let Some(controller) = ids.get(element.name.as_str()).and_then(|id| stage.controller(*id)) {
            let DragData { left, top, .. } = *controller.data();
            log::info!("{} ended at ({}, {}), selected = {}", element.name, left, top, controller.is_selected());
        }
    }

    Ok(notifications)
}
