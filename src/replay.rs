//! Deterministic replay of scripted input
//!
//! A script is a JSON list of raw events and/or already-decoded intents. Each
//! step goes through the same event translation the presentation layer uses,
//! and every resulting intent is dispatched in order.

use crate::action::Intent;
use crate::app::{Event, EventTranslator, Snapshot, ViewStateStore, Viewport};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One scripted step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// A raw input event, translated before dispatch
    Event(Event),
    /// An intent dispatched as is
    Intent(Intent),
}

/// A replayable script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    /// Steps in arrival order
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parse a script from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid script
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse replay script")
    }

    /// Read and parse a script file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Invalid script {}", path.display()))
    }
}

/// Outcome of one dispatched intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Index of the script step that produced the intent
    pub step: usize,
    /// Intent name
    pub intent: &'static str,
    /// Rejection message, if the intent was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Snapshot after the intent
    pub snapshot: Snapshot,
}

/// Everything that happened during a replay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// One entry per dispatched intent
    pub entries: Vec<Entry>,
    /// How many times subscribers were notified
    pub notifications: usize,
}

impl Transcript {
    /// Entries whose intent was rejected
    pub fn rejected(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|entry| entry.error.is_some())
    }

    /// Snapshot after the last intent, if anything was dispatched
    #[must_use]
    pub fn final_snapshot(&self) -> Option<&Snapshot> {
        self.entries.last().map(|entry| &entry.snapshot)
    }
}

/// Run `script` against `store`
///
/// Rejected intents are recorded in the transcript and replay continues.
pub fn run<V: Viewport>(
    script: &Script,
    store: &mut ViewStateStore<V>,
    translator: &mut EventTranslator,
) -> Transcript {
    let counter = std::rc::Rc::new(std::cell::Cell::new(0usize));
    let subscription = {
        let counter = std::rc::Rc::clone(&counter);
        store.subscribe(move |_| counter.set(counter.get() + 1))
    };

    let mut entries = Vec::new();
    for (step, item) in script.steps.iter().enumerate() {
        let intents = match item {
            Step::Event(event) => translator.translate(event),
            Step::Intent(intent) => vec![intent.clone()],
        };
        for intent in intents {
            let name = intent.name();
            let error = store.dispatch(intent).err().map(|e| e.to_string());
            entries.push(Entry {
                step,
                intent: name,
                error,
                snapshot: store.current_snapshot().clone(),
            });
        }
    }

    store.unsubscribe(subscription);
    tracing::info!(
        steps = script.steps.len(),
        intents = entries.len(),
        "Replay finished"
    );

    Transcript {
        entries,
        notifications: counter.get(),
    }
}
