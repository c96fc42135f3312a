//! One WebSocket client's state and its text protocol.
//!
//! A session owns its loaded view and its own copy of the command registry,
//! so `COMMAND_LOAD`/`COMMAND_UNLOAD` only change what that client can call.

use crate::registry::CommandRegistry;
use dimplace_core::command::{CommandName, CommandResponse};
use dimplace_core::curve::{CurveRecord, CurveTable};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

/// Format an error as a JSON message for the client
pub fn format_error(code: &str, message: &str, severity: &str) -> String {
    format!("ERROR_UPDATE:{}", json!({
        "code": code,
        "message": message,
        "severity": severity
    }))
}

#[derive(Debug, Deserialize)]
struct CommandEnvelope {
    command: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Deserialize)]
struct ViewLoad {
    curves: Vec<CurveRecord>,
}

/// Log a finished command under `context` (a session id or the HTTP route).
pub fn log_response(context: &str, command: &str, response: &CommandResponse) {
    match (&response.plan, response.is_ok()) {
        (Some(plan), _) => info!("{}: {} produced a {} plan", context, command, plan.name()),
        (None, true) => info!("{}: {} succeeded", context, command),
        (None, false) => warn!("{}: {} failed: {:?}", context, command, response.message),
    }
}

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    curves: CurveTable,
    registry: CommandRegistry,
}

impl Session {
    pub fn new(registry: CommandRegistry) -> Self {
        Self { id: Uuid::new_v4(), curves: CurveTable::new(), registry }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    fn commands_update(&self) -> String {
        let json = serde_json::to_string(&self.registry.names()).unwrap_or("[]".into());
        format!("COMMANDS_UPDATE:{}", json)
    }

    /// Handle one text frame and return the reply frame.
    pub fn handle_message(&mut self, text: &str) -> String {
        if let Some(json_str) = text.strip_prefix("VIEW_LOAD:") {
            match serde_json::from_str::<ViewLoad>(json_str) {
                Ok(view) => {
                    self.curves = view.curves.into_iter().collect();
                    info!("Session {} loaded {} curves", self.id, self.curves.len());
                    format!("VIEW_UPDATE:{}", json!({ "curves": self.curves.len() }))
                }
                Err(e) => {
                    warn!("Failed to parse VIEW_LOAD: {}", e);
                    format_error("VIEW_LOAD_FAILED", &e.to_string(), "error")
                }
            }
        } else if text == "VIEW_CLEAR" {
            self.curves.clear();
            info!("Session {} cleared its view", self.id);
            format!("VIEW_UPDATE:{}", json!({ "curves": 0 }))
        } else if let Some(json_str) = text.strip_prefix("COMMAND:") {
            // Format: COMMAND:{"command": "linearDimension", "params": {...}}
            match serde_json::from_str::<CommandEnvelope>(json_str) {
                Ok(cmd) => {
                    let response = self.registry.dispatch(&cmd.command, &cmd.params, &self.curves);
                    log_response(&format!("Session {}", self.id), &cmd.command, &response);
                    let json = serde_json::to_string(&response).unwrap_or("{}".into());
                    format!("COMMAND_RESULT:{}", json)
                }
                Err(e) => {
                    warn!("Failed to parse COMMAND: {}", e);
                    format_error("COMMAND_PARSE_FAILED", &e.to_string(), "error")
                }
            }
        } else if text == "COMMANDS_LIST" {
            self.commands_update()
        } else if let Some(rest) = text.strip_prefix("COMMAND_LOAD:") {
            // Format: COMMAND_LOAD:alias=linearDimension
            let (alias, target) = rest.split_once('=').unwrap_or((rest, rest));
            match target.parse::<CommandName>() {
                Ok(command) if self.registry.load(alias, command) => self.commands_update(),
                Ok(_) => format_error("COMMAND_LOAD_FAILED", &format!("'{}' is already loaded", alias), "warning"),
                Err(e) => {
                    warn!("{}", e);
                    format_error("COMMAND_LOAD_FAILED", &e.to_string(), "error")
                }
            }
        } else if let Some(name) = text.strip_prefix("COMMAND_UNLOAD:") {
            if self.registry.unload(name) {
                self.commands_update()
            } else {
                warn!("Command '{}' not found for unload", name);
                format_error("COMMAND_UNLOAD_FAILED", &format!("'{}' is not loaded", name), "warning")
            }
        } else {
            warn!("Unknown message: {}", text);
            format_error("UNKNOWN_MESSAGE", &format!("Unknown message: {}", text), "warning")
        }
    }
}
