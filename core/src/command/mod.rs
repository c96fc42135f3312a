//! JSON command layer over the dimension resolver.
//!
//! Each command takes a JSON parameter object, runs one resolver call (or the
//! view-geometry dump) against the supplied curves, and answers with
//! `{"return code": 0|1, ...}`. Failures never panic: they come back as
//! return code 1 with a message.

pub mod params;

#[cfg(test)]
mod tests_command;

use crate::curve::{CurveTable, ViewGeometry};
use crate::dimension::{DimensionPlan, DimensionResolver};
use params::{EntityParams, HoleCalloutParams, LinearParams, OffsetParams};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const RETURN_OK: i32 = 0;
pub const RETURN_FAILED: i32 = 1;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid parameters for {command}: {source}")]
    InvalidParams {
        command: CommandName,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid id for `{key}`: {value} (ids are non-negative, 0 means none)")]
    InvalidId { key: &'static str, value: i64 },

    #[error("Hole callout needs either `holes` or `text point`")]
    MissingHoles,

    #[error("Hole callout in view {0} has no holes")]
    EmptyHoleBatch(u64),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Commands understood by [`execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandName {
    #[serde(rename = "linearDimension")]
    LinearDimension,
    #[serde(rename = "linearOffsetDimension")]
    LinearOffsetDimension,
    #[serde(rename = "radialDimension")]
    RadialDimension,
    #[serde(rename = "arcLengthDimension")]
    ArcLengthDimension,
    #[serde(rename = "holeCallout")]
    HoleCallout,
    #[serde(rename = "viewGeometry")]
    ViewGeometry,
}

impl CommandName {
    pub const ALL: [CommandName; 6] = [
        CommandName::LinearDimension,
        CommandName::LinearOffsetDimension,
        CommandName::RadialDimension,
        CommandName::ArcLengthDimension,
        CommandName::HoleCallout,
        CommandName::ViewGeometry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandName::LinearDimension => "linearDimension",
            CommandName::LinearOffsetDimension => "linearOffsetDimension",
            CommandName::RadialDimension => "radialDimension",
            CommandName::ArcLengthDimension => "arcLengthDimension",
            CommandName::HoleCallout => "holeCallout",
            CommandName::ViewGeometry => "viewGeometry",
        }
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandName::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

/// What a successful command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Plan(DimensionPlan),
    Geometry(ViewGeometry),
}

/// Response object written back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandResponse {
    #[serde(rename = "return code")]
    pub return_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<DimensionPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<ViewGeometry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CommandResponse {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            return_code: RETURN_FAILED,
            plan: None,
            geometry: None,
            message: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.return_code == RETURN_OK
    }
}

impl From<CommandResult<CommandOutput>> for CommandResponse {
    fn from(result: CommandResult<CommandOutput>) -> Self {
        match result {
            Ok(CommandOutput::Plan(plan)) => Self {
                return_code: RETURN_OK,
                plan: Some(plan),
                geometry: None,
                message: None,
            },
            Ok(CommandOutput::Geometry(geometry)) => Self {
                return_code: RETURN_OK,
                plan: None,
                geometry: Some(geometry),
                message: None,
            },
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

fn parse<T: DeserializeOwned>(command: CommandName, params: &Value) -> CommandResult<T> {
    T::deserialize(params).map_err(|source| CommandError::InvalidParams { command, source })
}

/// Run `command` against `curves`.
pub fn run(command: CommandName, params: &Value, curves: &CurveTable) -> CommandResult<CommandOutput> {
    let resolver = DimensionResolver::new(curves);
    let plan = match command {
        CommandName::LinearDimension => {
            resolver.linear(&parse::<LinearParams>(command, params)?.into_request()?)
        }
        CommandName::LinearOffsetDimension => {
            resolver.offset(&parse::<OffsetParams>(command, params)?.into_request()?)
        }
        CommandName::RadialDimension => {
            resolver.radial(&parse::<EntityParams>(command, params)?.into_request()?)
        }
        CommandName::ArcLengthDimension => {
            resolver.arc_length(&parse::<EntityParams>(command, params)?.into_request()?)
        }
        CommandName::HoleCallout => {
            resolver.hole_callout(&parse::<HoleCalloutParams>(command, params)?.into_request()?)
        }
        CommandName::ViewGeometry => {
            return Ok(CommandOutput::Geometry(ViewGeometry::collect(&curves.records())));
        }
    };
    Ok(CommandOutput::Plan(plan))
}

/// Look up `name` and run it, folding every failure into return code 1.
pub fn execute(name: &str, params: &Value, curves: &CurveTable) -> CommandResponse {
    name.parse::<CommandName>()
        .and_then(|command| run(command, params, curves))
        .into()
}

/// Same as [`execute`], for a raw JSON parameter string.
pub fn execute_str(name: &str, params: &str, curves: &CurveTable) -> CommandResponse {
    match serde_json::from_str::<Value>(params) {
        Ok(value) => execute(name, &value, curves),
        Err(e) => CommandResponse::failed(format!("JSON parse error: {}", e)),
    }
}
