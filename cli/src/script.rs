//! Buffer scripts: a list of circular buffer operations replayed in order.
//!
//! A script file looks like:
//!
//! ```yaml
//! capacity: 3
//! steps:
//!   - op: write
//!     value: a
//!   - op: overwrite
//!     value: b
//!   - op: read
//!   - op: clear
//! ```
//!
//! On the command line the same steps are written as `write:a overwrite:b read clear`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use kata_buffer::{BufferError, CircularBuffer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for loading and running scripts.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read file: {0}")]
    ReadFile(#[from] io::Error),
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse JSON: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse file (tried YAML and JSON)")]
    ParseFailed,
    #[error("unknown operation '{0}' (expected read, write:V, overwrite:V or clear)")]
    UnknownOp(String),
    #[error("step {index}: '{op}' requires a value")]
    MissingValue { index: usize, op: Op },
    #[error("step {index}: '{op}' does not take a value")]
    UnexpectedValue { index: usize, op: Op },
    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// A buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Read,
    Write,
    Overwrite,
    Clear,
}

impl Op {
    fn needs_value(self) -> bool {
        matches!(self, Op::Write | Op::Overwrite)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Read => "read",
            Op::Write => "write",
            Op::Overwrite => "overwrite",
            Op::Clear => "clear",
        };
        f.write_str(name)
    }
}

impl FromStr for Op {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "read" => Ok(Op::Read),
            "write" => Ok(Op::Write),
            "overwrite" => Ok(Op::Overwrite),
            "clear" => Ok(Op::Clear),
            other => Err(ScriptError::UnknownOp(other.to_string())),
        }
    }
}

/// A single script step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub op: Op,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FromStr for Step {
    type Err = ScriptError;

    /// Parses `op` or `op:value`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, value) = match s.split_once(':') {
            Some((op, value)) => (op, Some(value.to_string())),
            None => (s, None),
        };
        Ok(Step {
            op: op.trim().to_lowercase().parse()?,
            value,
        })
    }
}

/// A capacity and the steps to replay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Outcome of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub op: Op,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Value returned by a successful read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
    /// Buffer error, if the step failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a whole script run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub capacity: usize,
    pub steps: Vec<StepReport>,
    /// Buffer contents after the last step, oldest first.
    pub contents: Vec<String>,
}

impl Script {
    /// Builds a script from command-line tokens such as `write:1`.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ScriptError> {
        let steps = tokens
            .iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<Step>, _>>()?;
        Ok(Script {
            capacity: None,
            steps,
        })
    }

    /// Checks that write and overwrite carry a value and read and clear do not.
    pub fn validate(&self) -> Result<(), ScriptError> {
        for (index, step) in self.steps.iter().enumerate() {
            match (step.op.needs_value(), step.value.is_some()) {
                (true, false) => return Err(ScriptError::MissingValue { index, op: step.op }),
                (false, true) => return Err(ScriptError::UnexpectedValue { index, op: step.op }),
                _ => {}
            }
        }
        Ok(())
    }

    /// Runs the script against a new buffer of `capacity` slots.
    ///
    /// Buffer errors from individual steps are recorded in the report and do
    /// not stop the run.
    pub fn run(&self, capacity: usize) -> Result<Report, ScriptError> {
        self.validate()?;
        let mut buf = CircularBuffer::new(capacity)?;

        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| apply(&mut buf, index, step))
            .collect();

        Ok(Report {
            capacity,
            steps,
            contents: buf.to_vec(),
        })
    }
}

fn apply(buf: &mut CircularBuffer<String>, index: usize, step: &Step) -> StepReport {
    let mut report = StepReport {
        op: step.op,
        value: step.value.clone(),
        read: None,
        error: None,
    };

    let result = match (step.op, step.value.clone()) {
        (Op::Read, _) => buf.read().map(|v| report.read = Some(v)),
        (Op::Write, Some(v)) => buf.write(v),
        (Op::Overwrite, Some(v)) => {
            buf.overwrite(v);
            Ok(())
        }
        (Op::Clear, _) => {
            buf.clear();
            Ok(())
        }
        // Rejected by validate().
        (Op::Write | Op::Overwrite, None) => Ok(()),
    };

    if let Err(e) = result {
        report.error = Some(e.to_string());
    }

    tracing::debug!(
        index,
        op = %step.op,
        len = buf.len(),
        error = report.error.as_deref(),
        "applied step"
    );

    report
}

/// Loads a script from a YAML or JSON file.
pub fn load_script(path: impl AsRef<Path>) -> Result<Script, ScriptError> {
    let data = fs::read(path.as_ref())?;
    parse_script(&data, path.as_ref())
}

/// Parses script data based on file extension or content.
pub fn parse_script(data: &[u8], path: impl AsRef<Path>) -> Result<Script, ScriptError> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_slice(data)?),
        Some("json") => Ok(serde_json::from_slice(data)?),
        _ => {
            if let Ok(v) = serde_yaml::from_slice(data) {
                return Ok(v);
            }
            if let Ok(v) = serde_json::from_slice(data) {
                return Ok(v);
            }
            Err(ScriptError::ParseFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tokens(s: &str) -> Script {
        let parts: Vec<&str> = s.split_whitespace().collect();
        Script::from_tokens(&parts).unwrap()
    }

    #[test]
    fn test_parse_step_tokens() {
        assert_eq!(
            "write:1".parse::<Step>().unwrap(),
            Step { op: Op::Write, value: Some("1".to_string()) }
        );
        assert_eq!(
            "READ".parse::<Step>().unwrap(),
            Step { op: Op::Read, value: None }
        );
        assert_eq!(
            "overwrite:a:b".parse::<Step>().unwrap().value.as_deref(),
            Some("a:b")
        );
        assert!(matches!(
            "push:1".parse::<Step>(),
            Err(ScriptError::UnknownOp(op)) if op == "push"
        ));
    }

    #[test]
    fn test_run_capacity_three_example() {
        let script = tokens("write:1 write:2 write:3 write:4 overwrite:4 read read read read");
        let report = script.run(3).unwrap();

        assert_eq!(report.steps[3].error.as_deref(), Some("buffer is full"));
        assert_eq!(report.steps[4].error, None);
        let reads: Vec<_> = report.steps[5..].iter().map(|s| s.read.as_deref()).collect();
        assert_eq!(reads, vec![Some("2"), Some("3"), Some("4"), None]);
        assert_eq!(report.steps[8].error.as_deref(), Some("buffer is empty"));
        assert!(report.contents.is_empty());
    }

    #[test]
    fn test_run_reports_final_contents() {
        let report = tokens("write:a write:b clear write:c overwrite:d").run(2).unwrap();
        assert_eq!(report.capacity, 2);
        assert_eq!(report.contents, vec!["c".to_string(), "d".to_string()]);
        assert!(report.steps.iter().all(|s| s.error.is_none()));
    }

    #[test]
    fn test_run_rejects_zero_capacity() {
        let result = tokens("read").run(0);
        assert!(matches!(result, Err(ScriptError::Buffer(BufferError::InvalidCapacity))));
    }

    #[test]
    fn test_missing_value() {
        let result = tokens("write:1 overwrite").run(2);
        assert!(matches!(
            result,
            Err(ScriptError::MissingValue { index: 1, op: Op::Overwrite })
        ));
    }

    #[test]
    fn test_unexpected_value() {
        let result = tokens("write:1 read:9").run(2);
        assert!(matches!(
            result,
            Err(ScriptError::UnexpectedValue { index: 1, op: Op::Read })
        ));

        let script = Script {
            capacity: None,
            steps: vec![Step { op: Op::Clear, value: Some("x".to_string()) }],
        };
        let err = script.validate().unwrap_err();
        assert_eq!(err.to_string(), "step 0: 'clear' does not take a value");
    }

    #[test]
    fn test_load_yaml() {
        let mut file = NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "capacity: 2\nsteps:\n  - op: write\n    value: x\n  - op: read\n"
        )
        .unwrap();

        let script = load_script(file.path()).unwrap();
        assert_eq!(script.capacity, Some(2));
        assert_eq!(script.steps.len(), 2);
        assert_eq!(script.steps[0].value.as_deref(), Some("x"));

        let report = script.run(2).unwrap();
        assert_eq!(report.steps[1].read.as_deref(), Some("x"));
    }

    #[test]
    fn test_load_json() {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        writeln!(
            file,
            r#"{{"steps": [{{"op": "overwrite", "value": "y"}}, {{"op": "clear"}}]}}"#
        )
        .unwrap();

        let script = load_script(file.path()).unwrap();
        assert_eq!(script.capacity, None);
        assert_eq!(script.steps[0].op, Op::Overwrite);
        assert_eq!(script.steps[1].op, Op::Clear);
    }

    #[test]
    fn test_parse_unknown_extension() {
        let data = b"steps:\n  - op: read\n";
        let script = parse_script(data, "script.txt").unwrap();
        assert_eq!(script.steps, vec![Step { op: Op::Read, value: None }]);
    }

    #[test]
    fn test_parse_invalid() {
        let data = b"steps: [ {{{{";
        let result = parse_script(data, "script.txt");
        assert!(matches!(result, Err(ScriptError::ParseFailed)));
    }

    #[test]
    fn test_report_serializes_without_empty_fields() {
        let report = tokens("write:a read read").run(1).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["steps"][0], serde_json::json!({"op": "write", "value": "a"}));
        assert_eq!(json["steps"][1], serde_json::json!({"op": "read", "read": "a"}));
        assert_eq!(json["steps"][2], serde_json::json!({"op": "read", "error": "buffer is empty"}));
    }
}
