//! JSON readers for task and member files
//!
//! Accepts either a bare array or the backend's list envelope
//! (`{"tasks": [...]}` / `{"members": [...]}`).

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::core::models::{Task, TeamMember};
use crate::error::{FlowError, Result};

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskDocument {
    List(Vec<Task>),
    Envelope { tasks: Vec<Task> },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MemberDocument {
    List(Vec<TeamMember>),
    Envelope { members: Vec<TeamMember> },
}

/// Whether an input string should be treated as a glob pattern
#[must_use]
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Resolve input arguments to file paths
///
/// Plain paths are kept as given. Glob patterns expand to their matches in
/// sorted order; a pattern that matches nothing is an error.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if !is_glob(pattern) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let mut matched = glob::glob(pattern)?
            .map(|entry| {
                entry.map_err(|e| FlowError::Io {
                    path: e.path().to_path_buf(),
                    source: e.into_error(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if matched.is_empty() {
            debug!("Input pattern {pattern} matched no files");
            return Err(FlowError::NoInput(pattern.clone()));
        }
        matched.sort();
        paths.extend(matched);
    }

    Ok(paths)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| FlowError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| FlowError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the tasks of one file
pub fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    let tasks = match read_json::<TaskDocument>(path)? {
        TaskDocument::List(tasks) | TaskDocument::Envelope { tasks } => tasks,
    };
    debug!("Read {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Read the members of one file
pub fn read_members(path: &Path) -> Result<Vec<TeamMember>> {
    let members = match read_json::<MemberDocument>(path)? {
        MemberDocument::List(members) | MemberDocument::Envelope { members } => members,
    };
    debug!("Read {} members from {}", members.len(), path.display());
    Ok(members)
}
