// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Typed model of the ecosystem configuration file.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, ErrorKind};

/// The ecosystem declaration, the document an operator hands to the supervisor.
///
/// Rules:
///   - must declare at least one app
///   - app names must be unique
///   - never mutated after load, a reload is a fresh parse
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Ecosystem {
    pub apps: Vec<App>,
}

/// A single app record: which interpreter to run, with which script,
/// arguments, and environment.
///
/// Only `name`, `script`, and `interpreter` are required. The `args` string is
/// kept verbatim here and split on whitespace when the invocation is resolved,
/// the same treatment the launcher gives it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct App {
    pub name: String,
    pub script: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
    pub interpreter: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Ecosystem {
    /// Read and validate an ecosystem config file.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Parse and validate an ecosystem declaration.
    pub fn from_yaml(yaml: &str) -> Result<Self, Error> {
        let ecosystem: Ecosystem = serde_yaml::from_str(yaml)?;
        ecosystem.validate()?;
        Ok(ecosystem)
    }

    /// Serialize back to yaml.
    ///
    /// Re-parsing the output yields a document equal to self, see the tests.
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(Error::from)
    }

    /// Look up an app by name.
    pub fn app(&self, name: &str) -> Result<&App, Error> {
        self.apps
            .iter()
            .find(|app| app.name == name)
            .ok_or_else(|| Error::from(ErrorKind::UnknownApp(name.to_string())))
    }

    fn validate(&self) -> Result<(), Error> {
        if self.apps.is_empty() {
            return Err(ErrorKind::NoApps.into());
        }

        let mut seen = BTreeSet::new();
        for (index, app) in self.apps.iter().enumerate() {
            app.validate(index)?;
            if !seen.insert(app.name.as_str()) {
                return Err(ErrorKind::DuplicateApp(app.name.clone()).into());
            }
        }

        Ok(())
    }
}

impl App {
    fn validate(&self, index: usize) -> Result<(), Error> {
        // a nameless record is identified by its list position
        let label = if self.name.trim().is_empty() {
            format!("#{}", index)
        } else {
            self.name.clone()
        };

        required(&label, "name", &self.name)?;
        required(&label, "script", &self.script)?;
        required(&label, "interpreter", &self.interpreter)?;

        for key in self.env.keys() {
            required(&label, "env key", key)?;
        }

        Ok(())
    }
}

fn required(app: &str, field: &'static str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(ErrorKind::EmptyField {
            app: app.to_string(),
            field,
        }
        .into());
    }

    Ok(())
}
