//! Hand-written fakes for the `Driver` and `CommandRunner` ports.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::process::ExitStatus;

use anyhow::Result;
use molecule_cli::application::ports::{CommandRunner, Driver};
use molecule_cli::domain::{
    ConnectionOptions, DriverContext, DriverError, LoginOptions, PlatformDefinition,
};
use molecule_common::{StatusFlag, StatusRecord};

use crate::helpers::exit_status;

/// How `FakeDriver::status` answers.
#[derive(Clone, Copy)]
pub enum StatusBehaviour {
    /// One record per instance.
    Echo,
    /// One record fewer than asked for.
    DropLast,
    /// Fail with a malformed-state error.
    Fail,
}

/// Driver that answers status from its input and records each call.
pub struct FakeDriver {
    ctx: DriverContext,
    behaviour: StatusBehaviour,
    created: StatusFlag,
    template: String,
    pub status_calls: Cell<usize>,
    pub last_instances: RefCell<Vec<String>>,
}

impl FakeDriver {
    pub fn new(ctx: DriverContext, behaviour: StatusBehaviour) -> Self {
        Self {
            ctx,
            behaviour,
            created: StatusFlag::False,
            template: "fake-shell {instance}".to_string(),
            status_calls: Cell::new(0),
            last_instances: RefCell::new(Vec::new()),
        }
    }

    pub fn with_created(mut self, created: StatusFlag) -> Self {
        self.created = created;
        self
    }

    pub fn with_template(mut self, template: &str) -> Self {
        self.template = template.to_string();
        self
    }
}

impl Driver for FakeDriver {
    fn context(&self) -> &DriverContext {
        &self.ctx
    }

    fn name(&self) -> &str {
        "fake"
    }

    fn login_cmd_template(&self) -> Result<String> {
        Ok(self.template.clone())
    }

    fn login_options(&self, instance_name: &str) -> Result<LoginOptions> {
        Ok(LoginOptions::from([(
            "instance".to_string(),
            instance_name.to_string(),
        )]))
    }

    fn ansible_connection_options(&self, _instance_name: &str) -> Result<ConnectionOptions> {
        Ok(ConnectionOptions::new())
    }

    fn default_safe_files(&self) -> Vec<String> {
        vec!["fake.lock".to_string()]
    }

    fn default_ssh_connection_options(&self) -> Vec<String> {
        Vec::new()
    }

    async fn status(&self, instances: &[PlatformDefinition]) -> Result<Vec<StatusRecord>> {
        self.status_calls.set(self.status_calls.get() + 1);
        *self.last_instances.borrow_mut() = instances.iter().map(|i| i.name.clone()).collect();
        let mut records: Vec<StatusRecord> = instances
            .iter()
            .map(|i| StatusRecord {
                instance_name: i.name.clone(),
                driver_name: "Fake".to_string(),
                provisioner_name: "Ansible".to_string(),
                scenario_name: self.ctx.scenario.name().to_string(),
                created: self.created,
                converged: StatusFlag::False,
            })
            .collect();
        match self.behaviour {
            StatusBehaviour::Echo => Ok(records),
            StatusBehaviour::DropLast => {
                records.pop();
                Ok(records)
            }
            StatusBehaviour::Fail => Err(DriverError::MalformedState {
                path: self.ctx.scenario.state_file(),
                reason: "boom".to_string(),
            }
            .into()),
        }
    }
}

/// Command runner that records every invocation and returns a fixed code.
pub struct RecordingRunner {
    code: i32,
    pub calls: RefCell<Vec<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl CommandRunner for RecordingRunner {
    async fn run_status(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut argv = vec![program.to_string()];
        argv.extend(args.iter().map(ToString::to_string));
        self.calls.borrow_mut().push(argv);
        Ok(exit_status(self.code))
    }
}
