// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for scripting kubectl responses.

use crate::error::Result;
use crate::kubernetes::{CommandOutput, CommandRunner, KubectlCommand};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

type Script = Vec<(Vec<String>, VecDeque<CommandOutput>)>;

/// A mock kubectl that answers from predefined responses keyed by argv prefix.
///
/// Registering the same prefix repeatedly queues responses in order; the last
/// one keeps being returned once the queue is drained. Unmatched commands fail
/// with exit code 1 and a NotFound message.
#[derive(Clone, Default)]
pub struct MockRunner {
    responses: Arc<Mutex<Script>>,
    calls: Arc<Mutex<Vec<KubectlCommand>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for commands whose argv starts with `prefix`
    pub fn on(self, prefix: &[&str], code: i32, stdout: &str, stderr: &str) -> Self {
        let output = CommandOutput::new(code, stdout, stderr);
        {
            let mut responses = self.responses.lock().unwrap();
            let key: Vec<String> = prefix.iter().map(|s| s.to_string()).collect();
            match responses.iter_mut().find(|(p, _)| *p == key) {
                Some((_, queue)) => queue.push_back(output),
                None => responses.push((key, VecDeque::from([output]))),
            }
        }
        self
    }

    /// Script a healthy cluster where the namespace already exists
    pub fn happy_cluster(namespace: &str, sa: &str, token: &str, ca: &str) -> Self {
        let secret = format!("{}-token", sa);
        let role = format!("{}-role", sa);
        let binding = format!("{}-role-binding", sa);

        Self::new()
            .on(&["get", "namespace", namespace], 0, &format!("{}   Active   1d", namespace), "")
            .on(&["create", "sa", sa], 0, &format!("serviceaccount/{} created", sa), "")
            .on(&["create", "role", &role], 0, &format!("role.rbac.authorization.k8s.io/{} created", role), "")
            .on(
                &["create", "rolebinding", &binding],
                0,
                &format!("rolebinding.rbac.authorization.k8s.io/{} created", binding),
                "",
            )
            .on(&["apply", "-f", "-"], 0, &format!("secret/{} created", secret), "")
            .on(&["get", "secret", &secret], 0, &STANDARD.encode(token), "")
            .on(&["get", "sa", sa], 0, &format!("NAME   SECRETS   AGE\n{}   0   1s", sa), "")
            .on(&["get", "role", &role], 0, &format!("NAME   CREATED AT\n{}   now", role), "")
            .on(&["get", "rolebinding", &binding], 0, &format!("NAME   ROLE   AGE\n{}   Role/{}   1s", binding, role), "")
            .on(&["get", "configmap", "kube-root-ca.crt"], 0, ca, "")
    }

    /// Script a second run: every object exists and kubectl refuses the creates
    /// with its real messages
    pub fn existing_cluster(namespace: &str, sa: &str, token: &str, ca: &str) -> Self {
        let secret = format!("{}-token", sa);
        let role = format!("{}-role", sa);
        let binding = format!("{}-role-binding", sa);

        Self::new()
            .on(&["get", "namespace", namespace], 0, &format!("{}   Active   1d", namespace), "")
            .on(
                &["create", "sa", sa],
                1,
                "",
                &format!("error: failed to create serviceaccount: serviceaccounts \"{}\" already exists", sa),
            )
            .on(
                &["create", "role", &role],
                1,
                "",
                &format!(
                    "error: failed to create role: roles.rbac.authorization.k8s.io \"{}\" already exists",
                    role
                ),
            )
            .on(
                &["create", "rolebinding", &binding],
                1,
                "",
                &format!(
                    "error: failed to create rolebinding: rolebindings.rbac.authorization.k8s.io \"{}\" already exists",
                    binding
                ),
            )
            .on(&["apply", "-f", "-"], 0, &format!("secret/{} unchanged", secret), "")
            .on(&["get", "secret", &secret], 0, &STANDARD.encode(token), "")
            .on(&["get", "sa", sa], 0, &format!("NAME   SECRETS   AGE\n{}   0   2d", sa), "")
            .on(&["get", "role", &role], 0, &format!("NAME   CREATED AT\n{}   yesterday", role), "")
            .on(&["get", "rolebinding", &binding], 0, &format!("NAME   ROLE   AGE\n{}   Role/{}   2d", binding, role), "")
            .on(&["get", "configmap", "kube-root-ca.crt"], 0, ca, "")
    }

    /// All commands run so far, in order
    pub fn calls(&self) -> Vec<KubectlCommand> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_matching(&self, prefix: &[&str]) -> Vec<KubectlCommand> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with(prefix))
            .collect()
    }

    pub fn count(&self, prefix: &[&str]) -> usize {
        self.calls_matching(prefix).len()
    }

    fn find_response(&self, command: &KubectlCommand) -> Option<CommandOutput> {
        let mut responses = self.responses.lock().unwrap();

        // Longest matching prefix wins
        let (_, queue) = responses
            .iter_mut()
            .filter(|(p, _)| {
                let prefix: Vec<&str> = p.iter().map(String::as_str).collect();
                command.starts_with(&prefix)
            })
            .max_by_key(|(p, _)| p.len())?;

        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, command: &KubectlCommand) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(command.clone());

        Ok(self.find_response(command).unwrap_or_else(|| {
            CommandOutput::new(
                1,
                "",
                format!("Error from server (NotFound): {} not found", command.args.join(" ")),
            )
        }))
    }
}
