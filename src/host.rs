use anyhow::Context;
use serde::Deserialize;

use crate::{
    Result,
    pass::{self, PassReport, Traversal},
    tree::ViewNode,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub traversal: Traversal,
    pub log_passes: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::PreOrder,
            log_passes: true,
        }
    }
}

impl HostConfig {
    pub fn from_yaml(src: &str) -> Result<Self> {
        serde_yaml::from_str(src).context("invalid host config")
    }
}

/// Owns a view tree and drives passes over it.
///
/// Whoever lays the tree out mutates it through [`Host::root_mut`] between
/// passes; [`Host::run_pass`] then propagates preferences once.
pub struct Host {
    root: ViewNode,
    config: HostConfig,
    passes: u64,
}

impl Host {
    pub fn new(root: ViewNode) -> Self {
        log::info!("host created for {:?}", root.id());
        Self {
            root,
            config: HostConfig::default(),
            passes: 0,
        }
    }

    pub fn with_config(mut self, config: HostConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.config.traversal = traversal;
        self
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    pub fn root(&self) -> &ViewNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ViewNode {
        &mut self.root
    }

    /// Number of passes run so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn run_pass(&mut self) -> PassReport {
        self.passes += 1;
        let report = pass::run(&mut self.root, self.config.traversal);

        if self.config.log_passes {
            log::debug!(
                "pass {}: {} contributions, {} subscription points, {} notified",
                self.passes,
                report.contributions,
                report.subscription_points,
                report.notifications
            );
        }
        report
    }
}
