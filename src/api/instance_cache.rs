//! Single-slot chart-instance cache keyed by dataset fingerprint.

use tracing::debug;

use crate::core::{Dataset, Fingerprint};
use crate::error::VisualResult;

/// Decides per update whether the previous chart instance can be reused.
///
/// The cache holds at most one instance; the fingerprint of the dataset that
/// produced it is the only reuse key.
#[derive(Debug)]
pub struct InstanceCache<I> {
    fingerprint: Option<Fingerprint>,
    instance: Option<I>,
}

impl<I> Default for InstanceCache<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> InstanceCache<I> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fingerprint: None,
            instance: None,
        }
    }

    /// Returns the cached instance unchanged when `dataset` fingerprints
    /// equal to the cached one; otherwise discards it and rebuilds through
    /// `build`. A `None` dataset invalidates the slot and yields `None`.
    pub fn get_or_build(
        &mut self,
        dataset: Option<&Dataset>,
        build: impl FnOnce(&Dataset) -> VisualResult<I>,
    ) -> VisualResult<Option<&mut I>> {
        let Some(dataset) = dataset else {
            self.invalidate();
            return Ok(None);
        };

        let fingerprint = dataset.fingerprint()?;
        if self.instance.is_some() && self.fingerprint.as_ref() == Some(&fingerprint) {
            debug!("dataset fingerprint unchanged, reusing chart instance");
            return Ok(self.instance.as_mut());
        }

        debug!(
            rows = dataset.row_count(),
            "dataset fingerprint changed, rebuilding chart instance"
        );
        self.instance = None;
        self.fingerprint = None;
        let instance = build(dataset)?;
        self.instance = Some(instance);
        self.fingerprint = Some(fingerprint);
        Ok(self.instance.as_mut())
    }

    /// Drops any cached instance and fingerprint.
    pub fn invalidate(&mut self) {
        if self.instance.is_some() {
            debug!("invalidating cached chart instance");
        }
        self.instance = None;
        self.fingerprint = None;
    }

    #[must_use]
    pub fn instance(&self) -> Option<&I> {
        self.instance.as_ref()
    }

    pub fn instance_mut(&mut self) -> Option<&mut I> {
        self.instance.as_mut()
    }

    #[must_use]
    pub fn has_instance(&self) -> bool {
        self.instance.is_some()
    }
}
