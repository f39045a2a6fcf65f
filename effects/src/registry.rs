//! Feature registry: named initializers run independently at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page behaviour is a feature unit with no state shared with the
//! others. Running them through one registry keeps failure isolated: an
//! initializer that errors is recorded in the [`RegistrationReport`] and the
//! remaining units still start.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("required element missing: {0}")]
    MissingElement(String),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// How a unit ended up after initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Listeners are bound.
    Active,
    /// The page has nothing for this unit (e.g. no contact form).
    Skipped(&'static str),
}

pub type FeatureResult = Result<Activation, FeatureError>;

type Initializer<C> = Box<dyn FnOnce(&C) -> FeatureResult>;

pub struct FeatureRegistry<C> {
    entries: Vec<(&'static str, Initializer<C>)>,
}

impl<C> Default for FeatureRegistry<C> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<C> FeatureRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn register(mut self, name: &'static str, init: impl FnOnce(&C) -> FeatureResult + 'static) -> Self {
        self.entries.push((name, Box::new(init)));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every initializer in registration order.
    pub fn run(self, ctx: &C) -> RegistrationReport {
        let outcomes = self
            .entries
            .into_iter()
            .map(|(name, init)| FeatureOutcome { name, result: init(ctx) })
            .collect();
        RegistrationReport { outcomes }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureOutcome {
    pub name: &'static str,
    pub result: FeatureResult,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationReport {
    pub outcomes: Vec<FeatureOutcome>,
}

impl RegistrationReport {
    pub fn active(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, Ok(Activation::Active)))
            .map(|o| o.name)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &FeatureError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.name, e)))
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }

    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&FeatureResult> {
        self.outcomes.iter().find(|o| o.name == name).map(|o| &o.result)
    }

    /// Write one log line per unit.
    pub fn log(&self) {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(Activation::Active) => log::debug!("feature {}: active", outcome.name),
                Ok(Activation::Skipped(reason)) => log::debug!("feature {}: skipped ({reason})", outcome.name),
                Err(e) => log::warn!("feature {}: failed: {e}", outcome.name),
            }
        }
        let active = self.active().count();
        log::info!("portfolio initialized: {active}/{} features active", self.outcomes.len());
    }
}
