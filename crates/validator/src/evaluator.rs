//! Runs a field's constraints.

use std::sync::Arc;

use crate::config::Settings;
use crate::error::Incomplete;
use crate::field::Field;
use crate::foundation::ValidationErrors;
use crate::registry::ConstraintRegistry;

/// Evaluates fields against a registry under a set of [`Settings`].
///
/// Cloning is cheap; the registry is shared.
///
/// # Examples
///
/// ```rust
/// use okay_validator::config::Settings;
/// use okay_validator::evaluator::Evaluator;
/// use okay_validator::field::{ConstraintChain, Field};
/// use okay_validator::validators::LengthMode;
///
/// let field = Field::new("héllo", "word").max_length(5);
///
/// assert_eq!(
///     field.errors().unwrap().messages(),
///     vec!["maximum length for word is 5"]
/// );
///
/// let chars = Evaluator::default()
///     .with_settings(Settings::default().with_length_mode(LengthMode::Chars));
/// assert!(field.errors_with(&chars).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    registry: Arc<ConstraintRegistry>,
    settings: Settings,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(ConstraintRegistry::builtin(), Settings::default())
    }
}

impl Evaluator {
    /// Creates an evaluator.
    pub fn new(registry: Arc<ConstraintRegistry>, settings: Settings) -> Self {
        Self { registry, settings }
    }

    /// Replaces the settings.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Registry used for [`Constraint::Named`](crate::constraint::Constraint::Named).
    #[must_use]
    pub fn registry(&self) -> &ConstraintRegistry {
        &self.registry
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Runs every constraint of `field` in declaration order.
    ///
    /// Failures are collected and never stop the pass. A misconfigured
    /// constraint stops it at once; the messages gathered before it are
    /// returned in the [`Incomplete`].
    pub fn evaluate(&self, field: &Field) -> Result<ValidationErrors, Incomplete> {
        let mut errors = ValidationErrors::new();

        for constraint in field.constraints() {
            tracing::trace!(
                field = field.name(),
                constraint = constraint.name(),
                "evaluating constraint"
            );

            match constraint.check(field, self) {
                Ok(Some(error)) if !error.message.is_empty() => errors.add(error),
                Ok(_) => {}
                Err(source) => {
                    tracing::warn!(
                        field = field.name(),
                        constraint = constraint.name(),
                        error = %source,
                        "evaluation interrupted"
                    );
                    return Err(Incomplete::new(errors, source));
                }
            }
        }

        tracing::debug!(
            field = field.name(),
            constraints = field.constraints().len(),
            messages = errors.len(),
            "field evaluated"
        );
        Ok(errors)
    }
}
