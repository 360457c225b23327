use std::fmt;

use super::outcome::{Failure, Outcome};

type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// A named predicate over one field of a request, plus the message
/// surfaced when it does not hold
pub struct Rule<R> {
    name: &'static str,
    field: &'static str,
    message: String,
    predicate: Predicate<R>,
}

impl<R> Rule<R> {
    pub fn new<P>(name: &'static str, field: &'static str, message: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            field,
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_satisfied_by(&self, request: &R) -> bool {
        (self.predicate)(request)
    }
}

impl<R> fmt::Debug for Rule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("field", &self.field)
            .field("message", &self.message)
            .finish()
    }
}

/// Ordered rules for one request type
///
/// Rules run in declaration order and the first violation wins, so put the
/// rule whose message should surface first at the front.
///
/// # Example
/// ```
/// use customers_api::mediator::RuleSet;
///
/// struct Rename { id: i64, name: String }
///
/// let rules = RuleSet::<Rename>::new()
///     .greater_than("id", |r| r.id, 0)
///     .not_empty("name", |r| r.name.as_str())
///     .min_length("name", |r| r.name.as_str(), 3);
///
/// let outcome = rules.validate(&Rename { id: 1, name: "Al".into() });
/// assert_eq!(outcome.message(), Some("name must be at least 3 characters"));
/// ```
pub struct RuleSet<R> {
    rules: Vec<Rule<R>>,
}

impl<R: 'static> RuleSet<R> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends an arbitrary rule
    pub fn rule<P>(mut self, name: &'static str, field: &'static str, message: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&R) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(name, field, message, predicate));
        self
    }

    /// String must be present and not blank
    pub fn not_empty<A>(self, field: &'static str, accessor: A) -> Self
    where
        A: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.rule(
            "not_empty",
            field,
            format!("{} must not be empty", field),
            move |request| !accessor(request).trim().is_empty(),
        )
    }

    /// String must have at least `min` characters
    pub fn min_length<A>(self, field: &'static str, accessor: A, min: usize) -> Self
    where
        A: Fn(&R) -> &str + Send + Sync + 'static,
    {
        self.rule(
            "min_length",
            field,
            format!("{} must be at least {} characters", field, min),
            move |request| accessor(request).chars().count() >= min,
        )
    }

    /// Number must be strictly greater than `bound`
    pub fn greater_than<A>(self, field: &'static str, accessor: A, bound: i64) -> Self
    where
        A: Fn(&R) -> i64 + Send + Sync + 'static,
    {
        let message = if bound == 0 {
            format!("{} must be greater than zero", field)
        } else {
            format!("{} must be greater than {}", field, bound)
        };

        self.rule("greater_than", field, message, move |request| accessor(request) > bound)
    }
}

impl<R> RuleSet<R> {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[Rule<R>] {
        &self.rules
    }

    /// Runs the gate; the first violated rule becomes the failure
    pub fn validate(&self, request: &R) -> Outcome {
        match self.rules.iter().find(|rule| !rule.is_satisfied_by(request)) {
            Some(rule) => Failure::validation(rule.message()).into(),
            None => Outcome::success(),
        }
    }

    /// Every violated rule, in declaration order
    pub fn violations(&self, request: &R) -> Vec<&Rule<R>> {
        self.rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(request))
            .collect()
    }
}

impl<R: 'static> Default for RuleSet<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for RuleSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules.iter()).finish()
    }
}
