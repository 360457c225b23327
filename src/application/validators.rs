use crate::mediator::RuleSet;

/// Shortest accepted name
pub const MIN_NAME_LENGTH: usize = 3;

/// Rule vocabulary shared by every request type
pub trait CommonRules<R> {
    /// Identifier must be strictly greater than zero
    fn id<A>(self, field: &'static str, accessor: A) -> Self
    where
        A: Fn(&R) -> i64 + Send + Sync + 'static;

    /// Name must be present, not blank, and at least [`MIN_NAME_LENGTH`] characters
    fn name<A>(self, field: &'static str, accessor: A) -> Self
    where
        A: Fn(&R) -> &str + Send + Sync + Clone + 'static;
}

impl<R: 'static> CommonRules<R> for RuleSet<R> {
    fn id<A>(self, field: &'static str, accessor: A) -> Self
    where
        A: Fn(&R) -> i64 + Send + Sync + 'static,
    {
        self.greater_than(field, accessor, 0)
    }

    fn name<A>(self, field: &'static str, accessor: A) -> Self
    where
        A: Fn(&R) -> &str + Send + Sync + Clone + 'static,
    {
        self.not_empty(field, accessor.clone())
            .min_length(field, accessor, MIN_NAME_LENGTH)
    }
}
