use std::collections::HashMap;
use std::sync::Arc;

/// Set by the ECS/Fargate agent, e.g. `AWS_ECS_FARGATE`.
pub const EXECUTION_ENV_VAR: &str = "AWS_EXECUTION_ENV";

/// Where handlers read environment variables from.
///
/// `Process` goes to `std::env` on every lookup, so a value changed after
/// startup is seen by the next request.
#[derive(Debug, Clone)]
pub enum EnvSource {
    Process,
    Fixed(Arc<HashMap<String, String>>),
}

impl EnvSource {
    pub fn process() -> Self {
        Self::Process
    }

    #[allow(unused)]
    pub fn fixed<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self::Fixed(Arc::new(vars))
    }

    /// `None` when the variable is unset or not valid unicode.
    pub fn var(&self, key: &str) -> Option<String> {
        match self {
            EnvSource::Process => std::env::var(key).ok(),
            EnvSource::Fixed(vars) => vars.get(key).cloned(),
        }
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::process()
    }
}
