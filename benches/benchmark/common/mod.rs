use criterion::Criterion;
use serde::Serialize;
use serr::Context;
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub user_id: u64,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
}

impl UserData {
    pub fn new(id: u64) -> Self {
        Self {
            user_id: id,
            username: format!("user_{id}"),
            email: format!("user{id}@company.com"),
            roles: vec!["user".to_string(), "engineering".to_string()],
        }
    }
}

pub fn realistic_user_data() -> &'static Vec<UserData> {
    static INSTANCE: OnceLock<Vec<UserData>> = OnceLock::new();
    INSTANCE.get_or_init(|| (0..1000).map(UserData::new).collect())
}

/// A base context with `keys` keys of three values each.
pub fn wide_context(keys: usize) -> Context {
    let mut ctx = Context::new();
    for i in 0..keys {
        ctx.add(format!("key_{i}"), [i, i + 1, i + 2]);
    }
    ctx
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
        .sample_size(50)
}
