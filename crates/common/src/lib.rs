//! Shared building blocks for the section titles workspace.
//! - Logging initialisation (`utils::logging`)
//! - Startup environment checks (`env`)
//! - Small response types shared by the HTTP layer (`types`)

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }
}
