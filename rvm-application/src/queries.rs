pub mod dashboard_queries;
pub mod machine_queries;
pub mod user_queries;
