//! Per-entity services
//!
//! Each service wraps the shared [`ApiClient`](crate::client::ApiClient)
//! with the route knowledge, fallback chains, and normalization for one
//! admin-console area.

pub mod class_schedule;
pub mod equipment;
pub mod members;
pub mod membership;
pub mod reports;
pub mod sales;
pub mod settings;
pub mod trainers;

pub use class_schedule::ClassScheduleService;
pub use equipment::EquipmentService;
pub use members::MemberService;
pub use membership::MembershipService;
pub use reports::{DashboardData, ReportsService};
pub use sales::SalesService;
pub use settings::SettingsService;
pub use trainers::TrainerService;
