pub mod auth_service;
pub use auth_service::{AuthError, AuthService};

pub mod auth_service_impl;
pub use auth_service_impl::StoreAuthService;

pub mod target_service;
pub use target_service::TargetService;

pub mod target_service_impl;
pub use target_service_impl::StoreTargetService;
