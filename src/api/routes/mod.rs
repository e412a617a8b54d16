//! API route declarations (e.g., /api/*)

pub mod ingress_routes;
pub mod system_routes;
