pub mod annotations;
pub mod model;
pub mod service;
