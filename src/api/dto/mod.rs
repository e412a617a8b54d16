pub mod ingress_dto;
pub mod system_dto;
