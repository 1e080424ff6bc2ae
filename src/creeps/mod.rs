pub mod creep_body;
pub mod creep_command;
pub mod creep_info;
pub mod creep_role;
pub mod orders;
