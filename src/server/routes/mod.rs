pub mod ai;
pub mod projects;
pub mod realtime;
pub mod resources;
