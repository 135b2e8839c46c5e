pub mod catalog_service;
pub mod experience_service;
pub mod grading_service;
pub mod session_service;
pub mod user_service;
