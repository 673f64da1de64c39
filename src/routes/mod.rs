pub mod courses;

pub mod legacy;

pub mod students;

pub mod system;

pub mod teachers;

pub use courses::configure_courses_routes;
pub use legacy::configure_legacy_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;
pub use teachers::configure_teachers_routes;
