pub mod courses;
pub mod legacy;
pub mod students;
pub mod system;
pub mod teachers;

pub use courses::CourseService;
pub use legacy::LegacyStudentService;
pub use students::StudentService;
pub use system::SystemService;
pub use teachers::TeacherService;
