mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod student_dashboard;
pub use student_dashboard::StudentDashboardView;
