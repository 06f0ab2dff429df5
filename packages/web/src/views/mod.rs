mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod admin;
pub use admin::Admin;

mod student;
pub use student::Student;
