//! 页面视图

pub mod employee_detail;
pub mod employees;
