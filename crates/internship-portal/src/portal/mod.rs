//! Portal domain modules: public site content, the job/candidate catalog, and
//! the admin dashboard.

pub mod catalog;
pub mod dashboard;
pub mod site;
