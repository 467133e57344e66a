// History views: the resume table and the interview panel (trend chart + cards).

pub mod handlers;
pub mod interviews;
pub mod resumes;
