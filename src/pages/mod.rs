pub mod create_job;
pub mod job_detail;
pub mod jobs;
pub mod login;
pub mod my_jobs;
pub mod register;
