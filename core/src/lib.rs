pub mod capture;
pub mod report;
pub mod scanner;
pub mod worker;
