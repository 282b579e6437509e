pub mod a001_case;
pub mod a002_verdict;
