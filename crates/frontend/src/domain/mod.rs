pub mod a002_verdict;
