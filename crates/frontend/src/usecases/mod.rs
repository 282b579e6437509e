pub mod u501_submit_case;
