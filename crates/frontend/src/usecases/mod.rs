pub mod u501_visitor_count;
