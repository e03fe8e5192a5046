pub mod data_table;
pub mod multi_select;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
