pub mod injections;
pub mod real_items_client;
