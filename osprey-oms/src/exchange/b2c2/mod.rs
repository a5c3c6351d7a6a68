pub mod b2c2_client;
pub mod descriptor;
pub mod request_builder;
pub mod requests;
