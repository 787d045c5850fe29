pub mod order_helpers;
pub mod response_helpers;
